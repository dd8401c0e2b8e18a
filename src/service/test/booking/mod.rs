use crate::{
    dto::booking::{CreateBookingDto, UpdateBookingDto, UpdateBookingStatusDto},
    error::AppError,
    model::{booking::BookingStatus, user::User},
    service::booking::BookingService,
};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};
use test_utils::{builder::TestBuilder, factory};

mod all_bookings;
mod set_status;

/// Formats a date `days` ahead of today in the wire format.
fn future_date_string(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Returns a creation payload that passes validation for the given doctor.
fn valid_create_dto(doctor_id: i32) -> CreateBookingDto {
    CreateBookingDto {
        patient_name: "Jane Walker".to_string(),
        patient_email: "jane.walker@example.com".to_string(),
        patient_phone: "0712345678".to_string(),
        doctor_id: Some(doctor_id),
        appointment_date: future_date_string(14),
        time_slot: "10:00".to_string(),
        reason: "Persistent headaches".to_string(),
        notes: None,
    }
}
