use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::doctor::DoctorDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub patient_email: String,
    #[serde(default)]
    pub patient_phone: String,
    pub doctor_id: Option<i32>,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub appointment_date: String,
    #[serde(default)]
    pub time_slot: String,
    #[serde(default)]
    pub reason: String,
    pub notes: Option<String>,
}

/// Owner-editable subset of a booking. Absent fields keep their stored value;
/// a `status` key is rejected by the endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateBookingDto {
    pub patient_name: Option<String>,
    pub patient_phone: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateBookingStatusDto {
    #[serde(default)]
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BookingUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub doctor_id: i32,
    pub user_id: i32,
    pub appointment_date: NaiveDate,
    pub time_slot: String,
    pub reason: String,
    pub notes: Option<String>,
    pub status: String,
    /// Doctor summary, present on every endpoint that loads the booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorDto>,
    /// Owning user summary, only populated on the admin listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<BookingUserDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
