//! Booking domain models and parameters.
//!
//! Provides the appointment booking domain model together with the two small
//! enums that gate it: the fixed set of daily time slots and the booking
//! lifecycle status. Both are stored as plain strings in the database and
//! parsed back into enums at the repository boundary, so a row that fails to
//! parse surfaces as an internal error instead of leaking onwards.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    dto::booking::{BookingDto, BookingUserDto},
    error::internal::InternalError,
    model::doctor::Doctor,
};

/// Fixed daily appointment slots. Stored verbatim as `HH:MM` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Slot09,
    Slot10,
    Slot11,
    Slot14,
    Slot15,
    Slot16,
}

impl TimeSlot {
    /// Every bookable slot, in chronological order.
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Slot09,
        TimeSlot::Slot10,
        TimeSlot::Slot11,
        TimeSlot::Slot14,
        TimeSlot::Slot15,
        TimeSlot::Slot16,
    ];

    /// The wire and storage representation of the slot.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::Slot09 => "09:00",
            TimeSlot::Slot10 => "10:00",
            TimeSlot::Slot11 => "11:00",
            TimeSlot::Slot14 => "14:00",
            TimeSlot::Slot15 => "15:00",
            TimeSlot::Slot16 => "16:00",
        }
    }

    /// Parses a slot from its `HH:MM` representation.
    ///
    /// # Returns
    /// - `Some(TimeSlot)` - The value matches one of the fixed slots
    /// - `None` - Anything else, including well-formed times outside the set
    pub fn parse(value: &str) -> Option<TimeSlot> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == value)
    }
}

/// Booking lifecycle status. Stored verbatim as lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// The wire and storage representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its stored representation.
    pub fn parse(value: &str) -> Option<BookingStatus> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether the lifecycle permits moving from `self` to `target`.
    ///
    /// The lifecycle is `pending → confirmed → completed` with a shortcut
    /// `pending → completed`, and any non-cancelled status may move to
    /// `cancelled`. `cancelled` is terminal.
    pub fn can_transition_to(self, target: BookingStatus) -> bool {
        match (self, target) {
            (BookingStatus::Cancelled, _) => false,
            (_, BookingStatus::Cancelled) => true,
            (BookingStatus::Pending, BookingStatus::Confirmed) => true,
            (BookingStatus::Pending | BookingStatus::Confirmed, BookingStatus::Completed) => true,
            _ => false,
        }
    }
}

/// Owning user summary embedded in admin booking listings.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl BookingUser {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> BookingUserDto {
        BookingUserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Appointment booking linking a user to a doctor on a date and slot.
///
/// The doctor and owning user summaries are optional because not every query
/// loads them; endpoints that return the booking load at least the doctor.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub doctor_id: i32,
    pub user_id: i32,
    pub appointment_date: NaiveDate,
    pub time_slot: TimeSlot,
    pub reason: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub doctor: Option<Doctor>,
    pub user: Option<BookingUser>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Converts entity models to a booking domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The booking entity from the database
    /// - `doctor` - The related doctor entity, when the query loaded it
    /// - `user` - The owning user entity, when the query loaded it
    ///
    /// # Returns
    /// - `Ok(Booking)` - Successfully converted domain model
    /// - `Err(InternalError)` - The stored time slot or status failed to parse
    pub fn from_entity(
        entity: entity::booking::Model,
        doctor: Option<entity::doctor::Model>,
        user: Option<entity::user::Model>,
    ) -> Result<Self, InternalError> {
        let time_slot = TimeSlot::parse(&entity.time_slot).ok_or(InternalError::InvalidTimeSlot {
            value: entity.time_slot.clone(),
        })?;
        let status = BookingStatus::parse(&entity.status).ok_or(InternalError::InvalidStatus {
            value: entity.status.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            patient_name: entity.patient_name,
            patient_email: entity.patient_email,
            patient_phone: entity.patient_phone,
            doctor_id: entity.doctor_id,
            user_id: entity.user_id,
            appointment_date: entity.appointment_date,
            time_slot,
            reason: entity.reason,
            notes: entity.notes,
            status,
            doctor: doctor.map(Doctor::from_entity),
            user: user.map(BookingUser::from_entity),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the booking domain model to a DTO for API responses.
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            patient_name: self.patient_name,
            patient_email: self.patient_email,
            patient_phone: self.patient_phone,
            doctor_id: self.doctor_id,
            user_id: self.user_id,
            appointment_date: self.appointment_date,
            time_slot: self.time_slot.as_str().to_string(),
            reason: self.reason,
            notes: self.notes,
            status: self.status.as_str().to_string(),
            doctor: self.doctor.map(Doctor::into_dto),
            user: self.user.map(BookingUser::into_dto),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a booking, already validated and typed.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub doctor_id: i32,
    pub user_id: i32,
    pub appointment_date: NaiveDate,
    pub time_slot: TimeSlot,
    pub reason: String,
    pub notes: Option<String>,
}

/// Owner-editable booking fields; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingParams {
    pub patient_name: Option<String>,
    pub patient_phone: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// Ordering for the admin booking listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingSort {
    /// Ascending by appointment date, then slot.
    #[default]
    AppointmentDate,
    /// Most recently created first.
    Newest,
}

/// Filters for the admin booking listing. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct AllBookingsFilter {
    pub status: Option<BookingStatus>,
    pub doctor_id: Option<i32>,
    pub sort: BookingSort,
}
