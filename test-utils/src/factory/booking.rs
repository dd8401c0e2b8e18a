//! Booking factory for creating test appointments.
//!
//! This module provides factory methods for creating booking entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Provides a builder pattern for creating booking entities with default
/// values that can be overridden as needed for specific test scenarios.
/// The referenced user and doctor rows must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, user.id, doctor.id)
///     .time_slot("14:00")
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    doctor_id: i32,
    patient_name: String,
    patient_email: String,
    patient_phone: String,
    appointment_date: NaiveDate,
    time_slot: String,
    reason: String,
    notes: Option<String>,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - patient_name: `"Patient {id}"` where id is auto-incremented
    /// - patient_email: `"patient{id}@example.com"`
    /// - patient_phone: a unique 10-digit number
    /// - appointment_date: one week from today
    /// - time_slot: `"09:00"`
    /// - reason: `"Routine consultation"`
    /// - notes: `None`
    /// - status: `"pending"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user account
    /// - `doctor_id` - Id of the doctor being booked
    ///
    /// # Returns
    /// - `BookingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32, doctor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            doctor_id,
            patient_name: format!("Patient {}", id),
            patient_email: format!("patient{}@example.com", id),
            patient_phone: format!("07000{:05}", id % 100_000),
            appointment_date: Utc::now().date_naive() + chrono::Duration::days(7),
            time_slot: "09:00".to_string(),
            reason: "Routine consultation".to_string(),
            notes: None,
            status: "pending".to_string(),
        }
    }

    /// Sets the denormalized patient name.
    ///
    /// # Arguments
    /// - `patient_name` - Name recorded on the booking
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn patient_name(mut self, patient_name: impl Into<String>) -> Self {
        self.patient_name = patient_name.into();
        self
    }

    /// Sets the denormalized patient phone number.
    ///
    /// # Arguments
    /// - `patient_phone` - Phone number recorded on the booking
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn patient_phone(mut self, patient_phone: impl Into<String>) -> Self {
        self.patient_phone = patient_phone.into();
        self
    }

    /// Sets the appointment date.
    ///
    /// # Arguments
    /// - `appointment_date` - Calendar date of the appointment
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn appointment_date(mut self, appointment_date: NaiveDate) -> Self {
        self.appointment_date = appointment_date;
        self
    }

    /// Sets the time slot.
    ///
    /// # Arguments
    /// - `time_slot` - One of the fixed slot strings, e.g. `"10:00"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn time_slot(mut self, time_slot: impl Into<String>) -> Self {
        self.time_slot = time_slot.into();
        self
    }

    /// Sets the visit reason.
    ///
    /// # Arguments
    /// - `reason` - Reason recorded on the booking
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Sets the optional notes.
    ///
    /// # Arguments
    /// - `notes` - Free-text notes, or `None`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Sets the lifecycle status.
    ///
    /// # Arguments
    /// - `status` - One of `"pending"`, `"confirmed"`, `"completed"`, `"cancelled"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            patient_name: ActiveValue::Set(self.patient_name),
            patient_email: ActiveValue::Set(self.patient_email),
            patient_phone: ActiveValue::Set(self.patient_phone),
            doctor_id: ActiveValue::Set(self.doctor_id),
            user_id: ActiveValue::Set(self.user_id),
            appointment_date: ActiveValue::Set(self.appointment_date),
            time_slot: ActiveValue::Set(self.time_slot),
            reason: ActiveValue::Set(self.reason),
            notes: ActiveValue::Set(self.notes),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the given user and doctor.
///
/// Shorthand for `BookingFactory::new(db, user_id, doctor_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the owning user account
/// - `doctor_id` - Id of the doctor being booked
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let booking = create_booking(&db, user.id, doctor.id).await?;
/// ```
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    doctor_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, doctor_id).build().await
}
