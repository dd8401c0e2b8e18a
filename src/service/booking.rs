//! Booking service for the appointment lifecycle.
//!
//! Owns everything between the booking endpoints and the repository: field
//! validation with per-field error collection, the doctor existence check,
//! duplicate slot detection, ownership checks, and the status lifecycle.
//! Status only ever changes through `cancel` and the admin `set_status`; the
//! generic update path rejects status keys outright.

use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::{booking::BookingRepository, doctor::DoctorRepository},
    dto::{
        api::FieldErrorDto,
        booking::{CreateBookingDto, UpdateBookingDto, UpdateBookingStatusDto},
    },
    error::{validation::ValidationError, AppError},
    model::{
        booking::{
            AllBookingsFilter, Booking, BookingSort, BookingStatus, CreateBookingParams, TimeSlot,
            UpdateBookingParams,
        },
        user::User,
    },
    service::validation,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new booking for the logged-in user.
    ///
    /// Validates the submitted fields, checks that the doctor exists, and
    /// rejects duplicate active bookings for the same doctor, date and slot.
    /// The pre-check produces the friendly conflict message; a racer that
    /// slips past it is caught by the partial unique index and mapped to the
    /// same conflict.
    ///
    /// # Arguments
    /// - `user`: The logged-in user who owns the booking
    /// - `dto`: Booking data as submitted by the client
    ///
    /// # Returns
    /// - `Ok(Booking)`: The created booking with its doctor summary loaded
    /// - `Err(AppError)`: Validation failure, unknown doctor, duplicate slot,
    ///   or database error
    pub async fn create(&self, user: &User, dto: CreateBookingDto) -> Result<Booking, AppError> {
        let params = Self::validate_create(user, dto)?;

        let doctor_repo = DoctorRepository::new(self.db);
        if doctor_repo.get_by_id(params.doctor_id).await?.is_none() {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        let repo = BookingRepository::new(self.db);

        if repo
            .find_active_duplicate(
                params.doctor_id,
                params.user_id,
                params.appointment_date,
                params.time_slot,
            )
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You already have a booking with this doctor at this time".to_string(),
            ));
        }

        match repo.create(params).await {
            Ok(booking) => Ok(booking),
            // A concurrent insert can pass the pre-check; the unique index
            // rejects it and surfaces here.
            Err(AppError::DbErr(err))
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                Err(AppError::Conflict(
                    "You already have a booking with this doctor at this time".to_string(),
                ))
            }
            Err(err) => Err(err),
        }
    }

    /// Lists the logged-in user's bookings, soonest appointment first.
    ///
    /// # Arguments
    /// - `user`: The logged-in user
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)`: The user's bookings with doctor summaries loaded
    /// - `Err(AppError)`: Database error
    pub async fn my_bookings(&self, user: &User) -> Result<Vec<Booking>, AppError> {
        let repo = BookingRepository::new(self.db);

        repo.get_by_user(user.id).await
    }

    /// Gets a single booking, enforcing ownership.
    ///
    /// # Arguments
    /// - `id`: Booking id from the path
    /// - `user`: The logged-in user
    ///
    /// # Returns
    /// - `Ok(Booking)`: The booking with its doctor summary loaded
    /// - `Err(AppError)`: Not found, not the owner, or database error
    pub async fn get_by_id(&self, id: i32, user: &User) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.user_id != user.id {
            return Err(AppError::Forbidden(
                "You do not have permission to view this booking".to_string(),
            ));
        }

        Ok(booking)
    }

    /// Updates the contact fields of a booking, enforcing ownership.
    ///
    /// Only patient_name, patient_phone, reason and notes are writable. A
    /// `status` key in the body is rejected so the lifecycle endpoints stay
    /// the only way to move a booking's status. Provided fields are validated
    /// with the same rules as creation.
    ///
    /// # Arguments
    /// - `id`: Booking id from the path
    /// - `user`: The logged-in user
    /// - `dto`: Replacement values for the provided fields
    ///
    /// # Returns
    /// - `Ok(Booking)`: The updated booking with its doctor summary loaded
    /// - `Err(AppError)`: Not found, not the owner, status key present,
    ///   validation failure, or database error
    pub async fn update(
        &self,
        id: i32,
        user: &User,
        dto: UpdateBookingDto,
    ) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.user_id != user.id {
            return Err(AppError::Forbidden(
                "You do not have permission to update this booking".to_string(),
            ));
        }

        if dto.status.is_some() {
            return Err(AppError::BadRequest(
                "Use specific endpoints to change booking status".to_string(),
            ));
        }

        let params = Self::validate_update(dto)?;

        repo.update_contact(id, params).await
    }

    /// Cancels a booking, enforcing ownership.
    ///
    /// Cancellation is terminal; a booking that is already cancelled cannot
    /// be cancelled again. The freed slot becomes bookable because only
    /// non-cancelled bookings count towards the duplicate check.
    ///
    /// # Arguments
    /// - `id`: Booking id from the path
    /// - `user`: The logged-in user
    ///
    /// # Returns
    /// - `Ok(Booking)`: The cancelled booking with its doctor summary loaded
    /// - `Err(AppError)`: Not found, not the owner, already cancelled, or
    ///   database error
    pub async fn cancel(&self, id: i32, user: &User) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.user_id != user.id {
            return Err(AppError::Forbidden(
                "You do not have permission to cancel this booking".to_string(),
            ));
        }

        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Booking is already cancelled".to_string(),
            ));
        }

        repo.set_status(id, BookingStatus::Cancelled).await
    }

    /// Lists every booking for the admin dashboard.
    ///
    /// Optional equality filters on status and doctor; `sort_by=newest`
    /// orders by creation time descending, anything else by appointment date
    /// ascending. An unrecognized status filter is rejected rather than
    /// silently matching nothing.
    ///
    /// # Arguments
    /// - `status`: Optional status filter from the query string
    /// - `doctor_id`: Optional doctor filter from the query string
    /// - `sort_by`: Optional sort order from the query string
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)`: Bookings with doctor and user summaries loaded
    /// - `Err(AppError)`: Unrecognized status filter or database error
    pub async fn all_bookings(
        &self,
        status: Option<String>,
        doctor_id: Option<i32>,
        sort_by: Option<String>,
    ) -> Result<Vec<Booking>, AppError> {
        let status = match status.as_deref() {
            None | Some("") => None,
            Some(value) => Some(
                BookingStatus::parse(value)
                    .ok_or_else(|| AppError::BadRequest("Invalid booking status".to_string()))?,
            ),
        };

        let sort = match sort_by.as_deref() {
            Some("newest") => BookingSort::Newest,
            _ => BookingSort::AppointmentDate,
        };

        let repo = BookingRepository::new(self.db);

        repo.get_all_filtered(AllBookingsFilter {
            status,
            doctor_id,
            sort,
        })
        .await
    }

    /// Moves a booking through its status lifecycle on behalf of an admin.
    ///
    /// Permitted transitions are `pending → confirmed`, `pending → completed`
    /// and `confirmed → completed`. Cancellation goes through the cancel
    /// endpoint instead, and a cancelled booking accepts no transition at all.
    ///
    /// # Arguments
    /// - `id`: Booking id from the path
    /// - `dto`: The target status
    ///
    /// # Returns
    /// - `Ok(Booking)`: The booking with its new status and doctor summary
    /// - `Err(AppError)`: Unrecognized status, forbidden transition, not
    ///   found, or database error
    pub async fn set_status(
        &self,
        id: i32,
        dto: UpdateBookingStatusDto,
    ) -> Result<Booking, AppError> {
        let target = BookingStatus::parse(dto.status.trim())
            .ok_or_else(|| AppError::BadRequest("Invalid booking status".to_string()))?;

        if target == BookingStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Use the cancel endpoint to cancel bookings".to_string(),
            ));
        }

        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !booking.status.can_transition_to(target) {
            return Err(AppError::BadRequest(format!(
                "Cannot change booking status from {} to {}",
                booking.status.as_str(),
                target.as_str()
            )));
        }

        repo.set_status(id, target).await
    }

    /// Validates creation input and assembles typed parameters.
    ///
    /// Collects one entry per failed field so the client sees every problem
    /// in a single response.
    fn validate_create(
        user: &User,
        dto: CreateBookingDto,
    ) -> Result<CreateBookingParams, ValidationError> {
        let mut errors = Vec::new();

        let patient_name = dto.patient_name.trim().to_string();
        if patient_name.chars().count() < 2 {
            errors.push(FieldErrorDto::new(
                "patient_name",
                "Patient name is required and must be at least 2 characters",
            ));
        }

        if !validation::is_valid_email(&dto.patient_email) {
            errors.push(FieldErrorDto::new(
                "patient_email",
                "Valid email is required",
            ));
        }

        if !validation::is_valid_phone(&dto.patient_phone) {
            errors.push(FieldErrorDto::new(
                "patient_phone",
                "Phone number must be at least 10 digits",
            ));
        }

        if dto.doctor_id.is_none() {
            errors.push(FieldErrorDto::new("doctor_id", "Doctor ID is required"));
        }

        let appointment_date = Self::validate_appointment_date(&dto.appointment_date, &mut errors);

        let time_slot = TimeSlot::parse(&dto.time_slot);
        if time_slot.is_none() {
            errors.push(FieldErrorDto::new(
                "time_slot",
                Self::invalid_time_slot_message(),
            ));
        }

        let reason = dto.reason.trim().to_string();
        if reason.is_empty() {
            errors.push(FieldErrorDto::new("reason", "Reason for visit is required"));
        } else if reason.chars().count() > 500 {
            errors.push(FieldErrorDto::new(
                "reason",
                "Reason cannot exceed 500 characters",
            ));
        }

        if let Some(notes) = &dto.notes {
            if notes.chars().count() > 1000 {
                errors.push(FieldErrorDto::new(
                    "notes",
                    "Notes cannot exceed 1000 characters",
                ));
            }
        }

        match (dto.doctor_id, appointment_date, time_slot) {
            (Some(doctor_id), Some(appointment_date), Some(time_slot)) if errors.is_empty() => {
                Ok(CreateBookingParams {
                    patient_name,
                    patient_email: dto.patient_email,
                    patient_phone: dto.patient_phone,
                    doctor_id,
                    user_id: user.id,
                    appointment_date,
                    time_slot,
                    reason,
                    notes: dto.notes,
                })
            }
            _ => Err(ValidationError::new(errors)),
        }
    }

    /// Validates the provided update fields with the same rules as creation.
    fn validate_update(dto: UpdateBookingDto) -> Result<UpdateBookingParams, ValidationError> {
        let mut errors = Vec::new();

        let patient_name = dto.patient_name.map(|name| name.trim().to_string());
        if let Some(name) = &patient_name {
            if name.chars().count() < 2 {
                errors.push(FieldErrorDto::new(
                    "patient_name",
                    "Patient name is required and must be at least 2 characters",
                ));
            }
        }

        if let Some(phone) = &dto.patient_phone {
            if !validation::is_valid_phone(phone) {
                errors.push(FieldErrorDto::new(
                    "patient_phone",
                    "Phone number must be at least 10 digits",
                ));
            }
        }

        let reason = dto.reason.map(|reason| reason.trim().to_string());
        if let Some(reason) = &reason {
            if reason.is_empty() {
                errors.push(FieldErrorDto::new("reason", "Reason for visit is required"));
            } else if reason.chars().count() > 500 {
                errors.push(FieldErrorDto::new(
                    "reason",
                    "Reason cannot exceed 500 characters",
                ));
            }
        }

        if let Some(notes) = &dto.notes {
            if notes.chars().count() > 1000 {
                errors.push(FieldErrorDto::new(
                    "notes",
                    "Notes cannot exceed 1000 characters",
                ));
            }
        }

        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        Ok(UpdateBookingParams {
            patient_name,
            patient_phone: dto.patient_phone,
            reason,
            notes: dto.notes,
        })
    }

    /// Parses and range-checks the appointment date, recording field errors.
    ///
    /// # Returns
    /// - `Some(NaiveDate)` - A well-formed date strictly after today
    /// - `None` - Missing, malformed, or not in the future; an error was pushed
    fn validate_appointment_date(
        value: &str,
        errors: &mut Vec<FieldErrorDto>,
    ) -> Option<NaiveDate> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.push(FieldErrorDto::new(
                "appointment_date",
                "Appointment date is required",
            ));
            return None;
        }

        let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") else {
            errors.push(FieldErrorDto::new(
                "appointment_date",
                "Appointment date must be a valid date in YYYY-MM-DD format",
            ));
            return None;
        };

        if date <= Utc::now().date_naive() {
            errors.push(FieldErrorDto::new(
                "appointment_date",
                "Appointment date must be in the future",
            ));
            return None;
        }

        Some(date)
    }

    /// Builds the invalid slot message listing every bookable slot.
    fn invalid_time_slot_message() -> String {
        let slots = TimeSlot::ALL
            .iter()
            .map(|slot| slot.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!("Invalid time slot. Valid slots: {}", slots)
    }
}
