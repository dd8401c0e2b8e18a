//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository` for managing doctor appointment
//! bookings. Reads return bookings with their related doctor loaded so API
//! responses can embed the doctor summary without extra round trips, and the
//! admin listing additionally resolves the owning user of each booking.
//!
//! Stored `time_slot` and `status` strings are converted back into their domain
//! enums on the way out, so a corrupted row surfaces as an internal error
//! instead of leaking an unrecognized value to callers.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::booking::{
        AllBookingsFilter, Booking, BookingSort, BookingStatus, CreateBookingParams, TimeSlot,
        UpdateBookingParams,
    },
};

/// Repository providing database operations for appointment bookings.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying booking records.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new booking in pending status.
    ///
    /// The bookings table carries a partial unique index over
    /// `(doctor_id, user_id, appointment_date, time_slot)` restricted to
    /// non-cancelled rows, so two concurrent inserts for the same slot cannot
    /// both succeed. The loser surfaces as a unique constraint violation for
    /// the service layer to map.
    ///
    /// # Arguments
    /// - `params` - Booking fields, already validated by the service layer
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking with its doctor loaded
    /// - `Err(AppError)` - Database error during insert, including unique violations
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let now = Utc::now();

        let entity = entity::booking::ActiveModel {
            patient_name: ActiveValue::Set(params.patient_name),
            patient_email: ActiveValue::Set(params.patient_email),
            patient_phone: ActiveValue::Set(params.patient_phone),
            doctor_id: ActiveValue::Set(params.doctor_id),
            user_id: ActiveValue::Set(params.user_id),
            appointment_date: ActiveValue::Set(params.appointment_date),
            time_slot: ActiveValue::Set(params.time_slot.as_str().to_string()),
            reason: ActiveValue::Set(params.reason),
            notes: ActiveValue::Set(params.notes),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        // Fetch with related doctor for the response payload
        let (booking, doctor) = entity::prelude::Booking::find_by_id(entity.id)
            .find_also_related(entity::prelude::Doctor)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Booking with id {} not found after creation",
                entity.id
            )))?;

        Ok(Booking::from_entity(booking, doctor, None)?)
    }

    /// Gets a booking by id with its related doctor.
    ///
    /// # Arguments
    /// - `id` - Booking id from a path parameter
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found with its doctor loaded
    /// - `Ok(None)` - No booking with that id
    /// - `Err(AppError)` - Database error or unrecognized stored value
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let result = entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Doctor)
            .one(self.db)
            .await?;

        match result {
            Some((booking, doctor)) => Ok(Some(Booking::from_entity(booking, doctor, None)?)),
            None => Ok(None),
        }
    }

    /// Gets all bookings owned by a user, soonest appointment first.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - The user's bookings ordered by appointment date
    ///   then time slot, each with its doctor loaded
    /// - `Err(AppError)` - Database error or unrecognized stored value
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        let results = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_asc(entity::booking::Column::AppointmentDate)
            .order_by_asc(entity::booking::Column::TimeSlot)
            .find_also_related(entity::prelude::Doctor)
            .all(self.db)
            .await?;

        results
            .into_iter()
            .map(|(booking, doctor)| Ok(Booking::from_entity(booking, doctor, None)?))
            .collect()
    }

    /// Finds a non-cancelled booking occupying the given slot, if any.
    ///
    /// Used as a friendly pre-check before insert so the common double-booking
    /// case gets a conflict response without relying on the unique index.
    ///
    /// # Arguments
    /// - `doctor_id` - Doctor the slot belongs to
    /// - `user_id` - User attempting to book
    /// - `appointment_date` - Requested appointment date
    /// - `time_slot` - Requested time slot
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - An active booking already holds this slot
    /// - `Ok(None)` - Slot is free for this user and doctor
    /// - `Err(AppError)` - Database error or unrecognized stored value
    pub async fn find_active_duplicate(
        &self,
        doctor_id: i32,
        user_id: i32,
        appointment_date: NaiveDate,
        time_slot: TimeSlot,
    ) -> Result<Option<Booking>, AppError> {
        let result = entity::prelude::Booking::find()
            .filter(entity::booking::Column::DoctorId.eq(doctor_id))
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::AppointmentDate.eq(appointment_date))
            .filter(entity::booking::Column::TimeSlot.eq(time_slot.as_str()))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
            .one(self.db)
            .await?;

        match result {
            Some(booking) => Ok(Some(Booking::from_entity(booking, None, None)?)),
            None => Ok(None),
        }
    }

    /// Updates the owner-editable contact fields of a booking.
    ///
    /// Only fields provided as `Some` are written. The booking's status and
    /// slot assignment are never touched here.
    ///
    /// # Arguments
    /// - `id` - Id of the booking to update
    /// - `params` - Replacement values for the provided fields
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking with its doctor loaded
    /// - `Err(AppError)` - Booking disappeared or database error during update
    pub async fn update_contact(
        &self,
        id: i32,
        params: UpdateBookingParams,
    ) -> Result<Booking, AppError> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();

        if let Some(patient_name) = params.patient_name {
            active_model.patient_name = ActiveValue::Set(patient_name);
        }
        if let Some(patient_phone) = params.patient_phone {
            active_model.patient_phone = ActiveValue::Set(patient_phone);
        }
        if let Some(reason) = params.reason {
            active_model.reason = ActiveValue::Set(reason);
        }
        if let Some(notes) = params.notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        self.reload_with_doctor(updated.id).await
    }

    /// Sets the status of a booking.
    ///
    /// Lifecycle rules are enforced by the service layer; this method writes
    /// whatever status it is handed.
    ///
    /// # Arguments
    /// - `id` - Id of the booking to update
    /// - `status` - New status value
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking with its doctor loaded
    /// - `Err(AppError)` - Booking disappeared or database error during update
    pub async fn set_status(&self, id: i32, status: BookingStatus) -> Result<Booking, AppError> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        self.reload_with_doctor(updated.id).await
    }

    /// Gets all bookings matching the admin listing filter.
    ///
    /// Bookings are returned with both their doctor and their owning user
    /// loaded. Owning users are resolved in a single batched query.
    ///
    /// # Arguments
    /// - `filter` - Optional status and doctor restrictions plus sort order
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Matching bookings in the requested order
    /// - `Err(AppError)` - Database error or unrecognized stored value
    pub async fn get_all_filtered(
        &self,
        filter: AllBookingsFilter,
    ) -> Result<Vec<Booking>, AppError> {
        let mut query = entity::prelude::Booking::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::booking::Column::Status.eq(status.as_str()));
        }
        if let Some(doctor_id) = filter.doctor_id {
            query = query.filter(entity::booking::Column::DoctorId.eq(doctor_id));
        }

        query = match filter.sort {
            BookingSort::AppointmentDate => query
                .order_by_asc(entity::booking::Column::AppointmentDate)
                .order_by_asc(entity::booking::Column::TimeSlot),
            BookingSort::Newest => query.order_by_desc(entity::booking::Column::CreatedAt),
        };

        let results = query
            .find_also_related(entity::prelude::Doctor)
            .all(self.db)
            .await?;

        // Resolve owning users in one query
        let user_ids: Vec<i32> = results.iter().map(|(booking, _)| booking.user_id).collect();

        let users_map: HashMap<i32, entity::user::Model> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        };

        results
            .into_iter()
            .map(|(booking, doctor)| {
                let user = users_map.get(&booking.user_id).cloned();
                Ok(Booking::from_entity(booking, doctor, user)?)
            })
            .collect()
    }

    /// Re-fetches a booking with its related doctor after a write.
    async fn reload_with_doctor(&self, id: i32) -> Result<Booking, AppError> {
        let (booking, doctor) = entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Doctor)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        Ok(Booking::from_entity(booking, doctor, None)?)
    }
}
