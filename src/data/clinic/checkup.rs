use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::model::clinic::{CheckupAppointment, CreateCheckupAppointmentParams};

/// Repository providing database operations for health checkup appointments.
pub struct CheckupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckupRepository<'a> {
    /// Creates a new CheckupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CheckupRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new health checkup appointment record.
    ///
    /// # Arguments
    /// - `params` - Appointment fields, already validated by the service layer
    ///
    /// # Returns
    /// - `Ok(CheckupAppointment)` - The created appointment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateCheckupAppointmentParams,
    ) -> Result<CheckupAppointment, DbErr> {
        let entity = entity::checkup_appointment::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            package: ActiveValue::Set(params.package),
            date: ActiveValue::Set(params.date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CheckupAppointment::from_entity(entity))
    }
}
