use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::model::clinic::{CreateLabAppointmentParams, LabAppointment};

/// Repository providing database operations for lab test appointments.
pub struct LabRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LabRepository<'a> {
    /// Creates a new LabRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LabRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new lab test appointment record.
    ///
    /// # Arguments
    /// - `params` - Appointment fields, already validated by the service layer
    ///
    /// # Returns
    /// - `Ok(LabAppointment)` - The created appointment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateLabAppointmentParams,
    ) -> Result<LabAppointment, DbErr> {
        let entity = entity::lab_appointment::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            test_type: ActiveValue::Set(params.test_type),
            date: ActiveValue::Set(params.date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LabAppointment::from_entity(entity))
    }
}
