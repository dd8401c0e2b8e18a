use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::model::clinic::{CreateSurgeryParams, Surgery};

/// Repository providing database operations for surgery requests.
pub struct SurgeryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurgeryRepository<'a> {
    /// Creates a new SurgeryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SurgeryRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new surgery request record.
    ///
    /// # Arguments
    /// - `params` - Request fields, already validated by the service layer
    ///
    /// # Returns
    /// - `Ok(Surgery)` - The created surgery request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateSurgeryParams) -> Result<Surgery, DbErr> {
        let entity = entity::surgery::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            doctor: ActiveValue::Set(params.doctor),
            surgery_type: ActiveValue::Set(params.surgery_type),
            date: ActiveValue::Set(params.date),
            prescription_file_name: ActiveValue::Set(params.prescription_file_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Surgery::from_entity(entity))
    }
}
