//! Doctor data repository for database operations.
//!
//! This module provides the `DoctorRepository` for managing the doctor directory.
//! Doctors are created by administrators and listed publicly, so the queries here
//! back both the public browsing endpoints and the admin management endpoint.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::doctor::{CreateDoctorParams, Doctor};

/// Repository providing database operations for the doctor directory.
pub struct DoctorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorRepository<'a> {
    /// Creates a new DoctorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DoctorRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new doctor record.
    ///
    /// # Arguments
    /// - `params` - Doctor profile fields, already validated by the service layer
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The created doctor
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateDoctorParams) -> Result<Doctor, DbErr> {
        let entity = entity::doctor::ActiveModel {
            name: ActiveValue::Set(params.name),
            specialization: ActiveValue::Set(params.specialization),
            department: ActiveValue::Set(params.department),
            photo_url: ActiveValue::Set(params.photo_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Doctor::from_entity(entity))
    }

    /// Gets a doctor by id.
    ///
    /// # Arguments
    /// - `id` - Doctor id from a path parameter or a booking row
    ///
    /// # Returns
    /// - `Ok(Some(Doctor))` - Doctor found
    /// - `Ok(None)` - No doctor with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Doctor>, DbErr> {
        let entity = entity::prelude::Doctor::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Doctor::from_entity))
    }

    /// Gets all doctors ordered by name, optionally restricted to one department.
    ///
    /// # Arguments
    /// - `department` - Exact department name to filter by, or `None` for all doctors
    ///
    /// # Returns
    /// - `Ok(Vec<Doctor>)` - Matching doctors in ascending name order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, department: Option<&str>) -> Result<Vec<Doctor>, DbErr> {
        let mut query =
            entity::prelude::Doctor::find().order_by_asc(entity::doctor::Column::Name);

        if let Some(department) = department {
            query = query.filter(entity::doctor::Column::Department.eq(department));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Doctor::from_entity).collect())
    }
}
