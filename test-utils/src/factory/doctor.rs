//! Doctor factory for creating test roster entries.
//!
//! This module provides factory methods for creating doctor entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test doctors with customizable fields.
///
/// Provides a builder pattern for creating doctor entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::doctor::DoctorFactory;
///
/// let doctor = DoctorFactory::new(&db)
///     .name("Dr. Gupta")
///     .specialization("Cardiology")
///     .department("Cardiology")
///     .build()
///     .await?;
/// ```
pub struct DoctorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    specialization: String,
    department: String,
    photo_url: Option<String>,
}

impl<'a> DoctorFactory<'a> {
    /// Creates a new DoctorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Doctor {id}"` where id is auto-incremented
    /// - specialization: `"General Medicine"`
    /// - department: `"Outpatient"`
    /// - photo_url: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DoctorFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Doctor {}", id),
            specialization: "General Medicine".to_string(),
            department: "Outpatient".to_string(),
            photo_url: None,
        }
    }

    /// Sets the doctor's display name.
    ///
    /// # Arguments
    /// - `name` - Display name for the doctor
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the doctor's specialization.
    ///
    /// # Arguments
    /// - `specialization` - Medical specialization label
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    /// Sets the doctor's department.
    ///
    /// # Arguments
    /// - `department` - Hospital department name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the doctor's photo URL.
    ///
    /// # Arguments
    /// - `photo_url` - Optional URL to a profile photo
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn photo_url(mut self, photo_url: Option<String>) -> Self {
        self.photo_url = photo_url;
        self
    }

    /// Builds and inserts the doctor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::doctor::Model)` - Created doctor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::doctor::Model, DbErr> {
        entity::doctor::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            specialization: ActiveValue::Set(self.specialization),
            department: ActiveValue::Set(self.department),
            photo_url: ActiveValue::Set(self.photo_url),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a doctor with default values.
///
/// Shorthand for `DoctorFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::doctor::Model)` - Created doctor entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let doctor = create_doctor(&db).await?;
/// ```
pub async fn create_doctor(db: &DatabaseConnection) -> Result<entity::doctor::Model, DbErr> {
    DoctorFactory::new(db).build().await
}
