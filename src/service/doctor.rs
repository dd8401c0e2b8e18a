//! Doctor roster service.
//!
//! The public side of the roster is read-only: anyone can list doctors or look
//! one up without logging in. Additions go through the admin endpoint and are
//! validated here.

use sea_orm::DatabaseConnection;

use crate::{
    data::doctor::DoctorRepository,
    dto::{api::FieldErrorDto, doctor::CreateDoctorDto},
    error::{validation::ValidationError, AppError},
    model::doctor::{CreateDoctorParams, Doctor},
};

pub struct DoctorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the doctor roster, name ascending.
    ///
    /// # Arguments
    /// - `department`: Optional department filter from the query string
    ///
    /// # Returns
    /// - `Ok(Vec<Doctor>)`: Matching doctors, possibly empty
    /// - `Err(AppError)`: Database error
    pub async fn list(&self, department: Option<String>) -> Result<Vec<Doctor>, AppError> {
        let repo = DoctorRepository::new(self.db);

        let department = department
            .as_deref()
            .map(str::trim)
            .filter(|department| !department.is_empty());

        Ok(repo.get_all(department).await?)
    }

    /// Gets a single doctor by id.
    ///
    /// # Arguments
    /// - `id`: Doctor id from the path
    ///
    /// # Returns
    /// - `Ok(Doctor)`: The doctor
    /// - `Err(AppError)`: Not found or database error
    pub async fn get_by_id(&self, id: i32) -> Result<Doctor, AppError> {
        let repo = DoctorRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))
    }

    /// Adds a doctor to the roster.
    ///
    /// # Arguments
    /// - `dto`: Doctor data as submitted by the admin
    ///
    /// # Returns
    /// - `Ok(Doctor)`: The created doctor
    /// - `Err(AppError)`: Validation failure or database error
    pub async fn create(&self, dto: CreateDoctorDto) -> Result<Doctor, AppError> {
        let params = Self::validate_create(dto)?;

        let repo = DoctorRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Validates roster input and assembles typed parameters.
    fn validate_create(dto: CreateDoctorDto) -> Result<CreateDoctorParams, ValidationError> {
        let mut errors = Vec::new();

        let name = dto.name.trim().to_string();
        if name.chars().count() < 2 {
            errors.push(FieldErrorDto::new(
                "name",
                "Doctor name is required and must be at least 2 characters",
            ));
        }

        let specialization = dto.specialization.trim().to_string();
        if specialization.is_empty() {
            errors.push(FieldErrorDto::new(
                "specialization",
                "Specialization is required",
            ));
        }

        let department = dto.department.trim().to_string();
        if department.is_empty() {
            errors.push(FieldErrorDto::new("department", "Department is required"));
        }

        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        let photo_url = dto
            .photo_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(CreateDoctorParams {
            name,
            specialization,
            department,
            photo_url,
        })
    }
}
