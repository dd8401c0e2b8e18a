//! Clinic resource-booking service.
//!
//! Lab tests, health checkups and surgery requests are public fire-and-forget
//! submissions: no login, presence validation only, and no lifecycle after the
//! insert. Each booking lands in its own table and the client only receives a
//! confirmation message.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::clinic::{CheckupRepository, LabRepository, SurgeryRepository},
    dto::{
        api::FieldErrorDto,
        clinic::{CheckupBookingDto, LabBookingDto, SurgeryBookingDto},
    },
    error::{validation::ValidationError, AppError},
    model::clinic::{
        CheckupAppointment, CreateCheckupAppointmentParams, CreateLabAppointmentParams,
        CreateSurgeryParams, LabAppointment, Surgery,
    },
};

pub struct ClinicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClinicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a lab test.
    ///
    /// # Arguments
    /// - `dto`: Lab booking data as submitted by the client
    ///
    /// # Returns
    /// - `Ok(LabAppointment)`: The stored booking
    /// - `Err(AppError)`: Validation failure or database error
    pub async fn book_lab(&self, dto: LabBookingDto) -> Result<LabAppointment, AppError> {
        let mut errors = Vec::new();

        let name = Self::require(&dto.name, "name", "Name is required", &mut errors);
        let email = Self::require(&dto.email, "email", "Email is required", &mut errors);
        let phone = Self::require(&dto.phone, "phone", "Phone is required", &mut errors);
        let test_type = Self::require(
            &dto.test_type,
            "test_type",
            "Test type is required",
            &mut errors,
        );
        let date = Self::parse_date(&dto.date, &mut errors);

        match date {
            Some(date) if errors.is_empty() => {
                let repo = LabRepository::new(self.db);

                Ok(repo
                    .create(CreateLabAppointmentParams {
                        name,
                        email,
                        phone,
                        test_type,
                        date,
                    })
                    .await?)
            }
            _ => Err(ValidationError::new(errors).into()),
        }
    }

    /// Books a health checkup package.
    ///
    /// # Arguments
    /// - `dto`: Checkup booking data as submitted by the client
    ///
    /// # Returns
    /// - `Ok(CheckupAppointment)`: The stored booking
    /// - `Err(AppError)`: Validation failure or database error
    pub async fn book_checkup(
        &self,
        dto: CheckupBookingDto,
    ) -> Result<CheckupAppointment, AppError> {
        let mut errors = Vec::new();

        let name = Self::require(&dto.name, "name", "Name is required", &mut errors);
        let email = Self::require(&dto.email, "email", "Email is required", &mut errors);
        let phone = Self::require(&dto.phone, "phone", "Phone is required", &mut errors);
        let package = Self::require(&dto.package, "package", "Package is required", &mut errors);
        let date = Self::parse_date(&dto.date, &mut errors);

        match date {
            Some(date) if errors.is_empty() => {
                let repo = CheckupRepository::new(self.db);

                Ok(repo
                    .create(CreateCheckupAppointmentParams {
                        name,
                        email,
                        phone,
                        package,
                        date,
                    })
                    .await?)
            }
            _ => Err(ValidationError::new(errors).into()),
        }
    }

    /// Submits a surgery request.
    ///
    /// The prescription is referenced by file name only; the file itself is
    /// handled out of band.
    ///
    /// # Arguments
    /// - `dto`: Surgery request data as submitted by the client
    ///
    /// # Returns
    /// - `Ok(Surgery)`: The stored request
    /// - `Err(AppError)`: Validation failure or database error
    pub async fn book_surgery(&self, dto: SurgeryBookingDto) -> Result<Surgery, AppError> {
        let mut errors = Vec::new();

        let name = Self::require(&dto.name, "name", "Name is required", &mut errors);
        let email = Self::require(&dto.email, "email", "Email is required", &mut errors);
        let phone = Self::require(&dto.phone, "phone", "Phone is required", &mut errors);
        let doctor = Self::require(&dto.doctor, "doctor", "Doctor is required", &mut errors);
        let surgery_type = Self::require(
            &dto.surgery_type,
            "surgery_type",
            "Surgery type is required",
            &mut errors,
        );
        let date = Self::parse_date(&dto.date, &mut errors);

        let prescription_file_name = dto
            .prescription_file_name
            .map(|file_name| file_name.trim().to_string())
            .filter(|file_name| !file_name.is_empty());

        match date {
            Some(date) if errors.is_empty() => {
                let repo = SurgeryRepository::new(self.db);

                Ok(repo
                    .create(CreateSurgeryParams {
                        name,
                        email,
                        phone,
                        doctor,
                        surgery_type,
                        date,
                        prescription_file_name,
                    })
                    .await?)
            }
            _ => Err(ValidationError::new(errors).into()),
        }
    }

    /// Records a presence error when the value is blank.
    ///
    /// # Returns
    /// The trimmed value, empty when the error was recorded
    fn require(
        value: &str,
        field: &str,
        message: &str,
        errors: &mut Vec<FieldErrorDto>,
    ) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.push(FieldErrorDto::new(field, message));
        }

        trimmed.to_string()
    }

    /// Parses the booking date, recording field errors.
    fn parse_date(value: &str, errors: &mut Vec<FieldErrorDto>) -> Option<NaiveDate> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.push(FieldErrorDto::new("date", "Date is required"));
            return None;
        }

        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldErrorDto::new(
                    "date",
                    "Date must be a valid date in YYYY-MM-DD format",
                ));
                None
            }
        }
    }
}
