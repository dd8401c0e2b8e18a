//! Clinic resource-booking domain models and parameters.
//!
//! Lab tests, health checkups and surgery requests are flat fire-and-forget
//! records with no relations or lifecycle. Each gets a creation parameter
//! type and a thin domain model returned by the repository after insert.

use chrono::{DateTime, NaiveDate, Utc};

/// Booked lab test.
#[derive(Debug, Clone, PartialEq)]
pub struct LabAppointment {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub test_type: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl LabAppointment {
    pub fn from_entity(entity: entity::lab_appointment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            test_type: entity.test_type,
            date: entity.date,
            created_at: entity.created_at,
        }
    }
}

/// Booked health checkup package.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckupAppointment {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub package: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl CheckupAppointment {
    pub fn from_entity(entity: entity::checkup_appointment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            package: entity.package,
            date: entity.date,
            created_at: entity.created_at,
        }
    }
}

/// Submitted surgery request.
#[derive(Debug, Clone, PartialEq)]
pub struct Surgery {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub doctor: String,
    pub surgery_type: String,
    pub date: NaiveDate,
    /// File name of an already uploaded prescription, if any.
    pub prescription_file_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Surgery {
    pub fn from_entity(entity: entity::surgery::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            doctor: entity.doctor,
            surgery_type: entity.surgery_type,
            date: entity.date,
            prescription_file_name: entity.prescription_file_name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for booking a lab test.
#[derive(Debug, Clone)]
pub struct CreateLabAppointmentParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub test_type: String,
    pub date: NaiveDate,
}

/// Parameters for booking a health checkup.
#[derive(Debug, Clone)]
pub struct CreateCheckupAppointmentParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub package: String,
    pub date: NaiveDate,
}

/// Parameters for submitting a surgery request.
#[derive(Debug, Clone)]
pub struct CreateSurgeryParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub doctor: String,
    pub surgery_type: String,
    pub date: NaiveDate,
    pub prescription_file_name: Option<String>,
}
