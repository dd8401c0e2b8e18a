//! Doctor domain models and parameters.

use crate::dto::doctor::DoctorDto;

/// Doctor on the hospital roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub department: String,
    pub photo_url: Option<String>,
}

impl Doctor {
    /// Converts an entity model to a doctor domain model at the repository boundary.
    pub fn from_entity(entity: entity::doctor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            specialization: entity.specialization,
            department: entity.department,
            photo_url: entity.photo_url,
        }
    }

    /// Converts the doctor domain model to a DTO for API responses.
    pub fn into_dto(self) -> DoctorDto {
        DoctorDto {
            id: self.id,
            name: self.name,
            specialization: self.specialization,
            department: self.department,
            photo_url: self.photo_url,
        }
    }
}

/// Parameters for adding a doctor to the roster.
#[derive(Debug, Clone)]
pub struct CreateDoctorParams {
    pub name: String,
    pub specialization: String,
    pub department: String,
    pub photo_url: Option<String>,
}
