use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DoctorDto {
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub department: String,
    pub photo_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateDoctorDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub department: String,
    pub photo_url: Option<String>,
}
