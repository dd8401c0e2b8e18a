use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LabBookingDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub test_type: String,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CheckupBookingDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub package: String,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SurgeryBookingDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub doctor: String,
    #[serde(default)]
    pub surgery_type: String,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: String,
    /// File name of an already uploaded prescription, if any.
    pub prescription_file_name: Option<String>,
}
