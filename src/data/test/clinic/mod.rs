use crate::{
    data::clinic::{CheckupRepository, LabRepository, SurgeryRepository},
    model::clinic::{CreateCheckupAppointmentParams, CreateLabAppointmentParams, CreateSurgeryParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod checkup;
mod lab;
