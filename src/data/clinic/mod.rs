//! Clinic resource-booking repositories for database operations.
//!
//! This module provides repositories for the flat clinic booking records: lab
//! tests, health checkup packages, and surgery requests. These records have no
//! relations or lifecycle, so each repository only needs an insert.

pub mod checkup;
pub mod lab;
pub mod surgery;

pub use checkup::CheckupRepository;
pub use lab::LabRepository;
pub use surgery::SurgeryRepository;
