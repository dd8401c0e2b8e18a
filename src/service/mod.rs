//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Field-level checks on incoming payloads, reported as 400 envelopes
//! - **Business Logic**: Booking lifecycle, ownership checks, and duplicate detection
//! - **Orchestration**: Coordinating repository calls and assembling response DTOs

pub mod admin;
pub mod auth;
pub mod booking;
pub mod clinic;
pub mod doctor;
pub mod validation;

#[cfg(test)]
mod test;
