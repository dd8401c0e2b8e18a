//! Request and response DTOs for the HTTP API.
//!
//! Everything the API accepts or returns lives here. Response DTOs are wrapped
//! in the envelope types from [`api`]; request DTOs deliberately use lenient
//! `serde` defaults so that missing fields reach the validators and come back
//! as field-level errors instead of deserialization rejections.

pub mod api;
pub mod auth;
pub mod booking;
pub mod clinic;
pub mod doctor;
