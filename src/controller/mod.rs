pub mod auth;
pub mod booking;
pub mod clinic;
pub mod doctor;
pub mod health;
