//! Request guards and session wrappers applied inside controllers.

pub mod auth;
pub mod session;
