//! Administrative services for controlling admin access.
//!
//! This module provides the bootstrap flow for the first admin account: a
//! temporary verification code generated at startup that registration can
//! exchange for admin privileges.

pub mod code;
