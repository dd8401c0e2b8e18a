//! Application state shared across all request handlers.
//!
//! `AppState` bundles the resources handlers pull in through Axum's state
//! extraction. It is built once at startup and cloned per request; both
//! fields are cheap to clone (the database connection is a pool handle, the
//! admin code service wraps an `Arc`).

use sea_orm::DatabaseConnection;

use crate::service::admin::code::AdminCodeService;

/// Shared resources handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection to the application database.
    pub db: DatabaseConnection,

    /// Holder for the one-time admin bootstrap code.
    ///
    /// Generated at startup when no admin account exists and consumed by the
    /// registration endpoint to grant the first admin flag.
    pub admin_code_service: AdminCodeService,
}

impl AppState {
    /// Builds the state from already-initialized dependencies.
    ///
    /// # Arguments
    /// - `db` - Pooled database connection
    /// - `admin_code_service` - Admin bootstrap code holder
    ///
    /// # Returns
    /// - `AppState` - State ready to hand to the router
    pub fn new(db: DatabaseConnection, admin_code_service: AdminCodeService) -> Self {
        Self {
            db,
            admin_code_service,
        }
    }
}
