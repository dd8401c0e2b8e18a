use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored booking row holds a time slot outside the fixed slot list.
    ///
    /// Time slots are validated before insert, so an unknown value in the
    /// database points at a write path that bypassed validation. Results in
    /// a 500 Internal Server Error with a generic message returned to client.
    #[error("Stored time slot '{value}' is not a recognized slot")]
    InvalidTimeSlot {
        /// The stored string that failed to parse
        value: String,
    },

    /// A stored booking row holds a status outside the lifecycle set.
    ///
    /// Statuses are only written through the lifecycle endpoints, so an
    /// unknown value in the database points at a write path that bypassed
    /// them. Results in a 500 Internal Server Error with a generic message
    /// returned to client.
    #[error("Stored booking status '{value}' is not a recognized status")]
    InvalidStatus {
        /// The stored string that failed to parse
        value: String,
    },
}
