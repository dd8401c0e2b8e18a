//! MidCity Test Utils
//!
//! Shared harness for the MidCity server's unit and integration tests.
//! Tests describe the tables they need through a small builder, get back a
//! context wrapping a fresh in-memory SQLite database, and populate it with
//! the factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Declares which tables and extra statements a test needs
//! - **TestContext**: Owns the per-test database connection and session
//! - **TestError**: Failures during test environment setup
//! - **factory**: Inserts users, doctors, and bookings with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory::create_user;
//!
//! #[tokio::test]
//! async fn test_user_lookup() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_booking_tables().build().await?;
//!     let db = test.database().await?;
//!
//!     let user = create_user(db).await?;
//!     // Exercise the code under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
