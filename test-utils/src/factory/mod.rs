//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let doctor = factory::doctor::create_doctor(&db).await?;
//!
//!     // Create a booking with both dependencies in one call
//!     let (user, doctor, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("pat@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let booking = factory::booking::BookingFactory::new(&db, user.id, doctor.id)
//!     .time_slot("14:00")
//!     .status("confirmed")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user accounts
//! - `doctor` - Create doctor roster entries
//! - `booking` - Create appointment bookings
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod doctor;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use doctor::create_doctor;
pub use user::{create_admin, create_user};
