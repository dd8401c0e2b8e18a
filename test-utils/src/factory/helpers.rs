//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates the user and doctor rows a booking depends on.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize either.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, doctor))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::doctor::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let doctor = crate::factory::doctor::create_doctor(db).await?;

    Ok((user, doctor))
}

/// Creates a booking together with its user and doctor dependencies.
///
/// This is a convenience method that creates:
/// 1. User (the booking owner)
/// 2. Doctor
/// 3. Booking (pending, one week out)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, doctor, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::doctor::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (user, doctor) = create_booking_dependencies(db).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, doctor.id).await?;

    Ok((user, doctor, booking))
}
