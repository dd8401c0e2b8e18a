use super::*;

/// Tests writing a new booking status.
///
/// Verifies that the repository persists the status it is handed and returns
/// the booking with its doctor loaded. Lifecycle rules live in the service
/// layer, so the repository accepts any status value.
///
/// Expected: Ok with status written
#[tokio::test]
async fn writes_new_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _doctor, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let updated = repo.set_status(booking.id, BookingStatus::Confirmed).await?;

    assert_eq!(updated.id, booking.id);
    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert!(updated.doctor.is_some());

    // The new status is visible on a fresh read
    let reread = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(reread.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests cancelling a booking frees its slot for the duplicate pre-check.
///
/// Expected: Ok with no duplicate reported after cancellation
#[tokio::test]
async fn cancelled_status_releases_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    repo.set_status(booking.id, BookingStatus::Cancelled).await?;

    let duplicate = repo
        .find_active_duplicate(
            doctor.id,
            user.id,
            booking.appointment_date,
            TimeSlot::parse(&booking.time_slot).unwrap(),
        )
        .await?;

    assert!(duplicate.is_none());

    Ok(())
}
