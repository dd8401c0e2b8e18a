use super::*;

/// Builds the status payload for the admin endpoint.
fn status_dto(status: &str) -> UpdateBookingStatusDto {
    UpdateBookingStatusDto {
        status: status.to_string(),
    }
}

/// Tests confirming a pending booking.
///
/// Expected: Ok with the booking moved to confirmed
#[tokio::test]
async fn confirms_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let updated = service.set_status(booking.id, status_dto("confirmed")).await?;

    assert_eq!(updated.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests completing a confirmed booking.
///
/// Expected: Ok with the booking moved to completed
#[tokio::test]
async fn completes_confirmed_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .status("confirmed")
        .build()
        .await?;

    let service = BookingService::new(db);
    let updated = service.set_status(booking.id, status_dto("completed")).await?;

    assert_eq!(updated.status, BookingStatus::Completed);

    Ok(())
}

/// Tests completing a pending booking directly.
///
/// Verifies the lifecycle shortcut that skips confirmation.
///
/// Expected: Ok with the booking moved to completed
#[tokio::test]
async fn completes_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let updated = service.set_status(booking.id, status_dto("completed")).await?;

    assert_eq!(updated.status, BookingStatus::Completed);

    Ok(())
}

/// Tests a status value outside the lifecycle set.
///
/// Expected: Err with bad request
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let result = service.set_status(booking.id, status_dto("approved")).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Invalid booking status");
        }
        other => panic!("Expected bad request error, got: {:?}", other),
    }

    Ok(())
}

/// Tests targeting cancelled through the status endpoint.
///
/// Verifies that cancellation stays on its own endpoint.
///
/// Expected: Err with bad request
#[tokio::test]
async fn rejects_cancel_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let result = service.set_status(booking.id, status_dto("cancelled")).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Use the cancel endpoint to cancel bookings");
        }
        other => panic!("Expected bad request error, got: {:?}", other),
    }

    Ok(())
}

/// Tests transitioning a cancelled booking.
///
/// Verifies that cancelled is terminal for the admin endpoint as well.
///
/// Expected: Err with bad request naming both statuses
#[tokio::test]
async fn rejects_transition_from_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .status("cancelled")
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service.set_status(booking.id, status_dto("confirmed")).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(
                message,
                "Cannot change booking status from cancelled to confirmed"
            );
        }
        other => panic!("Expected bad request error, got: {:?}", other),
    }

    Ok(())
}

/// Tests moving a completed booking backwards.
///
/// Expected: Err with bad request naming both statuses
#[tokio::test]
async fn rejects_backward_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .status("completed")
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service.set_status(booking.id, status_dto("confirmed")).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(
                message,
                "Cannot change booking status from completed to confirmed"
            );
        }
        other => panic!("Expected bad request error, got: {:?}", other),
    }

    Ok(())
}

/// Tests re-submitting the pending status.
///
/// Expected: Err with bad request
#[tokio::test]
async fn rejects_pending_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let result = service.set_status(booking.id, status_dto("pending")).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(
                message,
                "Cannot change booking status from pending to pending"
            );
        }
        other => panic!("Expected bad request error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the status endpoint with a booking id that does not exist.
///
/// Expected: Err with not found
#[tokio::test]
async fn rejects_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BookingService::new(db);
    let result = service.set_status(9999, status_dto("confirmed")).await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "Booking not found");
        }
        other => panic!("Expected not found error, got: {:?}", other),
    }

    Ok(())
}
