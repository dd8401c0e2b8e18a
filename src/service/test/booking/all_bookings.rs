use super::*;

/// Tests the admin listing without filters.
///
/// Verifies that bookings from every user are returned with both the doctor
/// and owning user summaries loaded.
///
/// Expected: Ok with every booking and its summaries
#[tokio::test]
async fn returns_all_bookings_with_summaries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, first_user.id, doctor.id)
        .time_slot("09:00")
        .build()
        .await?;

    let second_user = factory::create_user(db).await?;
    factory::booking::BookingFactory::new(db, second_user.id, doctor.id)
        .time_slot("10:00")
        .build()
        .await?;

    let service = BookingService::new(db);
    let bookings = service.all_bookings(None, None, None).await?;

    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|booking| booking.doctor.is_some()));
    assert!(bookings.iter().all(|booking| booking.user.is_some()));

    Ok(())
}

/// Tests the status filter on the admin listing.
///
/// Expected: Ok with only bookings in the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .time_slot("09:00")
        .status("pending")
        .build()
        .await?;
    let confirmed = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .time_slot("10:00")
        .status("confirmed")
        .build()
        .await?;

    let service = BookingService::new(db);
    let bookings = service
        .all_bookings(Some("confirmed".to_string()), None, None)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, confirmed.id);

    Ok(())
}

/// Tests the doctor filter on the admin listing.
///
/// Expected: Ok with only bookings for the requested doctor
#[tokio::test]
async fn filters_by_doctor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first_doctor) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, user.id, first_doctor.id)
        .build()
        .await?;

    let second_doctor = factory::create_doctor(db).await?;
    let target = factory::booking::BookingFactory::new(db, user.id, second_doctor.id)
        .build()
        .await?;

    let service = BookingService::new(db);
    let bookings = service
        .all_bookings(None, Some(second_doctor.id), None)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, target.id);

    Ok(())
}

/// Tests the listing with an unrecognized status filter.
///
/// Verifies that a status outside the lifecycle set is rejected rather than
/// silently matching nothing.
///
/// Expected: Err with bad request
#[tokio::test]
async fn rejects_invalid_status_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BookingService::new(db);
    let result = service
        .all_bookings(Some("archived".to_string()), None, None)
        .await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Invalid booking status");
        }
        other => panic!("Expected bad request error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the listing with an empty status parameter.
///
/// Verifies that `?status=` with no value behaves like an absent filter.
///
/// Expected: Ok with every booking
#[tokio::test]
async fn treats_empty_status_as_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .build()
        .await?;

    let service = BookingService::new(db);
    let bookings = service.all_bookings(Some(String::new()), None, None).await?;

    assert_eq!(bookings.len(), 1);

    Ok(())
}

/// Tests the newest-first sort order.
///
/// Expected: Ok with the most recently created booking first
#[tokio::test]
async fn sorts_newest_created_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    let older = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .time_slot("09:00")
        .build()
        .await?;
    let newer = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .time_slot("10:00")
        .build()
        .await?;

    // Push the first booking's creation time into the past so the order is
    // unambiguous regardless of insert timing.
    let older_id = older.id;
    let mut older_model: entity::booking::ActiveModel = older.into();
    older_model.created_at = ActiveValue::Set(Utc::now() - Duration::hours(1));
    older_model.update(db).await?;

    let service = BookingService::new(db);
    let bookings = service
        .all_bookings(None, None, Some("newest".to_string()))
        .await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, newer.id);
    assert_eq!(bookings[1].id, older_id);

    Ok(())
}
