use super::*;

/// Tests listing a user's bookings.
///
/// Verifies that only bookings owned by the given user are returned, soonest
/// appointment first, each with its related doctor loaded.
///
/// Expected: Ok with the user's bookings in date order
#[tokio::test]
async fn returns_only_own_bookings_in_date_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    let today = Utc::now().date_naive();

    let later = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .appointment_date(today + Duration::days(14))
        .time_slot("10:00")
        .build()
        .await?;
    let sooner = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .appointment_date(today + Duration::days(7))
        .time_slot("14:00")
        .build()
        .await?;

    // Booking owned by somebody else must not appear
    factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_user(user.id).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, sooner.id);
    assert_eq!(bookings[1].id, later.id);
    assert!(bookings.iter().all(|b| b.user_id == user.id));
    assert!(bookings.iter().all(|b| b.doctor.is_some()));

    Ok(())
}

/// Tests ordering of same-day bookings.
///
/// Verifies that bookings on the same date are ordered by time slot rather
/// than insertion order.
///
/// Expected: Ok with earliest slot first
#[tokio::test]
async fn orders_same_day_bookings_by_time_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;
    let date = Utc::now().date_naive() + Duration::days(7);

    let afternoon = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .appointment_date(date)
        .time_slot("14:00")
        .build()
        .await?;
    let morning = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .appointment_date(date)
        .time_slot("09:00")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_user(user.id).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, morning.id);
    assert_eq!(bookings[1].id, afternoon.id);

    Ok(())
}

/// Tests listing bookings for a user that has none.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_user(user.id).await?;

    assert!(bookings.is_empty());

    Ok(())
}
