use super::*;

/// Tests the unfiltered admin listing.
///
/// Verifies that bookings from all users are returned with both the doctor
/// and the owning user loaded.
///
/// Expected: Ok with all bookings and their relations
#[tokio::test]
async fn returns_all_bookings_with_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user_a, doctor_a, booking_a) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let (user_b, doctor_b, booking_b) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_all_filtered(AllBookingsFilter::default()).await?;

    assert_eq!(bookings.len(), 2);

    let found_a = bookings.iter().find(|b| b.id == booking_a.id).unwrap();
    assert_eq!(found_a.doctor.as_ref().map(|d| d.id), Some(doctor_a.id));
    assert_eq!(found_a.user.as_ref().map(|u| u.id), Some(user_a.id));
    assert_eq!(found_a.user.as_ref().map(|u| u.email.clone()), Some(user_a.email));

    let found_b = bookings.iter().find(|b| b.id == booking_b.id).unwrap();
    assert_eq!(found_b.doctor.as_ref().map(|d| d.id), Some(doctor_b.id));
    assert_eq!(found_b.user.as_ref().map(|u| u.id), Some(user_b.id));

    Ok(())
}

/// Tests filtering the admin listing by status.
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
        .build()
        .await?;
    let confirmed = factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .time_slot("10:00")
        .status("confirmed")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_all_filtered(AllBookingsFilter {
            status: Some(BookingStatus::Confirmed),
            ..Default::default()
        })
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, confirmed.id);

    Ok(())
}

/// Tests filtering the admin listing by doctor.
///
/// Expected: Ok with only the requested doctor's bookings
#[tokio::test]
async fn filters_by_doctor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user_a, doctor_a, booking_a) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_all_filtered(AllBookingsFilter {
            doctor_id: Some(doctor_a.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking_a.id);

    Ok(())
}

/// Tests the newest-first sort order.
///
/// Verifies that sorting by newest orders bookings by creation time
/// descending instead of by appointment date.
///
/// Expected: Ok with most recently created booking first
#[tokio::test]
async fn sorts_newest_created_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _doctor, older) = factory::helpers::create_booking_with_dependencies(db).await?;
    let (_user, _doctor, newer) = factory::helpers::create_booking_with_dependencies(db).await?;

    // Push the first booking's creation time into the past so the order
    // does not depend on sub-millisecond insert timing
    let older_id = older.id;
    let mut older_model: entity::booking::ActiveModel = older.into();
    older_model.created_at = ActiveValue::Set(Utc::now() - Duration::hours(1));
    older_model.update(db).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_all_filtered(AllBookingsFilter {
            sort: BookingSort::Newest,
            ..Default::default()
        })
        .await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, newer.id);
    assert_eq!(bookings[1].id, older_id);

    Ok(())
}
