use super::*;

/// Tests creating a new booking.
///
/// Verifies that the repository inserts the booking in pending status, stores
/// all patient and appointment fields, and returns it with the related doctor
/// already loaded for the response payload.
///
/// Expected: Ok with pending booking created
#[tokio::test]
async fn creates_pending_booking_with_doctor_loaded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;

    let appointment_date = Utc::now().date_naive() + Duration::days(10);
    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            patient_name: "Jane Walker".to_string(),
            patient_email: "jane.walker@example.com".to_string(),
            patient_phone: "0712345678".to_string(),
            doctor_id: doctor.id,
            user_id: user.id,
            appointment_date,
            time_slot: TimeSlot::Slot10,
            reason: "Persistent headaches".to_string(),
            notes: Some("Prefers morning appointments".to_string()),
        })
        .await?;

    assert_eq!(booking.patient_name, "Jane Walker");
    assert_eq!(booking.patient_email, "jane.walker@example.com");
    assert_eq!(booking.patient_phone, "0712345678");
    assert_eq!(booking.doctor_id, doctor.id);
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.appointment_date, appointment_date);
    assert_eq!(booking.time_slot, TimeSlot::Slot10);
    assert_eq!(booking.reason, "Persistent headaches");
    assert_eq!(booking.notes, Some("Prefers morning appointments".to_string()));
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.doctor.as_ref().map(|d| d.id), Some(doctor.id));
    assert!(booking.user.is_none());

    Ok(())
}

/// Tests the partial unique index over active bookings.
///
/// Verifies that inserting a second booking for the same doctor, user, date
/// and time slot while the first is still active fails with a unique
/// constraint violation from the database.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_second_active_booking_for_same_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(CreateBookingParams {
            patient_name: "Jane Walker".to_string(),
            patient_email: "jane.walker@example.com".to_string(),
            patient_phone: "0712345678".to_string(),
            doctor_id: doctor.id,
            user_id: user.id,
            appointment_date: booking.appointment_date,
            time_slot: TimeSlot::parse(&booking.time_slot).unwrap(),
            reason: "Follow-up".to_string(),
            notes: None,
        })
        .await;

    let Err(AppError::DbErr(db_err)) = result else {
        panic!("expected database error, got {:?}", result);
    };
    assert!(matches!(
        db_err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a cancelled booking releases its slot.
///
/// Verifies that the partial unique index ignores cancelled rows, so a user
/// can book the same doctor, date and time slot again after cancelling.
///
/// Expected: Ok with new booking created
#[tokio::test]
async fn cancelled_booking_does_not_block_rebooking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doctor) = factory::helpers::create_booking_dependencies(db).await?;

    let appointment_date = Utc::now().date_naive() + Duration::days(7);
    factory::booking::BookingFactory::new(db, user.id, doctor.id)
        .appointment_date(appointment_date)
        .time_slot("09:00")
        .status("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            patient_name: "Jane Walker".to_string(),
            patient_email: "jane.walker@example.com".to_string(),
            patient_phone: "0712345678".to_string(),
            doctor_id: doctor.id,
            user_id: user.id,
            appointment_date,
            time_slot: TimeSlot::Slot09,
            reason: "Rebooking after cancellation".to_string(),
            notes: None,
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);

    Ok(())
}
