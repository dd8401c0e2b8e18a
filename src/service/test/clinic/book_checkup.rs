use super::*;

/// Tests booking a health checkup package.
///
/// Expected: Ok with the stored booking
#[tokio::test]
async fn creates_checkup_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ClinicService::new(db);
    let appointment = service
        .book_checkup(CheckupBookingDto {
            name: "Jane Walker".to_string(),
            email: "jane.walker@example.com".to_string(),
            phone: "0712345678".to_string(),
            package: "Executive Screening".to_string(),
            date: "2026-09-15".to_string(),
        })
        .await?;

    assert_eq!(appointment.package, "Executive Screening");
    assert_eq!(
        appointment.date,
        NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()
    );

    Ok(())
}

/// Tests the presence validation of checkup booking input.
///
/// Expected: Err with one entry per missing field
#[tokio::test]
async fn collects_presence_errors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ClinicService::new(db);
    let result = service
        .book_checkup(CheckupBookingDto {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            package: "  ".to_string(),
            date: String::new(),
        })
        .await;

    match result {
        Err(AppError::ValidationErr(err)) => {
            let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["name", "email", "phone", "package", "date"]);
            assert_eq!(err.errors[3].message, "Package is required");
        }
        other => panic!("Expected validation error, got: {:?}", other),
    }

    Ok(())
}
