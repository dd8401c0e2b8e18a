use super::*;

/// Tests creating a lab test appointment.
///
/// Expected: Ok with appointment created
#[tokio::test]
async fn creates_lab_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Duration::days(3);
    let repo = LabRepository::new(db);
    let appointment = repo
        .create(CreateLabAppointmentParams {
            name: "Jane Walker".to_string(),
            email: "jane.walker@example.com".to_string(),
            phone: "0712345678".to_string(),
            test_type: "Full blood count".to_string(),
            date,
        })
        .await?;

    assert_eq!(appointment.name, "Jane Walker");
    assert_eq!(appointment.email, "jane.walker@example.com");
    assert_eq!(appointment.phone, "0712345678");
    assert_eq!(appointment.test_type, "Full blood count");
    assert_eq!(appointment.date, date);

    Ok(())
}
