use super::*;

/// Tests creating a health checkup appointment.
///
/// Expected: Ok with appointment created
#[tokio::test]
async fn creates_checkup_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Duration::days(5);
    let repo = CheckupRepository::new(db);
    let appointment = repo
        .create(CreateCheckupAppointmentParams {
            name: "Tomas Novak".to_string(),
            email: "tomas.novak@example.com".to_string(),
            phone: "0787654321".to_string(),
            package: "Executive package".to_string(),
            date,
        })
        .await?;

    assert_eq!(appointment.name, "Tomas Novak");
    assert_eq!(appointment.package, "Executive package");
    assert_eq!(appointment.date, date);

    Ok(())
}
