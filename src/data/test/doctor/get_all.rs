use super::*;

/// Tests listing all doctors.
///
/// Verifies that doctors are returned in ascending name order regardless of
/// insertion order.
///
/// Expected: Ok with doctors sorted by name
#[tokio::test]
async fn returns_doctors_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::doctor::DoctorFactory::new(db)
        .name("Dr. Sarah Mensah")
        .build()
        .await?;
    factory::doctor::DoctorFactory::new(db)
        .name("Dr. Adam Okonkwo")
        .build()
        .await?;

    let repo = DoctorRepository::new(db);
    let doctors = repo.get_all(None).await?;

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].name, "Dr. Adam Okonkwo");
    assert_eq!(doctors[1].name, "Dr. Sarah Mensah");

    Ok(())
}

/// Tests restricting the listing to one department.
///
/// Expected: Ok with only matching doctors
#[tokio::test]
async fn filters_by_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cardiologist = factory::doctor::DoctorFactory::new(db)
        .department("Cardiology")
        .build()
        .await?;
    factory::doctor::DoctorFactory::new(db)
        .department("Neurology")
        .build()
        .await?;

    let repo = DoctorRepository::new(db);
    let doctors = repo.get_all(Some("Cardiology")).await?;

    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, cardiologist.id);

    Ok(())
}

/// Tests listing with no doctors in the directory.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_no_doctors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let doctors = repo.get_all(None).await?;

    assert!(doctors.is_empty());

    Ok(())
}
