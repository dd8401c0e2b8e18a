use super::*;

/// Tests creating a doctor record.
///
/// Expected: Ok with doctor created
#[tokio::test]
async fn creates_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let doctor = repo
        .create(CreateDoctorParams {
            name: "Dr. Amina Hassan".to_string(),
            specialization: "Cardiology".to_string(),
            department: "Cardiology".to_string(),
            photo_url: Some("https://example.com/amina.jpg".to_string()),
        })
        .await?;

    assert_eq!(doctor.name, "Dr. Amina Hassan");
    assert_eq!(doctor.specialization, "Cardiology");
    assert_eq!(doctor.department, "Cardiology");
    assert_eq!(doctor.photo_url, Some("https://example.com/amina.jpg".to_string()));

    Ok(())
}

/// Tests creating a doctor without a photo.
///
/// Expected: Ok with doctor created and no photo url
#[tokio::test]
async fn creates_doctor_without_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let doctor = repo
        .create(CreateDoctorParams {
            name: "Dr. Tomas Novak".to_string(),
            specialization: "Orthopedics".to_string(),
            department: "Surgery".to_string(),
            photo_url: None,
        })
        .await?;

    assert!(doctor.photo_url.is_none());

    Ok(())
}
