use super::*;

/// Tests adding a doctor to the roster.
///
/// Verifies that submitted fields are trimmed before storage.
///
/// Expected: Ok with the trimmed doctor record
#[tokio::test]
async fn creates_doctor_with_trimmed_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DoctorService::new(db);
    let doctor = service
        .create(CreateDoctorDto {
            name: "  Dr. Adaeze Okafor  ".to_string(),
            specialization: " Cardiothoracic Surgery ".to_string(),
            department: " Cardiology ".to_string(),
            photo_url: Some("https://example.com/okafor.jpg".to_string()),
        })
        .await?;

    assert_eq!(doctor.name, "Dr. Adaeze Okafor");
    assert_eq!(doctor.specialization, "Cardiothoracic Surgery");
    assert_eq!(doctor.department, "Cardiology");
    assert_eq!(
        doctor.photo_url,
        Some("https://example.com/okafor.jpg".to_string())
    );

    Ok(())
}

/// Tests the field-level validation of roster input.
///
/// Expected: Err with one entry per failed field
#[tokio::test]
async fn collects_field_errors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DoctorService::new(db);
    let result = service
        .create(CreateDoctorDto {
            name: "D".to_string(),
            specialization: "  ".to_string(),
            department: String::new(),
            photo_url: None,
        })
        .await;

    match result {
        Err(AppError::ValidationErr(err)) => {
            let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["name", "specialization", "department"]);
            assert_eq!(
                err.errors[0].message,
                "Doctor name is required and must be at least 2 characters"
            );
            assert_eq!(err.errors[1].message, "Specialization is required");
            assert_eq!(err.errors[2].message, "Department is required");
        }
        other => panic!("Expected validation error, got: {:?}", other),
    }

    Ok(())
}

/// Tests adding a doctor with a blank photo url.
///
/// Expected: Ok with no photo stored
#[tokio::test]
async fn treats_blank_photo_url_as_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DoctorService::new(db);
    let doctor = service
        .create(CreateDoctorDto {
            name: "Dr. Adaeze Okafor".to_string(),
            specialization: "Cardiothoracic Surgery".to_string(),
            department: "Cardiology".to_string(),
            photo_url: Some("   ".to_string()),
        })
        .await?;

    assert_eq!(doctor.photo_url, None);

    Ok(())
}
