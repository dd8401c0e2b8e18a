use super::*;

/// Tests the department filter with surrounding whitespace.
///
/// Verifies that the filter value is trimmed before it reaches the query.
///
/// Expected: Ok with only doctors from the requested department
#[tokio::test]
async fn filters_by_trimmed_department() -> Result<(), AppError> {
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

    let service = DoctorService::new(db);
    let doctors = service.list(Some(" Cardiology ".to_string())).await?;

    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, cardiologist.id);

    Ok(())
}

/// Tests the listing with a blank department parameter.
///
/// Verifies that `?department=` with no value behaves like an absent filter.
///
/// Expected: Ok with the full roster
#[tokio::test]
async fn treats_blank_filter_as_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Doctor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_doctor(db).await?;
    factory::create_doctor(db).await?;

    let service = DoctorService::new(db);
    let doctors = service.list(Some("   ".to_string())).await?;

    assert_eq!(doctors.len(), 2);

    Ok(())
}
