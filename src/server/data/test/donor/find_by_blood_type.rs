use super::*;

/// Tests filtering donors by blood type.
///
/// Verifies that only donors whose stored label matches the requested type are
/// returned.
///
/// Expected: Ok with the two O- donors
#[tokio::test]
async fn returns_only_matching_donors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::donor::DonorFactory::new(db).blood_type("O-").build().await?;
    factory::donor::DonorFactory::new(db).blood_type("O-").build().await?;
    factory::donor::DonorFactory::new(db).blood_type("B+").build().await?;

    let repo = DonorRepository::new(db);
    let donors = repo.find_by_blood_type(BloodType::ONegative).await?;

    assert_eq!(donors.len(), 2);
    assert!(donors.iter().all(|d| d.blood_type == "O-"));

    Ok(())
}

/// Tests filtering when no donor has the requested type.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_no_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::donor::create_donor(db).await?;

    let repo = DonorRepository::new(db);
    let donors = repo.find_by_blood_type(BloodType::AbPositive).await?;

    assert!(donors.is_empty());

    Ok(())
}
