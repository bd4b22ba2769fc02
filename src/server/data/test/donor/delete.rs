use super::*;

/// Tests deleting a donor.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let donor = factory::donor::create_donor(db).await?;

    let repo = DonorRepository::new(db);
    assert!(repo.delete(&donor.id).await?);
    assert!(repo.find_by_id(&donor.id).await?.is_none());

    Ok(())
}

/// Tests deleting a donor that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    assert!(!repo.delete("6f1c2d3e-0000-4000-8000-000000000000").await?);

    Ok(())
}
