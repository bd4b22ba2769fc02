use super::*;

/// Tests replacing a locality's address.
///
/// Expected: Ok(Some) with the new city
#[tokio::test]
async fn replaces_address_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Locality)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let locality = factory::locality::create_locality(db).await?;

    let repo = LocalityRepository::new(db);
    let updated = repo
        .update(locality.id, locality_params("Santos"))
        .await?
        .expect("locality should exist");

    assert_eq!(updated.id, locality.id);
    assert_eq!(updated.city, "Santos");
    assert_eq!(updated.street, "Rua Augusta, 1500");

    Ok(())
}

/// Tests replacing and deleting a locality that doesn't exist.
///
/// Expected: Ok(None) from update and Ok(false) from delete
#[tokio::test]
async fn missing_locality_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Locality)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocalityRepository::new(db);

    assert!(repo.update(9, locality_params("Santos")).await?.is_none());
    assert!(!repo.delete(9).await?);

    Ok(())
}
