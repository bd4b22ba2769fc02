use super::*;

/// Tests creating localities and listing them in insertion order.
///
/// Expected: Ok with both localities listed
#[tokio::test]
async fn creates_and_lists_localities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Locality)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocalityRepository::new(db);
    let first = repo.create(locality_params("São Paulo")).await?;
    let second = repo.create(locality_params("Campinas")).await?;

    let all = repo.get_all().await?;

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].city, second.city);

    Ok(())
}
