use super::*;

/// Tests changing only the quantity of a batch.
///
/// Expected: Ok(Some) with the new quantity and the other fields untouched
#[tokio::test]
async fn changes_only_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let batch = factory::stock_batch::StockBatchFactory::new(db)
        .quantity(20)
        .build()
        .await?;

    let repo = StockBatchRepository::new(db);
    let updated = repo
        .update_quantity(batch.id, 5)
        .await?
        .expect("batch should exist");

    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.lot, batch.lot);
    assert_eq!(updated.status, batch.status);

    Ok(())
}

/// Tests changing the quantity of a batch that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StockBatchRepository::new(db);

    assert!(repo.update_quantity(77, 1).await?.is_none());

    Ok(())
}
