use super::*;

/// Tests removing a batch.
///
/// Expected: Ok(true) on the first call and Ok(false) on the second
#[tokio::test]
async fn deletes_batch_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let batch = factory::stock_batch::create_stock_batch(db).await?;

    let repo = StockBatchRepository::new(db);

    assert!(repo.delete(batch.id).await?);
    assert!(!repo.delete(batch.id).await?);
    assert!(repo.find_by_id(batch.id).await?.is_none());

    Ok(())
}
