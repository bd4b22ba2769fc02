use super::*;

/// Tests adding a batch.
///
/// Expected: Ok with labels stored for blood type and status
#[tokio::test]
async fn creates_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StockBatchRepository::new(db);
    let batch = repo.create(batch_params("HEMO-001")).await?;

    assert_eq!(batch.lot, "HEMO-001");
    assert_eq!(batch.blood_type, "O+");
    assert_eq!(batch.status, "available");
    assert_eq!(repo.find_by_lot("HEMO-001").await?.map(|b| b.id), Some(batch.id));

    Ok(())
}

/// Tests that the lot column is unique.
///
/// Expected: Err on the second insert of the same lot
#[tokio::test]
async fn rejects_duplicate_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StockBatchRepository::new(db);
    repo.create(batch_params("HEMO-002")).await?;

    assert!(repo.create(batch_params("HEMO-002")).await.is_err());

    Ok(())
}
