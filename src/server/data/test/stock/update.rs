use super::*;

/// Tests a full batch replacement.
///
/// Expected: Ok(Some) with every field replaced
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let batch = factory::stock_batch::create_stock_batch(db).await?;

    let repo = StockBatchRepository::new(db);
    let updated = repo
        .update(
            batch.id,
            StockBatchParams {
                blood_type: BloodType::ANegative,
                quantity: 0,
                status: StockStatus::Problem,
                ..batch_params("HEMO-RENAMED")
            },
        )
        .await?
        .expect("batch should exist");

    assert_eq!(updated.id, batch.id);
    assert_eq!(updated.lot, "HEMO-RENAMED");
    assert_eq!(updated.blood_type, "A-");
    assert_eq!(updated.quantity, 0);
    assert_eq!(updated.status, "problem");
    assert_eq!(updated.created_at, batch.created_at);

    Ok(())
}

/// Tests replacing a batch that doesn't exist.
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

    assert!(repo.update(404, batch_params("HEMO-404")).await?.is_none());

    Ok(())
}
