use super::*;

/// Tests listing batches without a filter.
///
/// Expected: Ok with every batch
#[tokio::test]
async fn lists_all_batches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::stock_batch::create_stock_batch(db).await?;
    factory::stock_batch::create_stock_batch(db).await?;

    let repo = StockBatchRepository::new(db);

    assert_eq!(repo.get_all(None).await?.len(), 2);
    assert_eq!(repo.get_all(Some("   ")).await?.len(), 2);

    Ok(())
}

/// Tests the case-insensitive lot substring filter.
///
/// Expected: Ok with the two lots containing "abc"
#[tokio::test]
async fn filters_by_lot_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::stock_batch::StockBatchFactory::new(db)
        .lot("ABC-100")
        .build()
        .await?;
    factory::stock_batch::StockBatchFactory::new(db)
        .lot("x-abc-200")
        .build()
        .await?;
    factory::stock_batch::StockBatchFactory::new(db)
        .lot("XYZ-300")
        .build()
        .await?;

    let repo = StockBatchRepository::new(db);
    let lots: Vec<String> = repo
        .get_all(Some("aBc"))
        .await?
        .into_iter()
        .map(|b| b.lot)
        .collect();

    assert_eq!(lots, vec!["ABC-100".to_string(), "x-abc-200".to_string()]);

    Ok(())
}

/// Tests that `%`, `_` and `\` in the filter match only themselves.
///
/// Expected: Ok with no rows for wildcard-only filters, and the one lot that literally
/// contains `_`
#[tokio::test]
async fn lot_filter_treats_like_metacharacters_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StockBatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::stock_batch::StockBatchFactory::new(db)
        .lot("ABC-100")
        .build()
        .await?;
    factory::stock_batch::StockBatchFactory::new(db)
        .lot("XYZ-300")
        .build()
        .await?;
    factory::stock_batch::StockBatchFactory::new(db)
        .lot("LOT_7")
        .build()
        .await?;

    let repo = StockBatchRepository::new(db);

    assert!(repo.get_all(Some("%")).await?.is_empty());
    assert!(repo.get_all(Some("___-_00")).await?.is_empty());
    assert!(repo.get_all(Some("\\")).await?.is_empty());

    let lots: Vec<String> = repo
        .get_all(Some("t_"))
        .await?
        .into_iter()
        .map(|b| b.lot)
        .collect();

    assert_eq!(lots, vec!["LOT_7".to_string()]);

    Ok(())
}
