use super::*;

/// Tests writing a recorded observation together with its backup.
///
/// Verifies that the backup columns are written and read back into the same snapshot.
///
/// Expected: Ok with the stored record equal to the in-memory one
#[tokio::test]
async fn persists_current_values_and_backup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodTypeStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blood_type_stat::seed_all_stats(db).await?;

    let repo = BloodTypeStatRepository::new(db);
    let mut stat = BloodTypeStat::new(BloodType::BPositive);
    stat.record(6.0);
    stat.record(2.0);

    repo.upsert(&stat).await?;

    let row = repo.find(BloodType::BPositive).await?.expect("row should exist");
    let stored = BloodTypeStat::from_entity(row).unwrap();

    assert_eq!(stored, stat);
    assert_eq!(stored.backup.map(|b| b.received), Some(1));

    Ok(())
}

/// Tests that clearing the backup in memory clears the stored columns.
///
/// Expected: Ok with all backup columns null after a revert is written
#[tokio::test]
async fn clears_backup_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodTypeStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BloodTypeStatRepository::new(db);
    let mut stat = BloodTypeStat::new(BloodType::ANegative);
    stat.record(9.0);
    repo.upsert(&stat).await?;

    stat.revert_last();
    repo.upsert(&stat).await?;

    let row = repo.find(BloodType::ANegative).await?.expect("row should exist");

    assert_eq!(row.received, 0);
    assert!(row.backup_received.is_none());
    assert!(row.backup_sent.is_none());
    assert!(row.backup_short_time.is_none());
    assert!(row.backup_long_time.is_none());

    Ok(())
}

/// Tests that upserting a type without a row creates it.
///
/// Expected: Ok with exactly one row for the type
#[tokio::test]
async fn creates_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodTypeStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BloodTypeStatRepository::new(db);
    repo.upsert(&BloodTypeStat::new(BloodType::OPositive)).await?;

    let rows = repo.get_all().await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].short_time, 20.0);

    Ok(())
}
