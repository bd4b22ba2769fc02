use super::*;

/// Tests inserting the initial record for a blood type.
///
/// Expected: Ok with 0 / 0 / 20 / 0 and no backup
#[tokio::test]
async fn inserts_initial_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodTypeStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BloodTypeStatRepository::new(db);
    let row = repo.insert_default(BloodType::AbPositive).await?;

    assert_eq!(row.blood_type, "AB+");
    assert_eq!(row.received, 0);
    assert_eq!(row.sent, 0.0);
    assert_eq!(row.short_time, 20.0);
    assert_eq!(row.long_time, 0.0);
    assert!(row.backup_received.is_none());

    Ok(())
}

/// Tests that a blood type can only be seeded once.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_second_insert_for_same_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodTypeStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blood_type_stat::create_stat(db, "O-", 3, 2.0, 1.0, 4.0).await?;

    let repo = BloodTypeStatRepository::new(db);

    assert!(repo.insert_default(BloodType::ONegative).await.is_err());
    assert_eq!(repo.find(BloodType::ONegative).await?.map(|r| r.received), Some(3));

    Ok(())
}
