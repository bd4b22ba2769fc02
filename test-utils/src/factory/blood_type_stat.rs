//! Blood-type statistic factory.
//!
//! Rows are keyed by blood-type label, so there is no builder with generated ids here;
//! callers pick the label and the starting aggregate.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Labels of the eight tracked blood types.
pub const BLOOD_TYPE_LABELS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Inserts a statistic row for `blood_type` with the given aggregate and no backup.
///
/// # Arguments
/// - `db` - Database connection
/// - `blood_type` - Blood-type label used as primary key
/// - `received` / `sent` / `short_time` / `long_time` - Starting aggregate
///
/// # Returns
/// - `Ok(entity::blood_type_stat::Model)` - Inserted row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate label)
pub async fn create_stat(
    db: &DatabaseConnection,
    blood_type: &str,
    received: i32,
    sent: f64,
    short_time: f64,
    long_time: f64,
) -> Result<entity::blood_type_stat::Model, DbErr> {
    entity::blood_type_stat::ActiveModel {
        blood_type: ActiveValue::Set(blood_type.to_string()),
        received: ActiveValue::Set(received),
        sent: ActiveValue::Set(sent),
        short_time: ActiveValue::Set(short_time),
        long_time: ActiveValue::Set(long_time),
        backup_received: ActiveValue::Set(None),
        backup_sent: ActiveValue::Set(None),
        backup_short_time: ActiveValue::Set(None),
        backup_long_time: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Inserts default rows (`0 / 0 / 20 / 0`) for all eight blood types.
pub async fn seed_all_stats(
    db: &DatabaseConnection,
) -> Result<Vec<entity::blood_type_stat::Model>, DbErr> {
    let mut rows = Vec::with_capacity(BLOOD_TYPE_LABELS.len());
    for label in BLOOD_TYPE_LABELS {
        rows.push(create_stat(db, label, 0, 0.0, 20.0, 0.0).await?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn seeds_eight_rows() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(BloodTypeStat)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        seed_all_stats(db).await?;

        assert_eq!(BloodTypeStat::find().count(db).await?, 8);

        Ok(())
    }
}
