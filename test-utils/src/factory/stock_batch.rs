//! Stock batch factory for creating test stock entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stock batches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let batch = StockBatchFactory::new(&db)
///     .lot("LOT-2024-001")
///     .quantity(12)
///     .build()
///     .await?;
/// ```
pub struct StockBatchFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::stock_batch::Model,
}

impl<'a> StockBatchFactory<'a> {
    /// Creates a new StockBatchFactory with default values.
    ///
    /// Defaults:
    /// - lot: `"LOT-{n}"`
    /// - blood_type: `"A+"`
    /// - quantity: 10
    /// - expiration_date: 30 days from today
    /// - status: `"available"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        let now = Utc::now();
        let entity = entity::stock_batch::Model {
            id: 0,
            lot: format!("LOT-{}", n),
            blood_type: "A+".to_string(),
            quantity: 10,
            expiration_date: (now + Duration::days(30)).date_naive(),
            status: "available".to_string(),
            created_at: now,
        };

        Self { db, entity }
    }

    /// Sets the lot code.
    pub fn lot(mut self, lot: impl Into<String>) -> Self {
        self.entity.lot = lot.into();
        self
    }

    /// Sets the blood type label.
    pub fn blood_type(mut self, blood_type: impl Into<String>) -> Self {
        self.entity.blood_type = blood_type.into();
        self
    }

    /// Sets the number of units in the batch.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.entity.quantity = quantity;
        self
    }

    /// Sets the status (`available`, `expired`, `problem`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Builds and inserts the stock batch into the database.
    pub async fn build(self) -> Result<entity::stock_batch::Model, DbErr> {
        let e = self.entity;
        entity::stock_batch::ActiveModel {
            id: ActiveValue::NotSet,
            lot: ActiveValue::Set(e.lot),
            blood_type: ActiveValue::Set(e.blood_type),
            quantity: ActiveValue::Set(e.quantity),
            expiration_date: ActiveValue::Set(e.expiration_date),
            status: ActiveValue::Set(e.status),
            created_at: ActiveValue::Set(e.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a stock batch with default values.
pub async fn create_stock_batch(
    db: &DatabaseConnection,
) -> Result<entity::stock_batch::Model, DbErr> {
    StockBatchFactory::new(db).build().await
}
