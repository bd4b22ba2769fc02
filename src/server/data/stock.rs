use chrono::Utc;
use migration::{Expr, Func};
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::stock::StockBatchParams;

pub struct StockBatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StockBatchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: StockBatchParams,
    ) -> Result<entity::stock_batch::Model, DbErr> {
        entity::stock_batch::ActiveModel {
            lot: ActiveValue::Set(params.lot),
            blood_type: ActiveValue::Set(params.blood_type.label().to_string()),
            quantity: ActiveValue::Set(params.quantity),
            expiration_date: ActiveValue::Set(params.expiration_date),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all batches, optionally keeping only lots containing `lot` (case-insensitive).
    ///
    /// `lot` is matched literally; `%` and `_` are not wildcards.
    pub async fn get_all(&self, lot: Option<&str>) -> Result<Vec<entity::stock_batch::Model>, DbErr> {
        let mut query = entity::prelude::StockBatch::find();

        if let Some(lot) = lot.map(str::trim).filter(|l| !l.is_empty()) {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::stock_batch::Column::Lot)))
                    .like(contains_pattern(&lot.to_lowercase())),
            );
        }

        query
            .order_by_asc(entity::stock_batch::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::stock_batch::Model>, DbErr> {
        entity::prelude::StockBatch::find_by_id(id).one(self.db).await
    }

    /// Finds the batch holding an exact lot code
    pub async fn find_by_lot(&self, lot: &str) -> Result<Option<entity::stock_batch::Model>, DbErr> {
        entity::prelude::StockBatch::find()
            .filter(entity::stock_batch::Column::Lot.eq(lot))
            .one(self.db)
            .await
    }

    /// Replaces every editable field of a batch.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated batch
    /// - `Ok(None)` - No batch with this id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: StockBatchParams,
    ) -> Result<Option<entity::stock_batch::Model>, DbErr> {
        let Some(batch) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::stock_batch::ActiveModel = batch.into();
        active_model.lot = ActiveValue::Set(params.lot);
        active_model.blood_type = ActiveValue::Set(params.blood_type.label().to_string());
        active_model.quantity = ActiveValue::Set(params.quantity);
        active_model.expiration_date = ActiveValue::Set(params.expiration_date);
        active_model.status = ActiveValue::Set(params.status.as_str().to_string());

        active_model.update(self.db).await.map(Some)
    }

    pub async fn update_quantity(
        &self,
        id: i32,
        quantity: i32,
    ) -> Result<Option<entity::stock_batch::Model>, DbErr> {
        let Some(batch) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::stock_batch::ActiveModel = batch.into();
        active_model.quantity = ActiveValue::Set(quantity);

        active_model.update(self.db).await.map(Some)
    }

    /// Deletes a batch, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StockBatch::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// LIKE pattern matching `needle` anywhere, with LIKE metacharacters escaped
fn contains_pattern(needle: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
