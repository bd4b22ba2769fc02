use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::stock::StockBatchRepository,
    error::AppError,
    model::stock::{StockBatch, StockBatchParams, UpdateQuantityParams},
};

pub struct StockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StockService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a batch
    ///
    /// # Returns
    /// - `Ok(StockBatch)` - The stored batch
    /// - `Err(AppError::BadRequest)` - A batch with the same lot already exists
    pub async fn add(&self, params: StockBatchParams) -> Result<StockBatch, AppError> {
        let repo = StockBatchRepository::new(self.db);

        if repo.find_by_lot(&params.lot).await?.is_some() {
            return Err(lot_taken(&params.lot));
        }

        let lot = params.lot.clone();
        let batch = repo
            .create(params)
            .await
            .map_err(|err| lot_conflict(err, &lot))?;

        tracing::info!("Added stock lot {} ({} units)", batch.lot, batch.quantity);

        StockBatch::from_entity(batch)
    }

    pub async fn get_all(&self, lot: Option<&str>) -> Result<Vec<StockBatch>, AppError> {
        let repo = StockBatchRepository::new(self.db);

        repo.get_all(lot)
            .await?
            .into_iter()
            .map(StockBatch::from_entity)
            .collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<StockBatch, AppError> {
        let repo = StockBatchRepository::new(self.db);

        let batch = repo.find_by_id(id).await?.ok_or_else(lot_not_found)?;

        StockBatch::from_entity(batch)
    }

    /// Replaces a batch. Renaming onto a lot held by another batch is rejected.
    pub async fn update(&self, id: i32, params: StockBatchParams) -> Result<StockBatch, AppError> {
        let repo = StockBatchRepository::new(self.db);

        if let Some(existing) = repo.find_by_lot(&params.lot).await? {
            if existing.id != id {
                return Err(lot_taken(&params.lot));
            }
        }

        let lot = params.lot.clone();
        let batch = repo
            .update(id, params)
            .await
            .map_err(|err| lot_conflict(err, &lot))?
            .ok_or_else(lot_not_found)?;

        StockBatch::from_entity(batch)
    }

    pub async fn update_quantity(&self, params: UpdateQuantityParams) -> Result<StockBatch, AppError> {
        let repo = StockBatchRepository::new(self.db);

        let batch = repo
            .update_quantity(params.id, params.quantity)
            .await?
            .ok_or_else(lot_not_found)?;

        StockBatch::from_entity(batch)
    }

    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let repo = StockBatchRepository::new(self.db);

        if !repo.delete(id).await? {
            tracing::warn!("Delete requested for unknown stock batch {}", id);
            return Err(lot_not_found());
        }

        Ok(())
    }
}

fn lot_not_found() -> AppError {
    AppError::NotFound("Lot not found".to_string())
}

fn lot_taken(lot: &str) -> AppError {
    AppError::BadRequest(format!("Lot '{}' already exists", lot))
}

/// A concurrent insert can still win the lot between the lookup and the write; the
/// unique index then reports it.
fn lot_conflict(err: DbErr, lot: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => lot_taken(lot),
        _ => err.into(),
    }
}
