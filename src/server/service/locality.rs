use sea_orm::DatabaseConnection;

use crate::server::{
    data::locality::LocalityRepository,
    error::AppError,
    model::locality::{Locality, LocalityParams},
};

pub struct LocalityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocalityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: LocalityParams) -> Result<Locality, AppError> {
        let repo = LocalityRepository::new(self.db);

        Ok(Locality::from_entity(repo.create(params).await?))
    }

    pub async fn get_all(&self) -> Result<Vec<Locality>, AppError> {
        let repo = LocalityRepository::new(self.db);

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .map(Locality::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Locality, AppError> {
        let repo = LocalityRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .map(Locality::from_entity)
            .ok_or_else(locality_not_found)
    }

    pub async fn update(&self, id: i32, params: LocalityParams) -> Result<Locality, AppError> {
        let repo = LocalityRepository::new(self.db);

        repo.update(id, params)
            .await?
            .map(Locality::from_entity)
            .ok_or_else(locality_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = LocalityRepository::new(self.db);

        if !repo.delete(id).await? {
            tracing::warn!("Delete requested for unknown locality {}", id);
            return Err(locality_not_found());
        }

        Ok(())
    }
}

fn locality_not_found() -> AppError {
    AppError::NotFound("Locality not found".to_string())
}
