use sea_orm::DatabaseConnection;

use crate::server::{
    data::scheduling::SchedulingRepository,
    error::AppError,
    model::scheduling::{CreateSchedulingParams, Scheduling, UpdateSchedulingParams},
};

pub struct SchedulingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchedulingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSchedulingParams) -> Result<Scheduling, AppError> {
        let repo = SchedulingRepository::new(self.db);

        let scheduling = repo.create(params).await?;

        Scheduling::from_entity(scheduling)
    }

    pub async fn get_all(&self) -> Result<Vec<Scheduling>, AppError> {
        let repo = SchedulingRepository::new(self.db);

        repo.get_all()
            .await?
            .into_iter()
            .map(Scheduling::from_entity)
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Scheduling, AppError> {
        let repo = SchedulingRepository::new(self.db);

        let scheduling = repo.find_by_id(id).await?.ok_or_else(scheduling_not_found)?;

        Scheduling::from_entity(scheduling)
    }

    pub async fn update(&self, params: UpdateSchedulingParams) -> Result<Scheduling, AppError> {
        let repo = SchedulingRepository::new(self.db);

        let scheduling = repo.update(params).await?.ok_or_else(scheduling_not_found)?;

        Scheduling::from_entity(scheduling)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = SchedulingRepository::new(self.db);

        if !repo.delete(id).await? {
            tracing::warn!("Delete requested for unknown scheduling {}", id);
            return Err(scheduling_not_found());
        }

        Ok(())
    }
}

fn scheduling_not_found() -> AppError {
    AppError::NotFound("Scheduling not found".to_string())
}
