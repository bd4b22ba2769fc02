use sea_orm::DatabaseConnection;

use crate::{
    model::blood_type::BloodType,
    server::{
        data::donor::DonorRepository,
        error::AppError,
        model::donor::{CreateDonorParams, Donor, UpdateDonorParams},
    },
};

pub struct DonorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDonorParams) -> Result<Donor, AppError> {
        let repo = DonorRepository::new(self.db);

        let donor = repo.create(params).await?;

        tracing::info!("Registered donor {}", donor.id);

        Donor::from_entity(donor)
    }

    pub async fn get_all(&self) -> Result<Vec<Donor>, AppError> {
        let repo = DonorRepository::new(self.db);

        repo.get_all()
            .await?
            .into_iter()
            .map(Donor::from_entity)
            .collect()
    }

    /// Gets a donor by id
    ///
    /// # Returns
    /// - `Ok(Donor)` - The donor
    /// - `Err(AppError::NotFound)` - No donor with this id
    pub async fn get_by_id(&self, id: &str) -> Result<Donor, AppError> {
        let repo = DonorRepository::new(self.db);

        let donor = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Donor not found".to_string()))?;

        Donor::from_entity(donor)
    }

    pub async fn get_by_blood_type(&self, blood_type: BloodType) -> Result<Vec<Donor>, AppError> {
        let repo = DonorRepository::new(self.db);

        repo.find_by_blood_type(blood_type)
            .await?
            .into_iter()
            .map(Donor::from_entity)
            .collect()
    }

    pub async fn update(&self, id: &str, params: UpdateDonorParams) -> Result<Donor, AppError> {
        let repo = DonorRepository::new(self.db);

        let donor = repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Donor not found".to_string()))?;

        Donor::from_entity(donor)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = DonorRepository::new(self.db);

        if !repo.delete(id).await? {
            tracing::warn!("Delete requested for unknown donor {}", id);
            return Err(AppError::NotFound("Donor not found".to_string()));
        }

        Ok(())
    }
}
