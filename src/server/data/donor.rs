use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::blood_type::BloodType,
    server::model::donor::{contact_preferences_json, CreateDonorParams, UpdateDonorParams},
};

pub struct DonorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a donor under a freshly generated UUID.
    pub async fn create(&self, params: CreateDonorParams) -> Result<entity::donor::Model, DbErr> {
        let now = Utc::now();

        entity::donor::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            blood_type: ActiveValue::Set(params.blood_type.label().to_string()),
            gender: ActiveValue::Set(params.gender.as_str().to_string()),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            identity_document: ActiveValue::Set(params.identity_document),
            address: ActiveValue::Set(params.address),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            last_donation: ActiveValue::Set(params.last_donation),
            donation_frequency: ActiveValue::Set(params.donation_frequency),
            eligibility_status: ActiveValue::Set(params.eligibility_status),
            contact_preferences: ActiveValue::Set(Some(contact_preferences_json(
                &params.contact_preferences,
            ))),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Gets all donors, oldest registration first
    pub async fn get_all(&self) -> Result<Vec<entity::donor::Model>, DbErr> {
        entity::prelude::Donor::find()
            .order_by_asc(entity::donor::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::donor::Model>, DbErr> {
        entity::prelude::Donor::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    pub async fn find_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<Vec<entity::donor::Model>, DbErr> {
        entity::prelude::Donor::find()
            .filter(entity::donor::Column::BloodType.eq(blood_type.label()))
            .order_by_asc(entity::donor::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `params` and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated donor
    /// - `Ok(None)` - No donor with this id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: &str,
        params: UpdateDonorParams,
    ) -> Result<Option<entity::donor::Model>, DbErr> {
        let Some(donor) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::donor::ActiveModel = donor.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(birth_date) = params.birth_date {
            active_model.birth_date = ActiveValue::Set(birth_date);
        }
        if let Some(blood_type) = params.blood_type {
            active_model.blood_type = ActiveValue::Set(blood_type.label().to_string());
        }
        if let Some(gender) = params.gender {
            active_model.gender = ActiveValue::Set(gender.as_str().to_string());
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(identity_document) = params.identity_document {
            active_model.identity_document = ActiveValue::Set(identity_document);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if params.latitude.is_some() {
            active_model.latitude = ActiveValue::Set(params.latitude);
        }
        if params.longitude.is_some() {
            active_model.longitude = ActiveValue::Set(params.longitude);
        }
        if params.last_donation.is_some() {
            active_model.last_donation = ActiveValue::Set(params.last_donation);
        }
        if params.donation_frequency.is_some() {
            active_model.donation_frequency = ActiveValue::Set(params.donation_frequency);
        }
        if params.eligibility_status.is_some() {
            active_model.eligibility_status = ActiveValue::Set(params.eligibility_status);
        }
        if let Some(preferences) = params.contact_preferences {
            active_model.contact_preferences =
                ActiveValue::Set(Some(contact_preferences_json(&preferences)));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await.map(Some)
    }

    /// Deletes a donor, returning whether a row was removed
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Donor::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
