use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::locality::LocalityParams;

pub struct LocalityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocalityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: LocalityParams) -> Result<entity::locality::Model, DbErr> {
        entity::locality::ActiveModel {
            street: ActiveValue::Set(params.street),
            neighborhood: ActiveValue::Set(params.neighborhood),
            zip: ActiveValue::Set(params.zip),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::locality::Model>, DbErr> {
        entity::prelude::Locality::find()
            .order_by_asc(entity::locality::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::locality::Model>, DbErr> {
        entity::prelude::Locality::find_by_id(id).one(self.db).await
    }

    /// Replaces all address fields; `Ok(None)` when the locality doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: LocalityParams,
    ) -> Result<Option<entity::locality::Model>, DbErr> {
        let Some(locality) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::locality::ActiveModel = locality.into();
        active_model.street = ActiveValue::Set(params.street);
        active_model.neighborhood = ActiveValue::Set(params.neighborhood);
        active_model.zip = ActiveValue::Set(params.zip);
        active_model.city = ActiveValue::Set(params.city);
        active_model.state = ActiveValue::Set(params.state);

        active_model.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Locality::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
