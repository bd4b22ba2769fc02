use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::scheduling::{CreateSchedulingParams, UpdateSchedulingParams};

pub struct SchedulingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchedulingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateSchedulingParams,
    ) -> Result<entity::scheduling::Model, DbErr> {
        entity::scheduling::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(params.user_id),
            scheduled_at: ActiveValue::Set(params.scheduled_at),
            location: ActiveValue::Set(params.location),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets all appointments ordered by appointment time
    pub async fn get_all(&self) -> Result<Vec<entity::scheduling::Model>, DbErr> {
        entity::prelude::Scheduling::find()
            .order_by_asc(entity::scheduling::Column::ScheduledAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::scheduling::Model>, DbErr> {
        entity::prelude::Scheduling::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Applies the fields present in `params`; `Ok(None)` when the appointment doesn't exist
    pub async fn update(
        &self,
        params: UpdateSchedulingParams,
    ) -> Result<Option<entity::scheduling::Model>, DbErr> {
        let Some(scheduling) = self.find_by_id(&params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::scheduling::ActiveModel = scheduling.into();
        if let Some(user_id) = params.user_id {
            active_model.user_id = ActiveValue::Set(user_id);
        }
        if let Some(scheduled_at) = params.scheduled_at {
            active_model.scheduled_at = ActiveValue::Set(scheduled_at);
        }
        if params.location.is_some() {
            active_model.location = ActiveValue::Set(params.location);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }

        active_model.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Scheduling::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
