use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::admin::ADMIN_ROLE;

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new admin with an already hashed password
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
    ) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(ADMIN_ROLE.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an admin by exact username
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Admin found
    /// - `Ok(None)`: No admin with this username
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
