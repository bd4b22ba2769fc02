//! Locality factory for creating test locality entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test localities with customizable fields.
pub struct LocalityFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::locality::Model,
}

impl<'a> LocalityFactory<'a> {
    /// Creates a new LocalityFactory with a numbered street and default city.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        let entity = entity::locality::Model {
            id: 0,
            street: format!("Rua {}", n),
            neighborhood: "Centro".to_string(),
            zip: "01001-000".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
        };

        Self { db, entity }
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    /// Builds and inserts the locality into the database.
    pub async fn build(self) -> Result<entity::locality::Model, DbErr> {
        let e = self.entity;
        entity::locality::ActiveModel {
            id: ActiveValue::NotSet,
            street: ActiveValue::Set(e.street),
            neighborhood: ActiveValue::Set(e.neighborhood),
            zip: ActiveValue::Set(e.zip),
            city: ActiveValue::Set(e.city),
            state: ActiveValue::Set(e.state),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a locality with default values.
pub async fn create_locality(db: &DatabaseConnection) -> Result<entity::locality::Model, DbErr> {
    LocalityFactory::new(db).build().await
}
