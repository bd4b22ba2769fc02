//! Scheduling factory for creating test appointment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schedulings with customizable fields.
pub struct SchedulingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    scheduled_at: DateTime<Utc>,
    location: Option<String>,
    status: String,
}

impl<'a> SchedulingFactory<'a> {
    /// Creates a new SchedulingFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"user_{n}"`
    /// - scheduled_at: 7 days from now
    /// - location: `None`
    /// - status: `"scheduled"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            user_id: format!("user_{}", n),
            scheduled_at: Utc::now() + Duration::days(7),
            location: None,
            status: "scheduled".to_string(),
        }
    }

    /// Sets the booked user reference.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the appointment location.
    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Sets the status (`scheduled`, `canceled`, `completed`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the scheduling into the database.
    pub async fn build(self) -> Result<entity::scheduling::Model, DbErr> {
        entity::scheduling::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(self.user_id),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            location: ActiveValue::Set(self.location),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduling with default values.
pub async fn create_scheduling(
    db: &DatabaseConnection,
) -> Result<entity::scheduling::Model, DbErr> {
    SchedulingFactory::new(db).build().await
}
