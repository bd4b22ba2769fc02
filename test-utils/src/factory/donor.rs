//! Donor factory for creating test donor entities.
//!
//! This module provides factory methods for creating donor entities with sensible
//! defaults. Defaults describe a valid adult donor so rows inserted here can also be
//! fed back through the update validators.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test donors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::donor::DonorFactory;
///
/// let donor = DonorFactory::new(&db)
///     .blood_type("AB-")
///     .build()
///     .await?;
/// ```
pub struct DonorFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::donor::Model,
}

impl<'a> DonorFactory<'a> {
    /// Creates a new DonorFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - name: `"Donor Number {n}"`
    /// - blood_type: `"O+"`
    /// - email: `"donor{n}@example.com"`
    /// - birth_date: 1990-01-15
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        let now = Utc::now();
        let entity = entity::donor::Model {
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("Donor Number {}", n),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap_or_default(),
            blood_type: "O+".to_string(),
            gender: "Feminino".to_string(),
            phone: format!("119{:08}", n),
            email: format!("donor{}@example.com", n),
            identity_document: format!("{:011}", n),
            address: "Rua das Flores, 123 - Centro".to_string(),
            latitude: None,
            longitude: None,
            last_donation: None,
            donation_frequency: None,
            eligibility_status: Some(true),
            contact_preferences: None,
            created_at: now,
            updated_at: now,
        };

        Self { db, entity }
    }

    /// Sets the donor name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the blood type label (e.g. `"A+"`).
    pub fn blood_type(mut self, blood_type: impl Into<String>) -> Self {
        self.entity.blood_type = blood_type.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    /// Sets the birth date.
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.entity.birth_date = birth_date;
        self
    }

    /// Builds and inserts the donor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::donor::Model)` - Created donor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::donor::Model, DbErr> {
        let e = self.entity;
        entity::donor::ActiveModel {
            id: ActiveValue::Set(e.id),
            name: ActiveValue::Set(e.name),
            birth_date: ActiveValue::Set(e.birth_date),
            blood_type: ActiveValue::Set(e.blood_type),
            gender: ActiveValue::Set(e.gender),
            phone: ActiveValue::Set(e.phone),
            email: ActiveValue::Set(e.email),
            identity_document: ActiveValue::Set(e.identity_document),
            address: ActiveValue::Set(e.address),
            latitude: ActiveValue::Set(e.latitude),
            longitude: ActiveValue::Set(e.longitude),
            last_donation: ActiveValue::Set(e.last_donation),
            donation_frequency: ActiveValue::Set(e.donation_frequency),
            eligibility_status: ActiveValue::Set(e.eligibility_status),
            contact_preferences: ActiveValue::Set(e.contact_preferences),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a donor with default values.
///
/// Shorthand for `DonorFactory::new(db).build().await`.
pub async fn create_donor(db: &DatabaseConnection) -> Result<entity::donor::Model, DbErr> {
    DonorFactory::new(db).build().await
}
