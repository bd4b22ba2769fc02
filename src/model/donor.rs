use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::blood_type::BloodType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DonorDto {
    pub id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub blood_type: BloodType,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub identity_document: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last_donation: Option<NaiveDate>,
    pub donation_frequency: Option<i32>,
    pub eligibility_status: Option<bool>,
    pub contact_preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Donor registration body. Every field is validated server-side; required fields are
/// optional here so that omissions are reported per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateDonorDto {
    pub name: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub blood_type: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_document: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// `YYYY-MM-DD`
    pub last_donation: Option<String>,
    pub donation_frequency: Option<i64>,
    pub eligibility_status: Option<bool>,
    pub contact_preferences: Option<Vec<String>>,
}

/// Partial donor update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDonorDto {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub blood_type: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_document: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last_donation: Option<String>,
    pub donation_frequency: Option<i64>,
    pub eligibility_status: Option<bool>,
    pub contact_preferences: Option<Vec<String>>,
}
