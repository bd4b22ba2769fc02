use crate::{
    model::blood_type::BloodType,
    server::{
        data::donor::DonorRepository,
        model::donor::{ContactPreference, CreateDonorParams, Gender, UpdateDonorParams},
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_blood_type;
mod update;

/// Builds valid creation params for a donor of the given blood type
fn donor_params(name: &str, blood_type: BloodType) -> CreateDonorParams {
    CreateDonorParams {
        name: name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1988, 3, 9).unwrap(),
        blood_type,
        gender: Gender::Masculino,
        phone: "11987654321".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        identity_document: "12345678909".to_string(),
        address: "Avenida Brasil, 500 - Jardim".to_string(),
        latitude: Some(-23.55),
        longitude: Some(-46.63),
        last_donation: None,
        donation_frequency: Some(2),
        eligibility_status: Some(true),
        contact_preferences: vec![ContactPreference::Email, ContactPreference::Whatsapp],
    }
}
