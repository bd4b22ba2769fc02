//! Donor domain models and parameters.
//!
//! Request DTOs are validated field by field into `CreateDonorParams` / `UpdateDonorParams`.
//! Every rejected field is reported, not just the first one.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Months, NaiveDate, Utc};

use crate::{
    model::{
        blood_type::BloodType,
        donor::{CreateDonorDto, DonorDto, UpdateDonorDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        util::{parse::parse_date, validate},
    },
};

const MINIMUM_AGE_MONTHS: u32 = 18 * 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculino,
    Feminino,
    Outro,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Feminino => "Feminino",
            Gender::Outro => "Outro",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masculino" => Ok(Gender::Masculino),
            "feminino" => Ok(Gender::Feminino),
            "outro" => Ok(Gender::Outro),
            _ => Err(()),
        }
    }
}

/// Channel a donor accepts to be contacted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPreference {
    Email,
    Sms,
    Whatsapp,
    Call,
}

impl ContactPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactPreference::Email => "email",
            ContactPreference::Sms => "sms",
            ContactPreference::Whatsapp => "whatsapp",
            ContactPreference::Call => "call",
        }
    }
}

impl FromStr for ContactPreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(ContactPreference::Email),
            "sms" => Ok(ContactPreference::Sms),
            "whatsapp" => Ok(ContactPreference::Whatsapp),
            "call" => Ok(ContactPreference::Call),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub blood_type: BloodType,
    pub gender: Gender,
    /// Digits only.
    pub phone: String,
    pub email: String,
    /// Digits only.
    pub identity_document: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last_donation: Option<NaiveDate>,
    pub donation_frequency: Option<i32>,
    pub eligibility_status: Option<bool>,
    pub contact_preferences: Vec<ContactPreference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Donor {
    /// Converts an entity model to a donor domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Donor)` - The converted donor
    /// - `Err(AppError::InternalError)` - A stored enum column holds an unknown value
    pub fn from_entity(entity: entity::donor::Model) -> Result<Self, AppError> {
        let blood_type = entity
            .blood_type
            .parse::<BloodType>()
            .map_err(|e| AppError::InternalError(format!("Corrupt donor {}: {}", entity.id, e)))?;
        let gender = entity.gender.parse::<Gender>().map_err(|_| {
            AppError::InternalError(format!(
                "Corrupt donor {}: unknown gender '{}'",
                entity.id, entity.gender
            ))
        })?;

        let contact_preferences = match entity.contact_preferences {
            Some(value) => serde_json::from_value::<Vec<String>>(value)
                .map_err(|e| {
                    AppError::InternalError(format!("Corrupt donor {}: {}", entity.id, e))
                })?
                .iter()
                .filter_map(|p| p.parse::<ContactPreference>().ok())
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            birth_date: entity.birth_date,
            blood_type,
            gender,
            phone: entity.phone,
            email: entity.email,
            identity_document: entity.identity_document,
            address: entity.address,
            latitude: entity.latitude,
            longitude: entity.longitude,
            last_donation: entity.last_donation,
            donation_frequency: entity.donation_frequency,
            eligibility_status: entity.eligibility_status,
            contact_preferences,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> DonorDto {
        DonorDto {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
            blood_type: self.blood_type,
            gender: self.gender.as_str().to_string(),
            phone: self.phone,
            email: self.email,
            identity_document: self.identity_document,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            last_donation: self.last_donation,
            donation_frequency: self.donation_frequency,
            eligibility_status: self.eligibility_status,
            contact_preferences: self
                .contact_preferences
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Serializes contact preferences for the JSON column.
pub fn contact_preferences_json(preferences: &[ContactPreference]) -> serde_json::Value {
    serde_json::Value::Array(
        preferences
            .iter()
            .map(|p| serde_json::Value::String(p.as_str().to_string()))
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDonorParams {
    pub name: String,
    pub birth_date: NaiveDate,
    pub blood_type: BloodType,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub identity_document: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last_donation: Option<NaiveDate>,
    pub donation_frequency: Option<i32>,
    pub eligibility_status: Option<bool>,
    pub contact_preferences: Vec<ContactPreference>,
}

impl CreateDonorParams {
    /// Validates a registration request.
    ///
    /// # Arguments
    /// - `dto` - Raw request body
    /// - `today` - Reference date for the minimum-age and future-date checks
    ///
    /// # Returns
    /// - `Ok(CreateDonorParams)` - All fields valid and normalized
    /// - `Err(ValidationErrors)` - One entry per rejected field
    pub fn from_dto(dto: CreateDonorDto, today: NaiveDate) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = validate::required(&mut errors, "name", dto.name, "Full name is required")
            .and_then(|v| name_length(&mut errors, v));
        let birth_date =
            validate::required(&mut errors, "birth_date", dto.birth_date, "Birth date is required")
                .and_then(|v| birth_date(&mut errors, &v, today));
        let blood_type =
            validate::required(&mut errors, "blood_type", dto.blood_type, "Blood type is required")
                .and_then(|v| blood_type(&mut errors, &v));
        let gender = validate::required(&mut errors, "gender", dto.gender, "Gender is required")
            .and_then(|v| gender(&mut errors, &v));
        let phone = validate::required(&mut errors, "phone", dto.phone, "Phone number is required")
            .and_then(|v| validate::phone(&mut errors, "phone", v));
        let email = validate::required(&mut errors, "email", dto.email, "Email is required")
            .and_then(|v| validate::email(&mut errors, "email", v));
        let identity_document = validate::required(
            &mut errors,
            "identity_document",
            dto.identity_document,
            "ID document is required",
        )
        .and_then(|v| identity_document(&mut errors, v));
        let address = validate::required(&mut errors, "address", dto.address, "Address is required")
            .and_then(|v| address_length(&mut errors, v));

        let latitude = validate::coordinate(
            &mut errors,
            "latitude",
            dto.latitude,
            90.0,
            "Invalid latitude value",
        );
        let longitude = validate::coordinate(
            &mut errors,
            "longitude",
            dto.longitude,
            180.0,
            "Invalid longitude value",
        );
        let last_donation = dto
            .last_donation
            .and_then(|v| last_donation(&mut errors, &v, today));
        let donation_frequency = dto
            .donation_frequency
            .and_then(|v| donation_frequency(&mut errors, v));
        let contact_preferences = dto
            .contact_preferences
            .map(|v| contact_preferences(&mut errors, &v))
            .unwrap_or_default();

        let (
            Some(name),
            Some(birth_date),
            Some(blood_type),
            Some(gender),
            Some(phone),
            Some(email),
            Some(identity_document),
            Some(address),
        ) = (
            name,
            birth_date,
            blood_type,
            gender,
            phone,
            email,
            identity_document,
            address,
        )
        else {
            return Err(errors);
        };
        errors.finish()?;

        Ok(Self {
            name,
            birth_date,
            blood_type,
            gender,
            phone,
            email,
            identity_document,
            address,
            latitude,
            longitude,
            last_donation,
            donation_frequency,
            eligibility_status: dto.eligibility_status,
            contact_preferences,
        })
    }
}

/// Partial donor update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateDonorParams {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub blood_type: Option<BloodType>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_document: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last_donation: Option<NaiveDate>,
    pub donation_frequency: Option<i32>,
    pub eligibility_status: Option<bool>,
    pub contact_preferences: Option<Vec<ContactPreference>>,
}

impl UpdateDonorParams {
    /// Validates the fields present in an update request with the same rules as creation.
    ///
    /// # Returns
    /// - `Ok(UpdateDonorParams)` - Every supplied field is valid
    /// - `Err(ValidationErrors)` - One entry per rejected field
    pub fn from_dto(dto: UpdateDonorDto, today: NaiveDate) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let params = Self {
            name: validate::not_blank(&mut errors, "name", dto.name, "Name cannot be empty")
                .and_then(|v| name_length(&mut errors, v)),
            birth_date: validate::not_blank(
                &mut errors,
                "birth_date",
                dto.birth_date,
                "Birth date is required",
            )
            .and_then(|v| birth_date(&mut errors, &v, today)),
            blood_type: validate::not_blank(
                &mut errors,
                "blood_type",
                dto.blood_type,
                "Blood type is required",
            )
            .and_then(|v| blood_type(&mut errors, &v)),
            gender: validate::not_blank(&mut errors, "gender", dto.gender, "Gender is required")
                .and_then(|v| gender(&mut errors, &v)),
            phone: validate::not_blank(&mut errors, "phone", dto.phone, "Phone number is required")
                .and_then(|v| validate::phone(&mut errors, "phone", v)),
            email: validate::not_blank(&mut errors, "email", dto.email, "Email is required")
                .and_then(|v| validate::email(&mut errors, "email", v)),
            identity_document: validate::not_blank(
                &mut errors,
                "identity_document",
                dto.identity_document,
                "ID document is required",
            )
            .and_then(|v| identity_document(&mut errors, v)),
            address: validate::not_blank(&mut errors, "address", dto.address, "Address is required")
                .and_then(|v| address_length(&mut errors, v)),
            latitude: validate::coordinate(
                &mut errors,
                "latitude",
                dto.latitude,
                90.0,
                "Invalid latitude value",
            ),
            longitude: validate::coordinate(
                &mut errors,
                "longitude",
                dto.longitude,
                180.0,
                "Invalid longitude value",
            ),
            last_donation: dto
                .last_donation
                .and_then(|v| last_donation(&mut errors, &v, today)),
            donation_frequency: dto
                .donation_frequency
                .and_then(|v| donation_frequency(&mut errors, v)),
            eligibility_status: dto.eligibility_status,
            contact_preferences: dto
                .contact_preferences
                .map(|v| contact_preferences(&mut errors, &v)),
        };

        errors.finish()?;

        Ok(params)
    }
}

fn name_length(errors: &mut ValidationErrors, value: String) -> Option<String> {
    validate::length_between(
        errors,
        "name",
        value,
        5,
        100,
        "Name must be between 5 and 100 characters",
    )
}

fn address_length(errors: &mut ValidationErrors, value: String) -> Option<String> {
    validate::length_between(
        errors,
        "address",
        value,
        10,
        200,
        "Address must be between 10 and 200 characters",
    )
}

fn birth_date(errors: &mut ValidationErrors, value: &str, today: NaiveDate) -> Option<NaiveDate> {
    let Some(date) = parse_date(value) else {
        errors.add("birth_date", "Invalid date format (YYYY-MM-DD)");
        return None;
    };

    match today.checked_sub_months(Months::new(MINIMUM_AGE_MONTHS)) {
        Some(latest) if date <= latest => Some(date),
        _ => {
            errors.add("birth_date", "Donor must be at least 18 years old");
            None
        }
    }
}

fn blood_type(errors: &mut ValidationErrors, value: &str) -> Option<BloodType> {
    match value.parse::<BloodType>() {
        Ok(blood_type) => Some(blood_type),
        Err(_) => {
            errors.add("blood_type", "Invalid blood type");
            None
        }
    }
}

fn gender(errors: &mut ValidationErrors, value: &str) -> Option<Gender> {
    match value.parse::<Gender>() {
        Ok(gender) => Some(gender),
        Err(_) => {
            errors.add("gender", "Invalid gender");
            None
        }
    }
}

/// Length is checked on the submitted text; only the digits are kept.
fn identity_document(errors: &mut ValidationErrors, value: String) -> Option<String> {
    validate::length_between(
        errors,
        "identity_document",
        value,
        8,
        20,
        "ID must be between 8 and 20 characters",
    )
    .map(|v| validate::digits_only(&v))
}

fn last_donation(errors: &mut ValidationErrors, value: &str, today: NaiveDate) -> Option<NaiveDate> {
    match parse_date(value) {
        Some(date) if date <= today => Some(date),
        Some(_) => {
            errors.add("last_donation", "Last donation date cannot be in the future");
            None
        }
        None => {
            errors.add("last_donation", "Invalid date format (YYYY-MM-DD)");
            None
        }
    }
}

fn donation_frequency(errors: &mut ValidationErrors, value: i64) -> Option<i32> {
    validate::non_negative_i32(
        errors,
        "donation_frequency",
        value,
        "Donation frequency must be a positive number",
    )
}

fn contact_preferences(errors: &mut ValidationErrors, values: &[String]) -> Vec<ContactPreference> {
    let mut preferences = Vec::with_capacity(values.len());
    for value in values {
        match value.parse::<ContactPreference>() {
            Ok(p) if !preferences.contains(&p) => preferences.push(p),
            Ok(_) => {}
            Err(_) => {
                errors.add("contact_preferences", "Invalid contact preference");
                break;
            }
        }
    }
    preferences
}
