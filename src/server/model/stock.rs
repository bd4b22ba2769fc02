//! Stock batch domain models and parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        blood_type::BloodType,
        stock::{StockBatchDto, StockBatchPayloadDto, UpdateQuantityDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        util::{parse::parse_date, validate},
    },
};

/// Availability of a batch.
///
/// Parsing also accepts the Portuguese labels used by the first clients of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockStatus {
    #[default]
    Available,
    Expired,
    Problem,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Available => "available",
            StockStatus::Expired => "expired",
            StockStatus::Problem => "problem",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" | "disponível" | "disponivel" => Ok(StockStatus::Available),
            "expired" | "vencido" => Ok(StockStatus::Expired),
            "problem" | "com problema" | "com_problema" => Ok(StockStatus::Problem),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockBatch {
    pub id: i32,
    pub lot: String,
    pub blood_type: BloodType,
    pub quantity: i32,
    pub expiration_date: NaiveDate,
    pub status: StockStatus,
    pub created_at: DateTime<Utc>,
}

impl StockBatch {
    /// Converts an entity model to a stock batch domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(StockBatch)` - The converted batch
    /// - `Err(AppError::InternalError)` - A stored enum column holds an unknown value
    pub fn from_entity(entity: entity::stock_batch::Model) -> Result<Self, AppError> {
        let blood_type = entity.blood_type.parse::<BloodType>().map_err(|e| {
            AppError::InternalError(format!("Corrupt stock batch {}: {}", entity.id, e))
        })?;
        let status = entity.status.parse::<StockStatus>().map_err(|_| {
            AppError::InternalError(format!(
                "Corrupt stock batch {}: unknown status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            lot: entity.lot,
            blood_type,
            quantity: entity.quantity,
            expiration_date: entity.expiration_date,
            status,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> StockBatchDto {
        StockBatchDto {
            id: self.id,
            lot: self.lot,
            blood_type: self.blood_type,
            quantity: self.quantity,
            expiration_date: self.expiration_date,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Validated batch fields used both to add a batch and to replace one.
#[derive(Debug, Clone, PartialEq)]
pub struct StockBatchParams {
    pub lot: String,
    pub blood_type: BloodType,
    pub quantity: i32,
    pub expiration_date: NaiveDate,
    pub status: StockStatus,
}

impl StockBatchParams {
    /// Validates a body for adding a batch. `status` defaults to `available`.
    pub fn for_create(dto: StockBatchPayloadDto) -> Result<Self, ValidationErrors> {
        Self::from_dto(dto, false)
    }

    /// Validates a body for a full replacement. Every field, `status` included, is required.
    pub fn for_update(dto: StockBatchPayloadDto) -> Result<Self, ValidationErrors> {
        Self::from_dto(dto, true)
    }

    fn from_dto(dto: StockBatchPayloadDto, status_required: bool) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let lot = validate::required(&mut errors, "lot", dto.lot, "Lot is required");
        let blood_type =
            validate::required(&mut errors, "blood_type", dto.blood_type, "Blood type is required")
                .and_then(|v| match v.parse::<BloodType>() {
                    Ok(blood_type) => Some(blood_type),
                    Err(_) => {
                        errors.add("blood_type", "Invalid blood type");
                        None
                    }
                });
        let quantity = quantity(&mut errors, dto.quantity);
        let expiration_date = validate::required(
            &mut errors,
            "expiration_date",
            dto.expiration_date,
            "Expiration date is required",
        )
        .and_then(|v| {
            let parsed = parse_date(&v);
            if parsed.is_none() {
                errors.add("expiration_date", "Invalid date format (YYYY-MM-DD)");
            }
            parsed
        });
        let status = match dto.status {
            Some(raw) => match raw.parse::<StockStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.add("status", "Invalid status");
                    None
                }
            },
            None if status_required => {
                errors.add("status", "Status is required");
                None
            }
            None => Some(StockStatus::default()),
        };

        let (Some(lot), Some(blood_type), Some(quantity), Some(expiration_date), Some(status)) =
            (lot, blood_type, quantity, expiration_date, status)
        else {
            return Err(errors);
        };
        errors.finish()?;

        Ok(Self {
            lot,
            blood_type,
            quantity,
            expiration_date,
            status,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateQuantityParams {
    pub id: i32,
    pub quantity: i32,
}

impl UpdateQuantityParams {
    pub fn from_dto(id: i32, dto: UpdateQuantityDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match quantity(&mut errors, dto.quantity) {
            Some(quantity) => Ok(Self { id, quantity }),
            None => Err(errors),
        }
    }
}

fn quantity(errors: &mut ValidationErrors, value: Option<i64>) -> Option<i32> {
    match value {
        Some(v) => validate::non_negative_i32(
            errors,
            "quantity",
            v,
            "Quantity must be a non-negative integer",
        ),
        None => {
            errors.add("quantity", "Quantity is required");
            None
        }
    }
}
