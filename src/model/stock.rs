use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::blood_type::BloodType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockBatchDto {
    pub id: i32,
    pub lot: String,
    pub blood_type: BloodType,
    pub quantity: i32,
    pub expiration_date: NaiveDate,
    /// `available`, `expired` or `problem`
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Body for creating a batch or fully replacing one.
///
/// Accepts the Portuguese field names (`lote`, `quantidade`, `validade`) as aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StockBatchPayloadDto {
    #[serde(alias = "lote", alias = "batch")]
    pub lot: Option<String>,
    pub blood_type: Option<String>,
    #[serde(alias = "quantidade")]
    pub quantity: Option<i64>,
    /// `YYYY-MM-DD` or RFC 3339
    #[serde(alias = "validade", alias = "expirationDate")]
    pub expiration_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateQuantityDto {
    #[serde(alias = "quantidade")]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StockQuery {
    /// Case-insensitive substring filter on the lot code
    #[serde(alias = "batch")]
    pub lot: Option<String>,
}
