use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::blood_type::BloodType;

/// Turnaround statistics for one blood type.
///
/// `sent` is the running figure produced by the update rule, not an arithmetic mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodTypeStatDto {
    #[serde(rename = "type")]
    pub blood_type: BloodType,
    pub received: i32,
    pub sent: f64,
    pub short_time: f64,
    pub long_time: f64,
    /// Whether a previous state is saved and can be restored with a revert
    pub can_revert: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSentDto {
    /// Days between receiving and sending out a unit; must be `>= 0`
    pub sent: Option<f64>,
}

/// Either the statistics for a known type or the lookup help message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum StatLookupDto {
    Stat(BloodTypeStatDto),
    Message(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistBloodResultDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub result: StatLookupDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistBloodListDto {
    pub message: String,
    pub data: Vec<BloodTypeStatDto>,
}
