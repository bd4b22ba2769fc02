use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SchedulingDto {
    pub id: String,
    pub user_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    /// `scheduled`, `canceled` or `completed`
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSchedulingDto {
    #[serde(alias = "usuario_id")]
    pub user_id: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    #[serde(alias = "data_agendamento")]
    pub scheduled_at: Option<String>,
    #[serde(alias = "local")]
    pub location: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSchedulingDto {
    #[serde(alias = "usuario_id")]
    pub user_id: Option<String>,
    #[serde(alias = "data_agendamento")]
    pub scheduled_at: Option<String>,
    #[serde(alias = "local")]
    pub location: Option<String>,
    pub status: Option<String>,
}
