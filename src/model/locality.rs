use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocalityDto {
    pub id: i32,
    pub street: String,
    pub neighborhood: String,
    pub zip: String,
    pub city: String,
    pub state: String,
}

/// Body for creating or replacing a locality. All fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LocalityPayloadDto {
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}
