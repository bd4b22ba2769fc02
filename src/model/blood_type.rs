use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Message returned in place of an error when a statistics lookup names an unknown type.
pub const UNKNOWN_BLOOD_TYPE_MESSAGE: &str =
    "Informação não encontrada. Tipos sanguíneos para consulta: A+, A-, B+, B-, AB+, AB-, O+ e O-.";

/// ABO/Rh blood group.
///
/// Serialized as the symbolic label (`"AB-"`). Parsing is case-insensitive and also accepts
/// the long form used by older clients (`"AB_NEGATIVO"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBloodType(pub String);

impl fmt::Display for UnknownBloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown blood type '{}'", self.0)
    }
}

impl std::error::Error for UnknownBloodType {}

impl FromStr for BloodType {
    type Err = UnknownBloodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A+" | "A_POSITIVO" => Ok(BloodType::APositive),
            "A-" | "A_NEGATIVO" => Ok(BloodType::ANegative),
            "B+" | "B_POSITIVO" => Ok(BloodType::BPositive),
            "B-" | "B_NEGATIVO" => Ok(BloodType::BNegative),
            "AB+" | "AB_POSITIVO" => Ok(BloodType::AbPositive),
            "AB-" | "AB_NEGATIVO" => Ok(BloodType::AbNegative),
            "O+" | "O_POSITIVO" => Ok(BloodType::OPositive),
            "O-" | "O_NEGATIVO" => Ok(BloodType::ONegative),
            _ => Err(UnknownBloodType(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for BloodType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
