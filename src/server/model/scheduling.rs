//! Donation appointment domain models and parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::scheduling::{CreateSchedulingDto, SchedulingDto, UpdateSchedulingDto},
    server::{
        error::{validation::ValidationErrors, AppError},
        util::{parse::parse_datetime, validate},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulingStatus {
    #[default]
    Scheduled,
    Canceled,
    Completed,
}

impl SchedulingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulingStatus::Scheduled => "scheduled",
            SchedulingStatus::Canceled => "canceled",
            SchedulingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for SchedulingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" | "agendado" => Ok(SchedulingStatus::Scheduled),
            "canceled" | "cancelled" | "cancelado" => Ok(SchedulingStatus::Canceled),
            "completed" | "concluído" | "concluido" => Ok(SchedulingStatus::Completed),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scheduling {
    pub id: String,
    pub user_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    pub status: SchedulingStatus,
    pub created_at: DateTime<Utc>,
}

impl Scheduling {
    pub fn from_entity(entity: entity::scheduling::Model) -> Result<Self, AppError> {
        let status = entity.status.parse::<SchedulingStatus>().map_err(|_| {
            AppError::InternalError(format!(
                "Corrupt scheduling {}: unknown status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            scheduled_at: entity.scheduled_at,
            location: entity.location,
            status,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> SchedulingDto {
        SchedulingDto {
            id: self.id,
            user_id: self.user_id,
            scheduled_at: self.scheduled_at,
            location: self.location,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSchedulingParams {
    pub user_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    pub status: SchedulingStatus,
}

impl CreateSchedulingParams {
    pub fn from_dto(dto: CreateSchedulingDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let user_id = validate::required(&mut errors, "user_id", dto.user_id, "User ID is required");
        let scheduled_at = validate::required(
            &mut errors,
            "scheduled_at",
            dto.scheduled_at,
            "Scheduled date is required",
        )
        .and_then(|v| scheduled_at(&mut errors, &v));
        let status = match dto.status {
            Some(raw) => status(&mut errors, &raw),
            None => Some(SchedulingStatus::default()),
        };

        let (Some(user_id), Some(scheduled_at), Some(status)) = (user_id, scheduled_at, status)
        else {
            return Err(errors);
        };
        errors.finish()?;

        Ok(Self {
            user_id,
            scheduled_at,
            location: optional_location(dto.location),
            status,
        })
    }
}

/// Partial appointment update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSchedulingParams {
    pub id: String,
    pub user_id: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<SchedulingStatus>,
}

impl UpdateSchedulingParams {
    pub fn from_dto(id: String, dto: UpdateSchedulingDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let params = Self {
            id,
            user_id: validate::not_blank(
                &mut errors,
                "user_id",
                dto.user_id,
                "User ID cannot be empty",
            ),
            scheduled_at: validate::not_blank(
                &mut errors,
                "scheduled_at",
                dto.scheduled_at,
                "Scheduled date cannot be empty",
            )
            .and_then(|v| scheduled_at(&mut errors, &v)),
            location: optional_location(dto.location),
            status: dto.status.and_then(|v| status(&mut errors, &v)),
        };

        errors.finish()?;

        Ok(params)
    }
}

fn scheduled_at(errors: &mut ValidationErrors, value: &str) -> Option<DateTime<Utc>> {
    let parsed = parse_datetime(value);
    if parsed.is_none() {
        errors.add("scheduled_at", "Invalid date format");
    }
    parsed
}

fn status(errors: &mut ValidationErrors, value: &str) -> Option<SchedulingStatus> {
    match value.parse::<SchedulingStatus>() {
        Ok(status) => Some(status),
        Err(_) => {
            errors.add("status", "Invalid status");
            None
        }
    }
}

fn optional_location(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
