//! Admin credential models and the parameters of the register and login operations.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{AdminDto, LoginDto, RegisterDto},
    server::{error::validation::ValidationErrors, util::validate},
};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Role stamped on every registered admin and carried in its tokens.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    /// bcrypt hash; never leaves the service layer.
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            username: self.username,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterAdminParams {
    pub username: String,
    pub password: String,
    /// Registration secret as submitted; compared against configuration by the service.
    pub credentials: String,
}

impl RegisterAdminParams {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username =
            validate::required(&mut errors, "username", dto.username, "Username is required");
        let password = match dto.password.filter(|p| !p.is_empty()) {
            Some(p) if p.chars().count() >= MIN_PASSWORD_LENGTH => Some(p),
            Some(_) => {
                errors.add("password", "Password must be at least 6 characters");
                None
            }
            None => {
                errors.add("password", "Password is required");
                None
            }
        };
        let credentials = validate::required(
            &mut errors,
            "credentials",
            dto.credentials,
            "Credentials is required",
        );

        let (Some(username), Some(password), Some(credentials)) = (username, password, credentials)
        else {
            return Err(errors);
        };

        Ok(Self {
            username,
            password,
            credentials,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username =
            validate::required(&mut errors, "username", dto.username, "Username is required");
        let password = dto.password.filter(|p| !p.is_empty());
        if password.is_none() {
            errors.add("password", "Password is required");
        }

        let (Some(username), Some(password)) = (username, password) else {
            return Err(errors);
        };

        Ok(Self { username, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_short_password() {
        let errors = RegisterAdminParams::from_dto(RegisterDto {
            username: Some("operator".to_string()),
            password: Some("12345".to_string()),
            credentials: Some("secret".to_string()),
        })
        .unwrap_err();

        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.errors[0].message, "Password must be at least 6 characters");
    }

    #[test]
    fn register_reports_all_missing_fields() {
        let errors = RegisterAdminParams::from_dto(RegisterDto::default()).unwrap_err();

        assert!(errors.has_field("username"));
        assert!(errors.has_field("password"));
        assert!(errors.has_field("credentials"));
    }

    #[test]
    fn login_keeps_password_untrimmed() {
        let params = LoginParams::from_dto(LoginDto {
            username: Some(" operator ".to_string()),
            password: Some(" pass word ".to_string()),
        })
        .unwrap();

        assert_eq!(params.username, "operator");
        assert_eq!(params.password, " pass word ");
    }
}
