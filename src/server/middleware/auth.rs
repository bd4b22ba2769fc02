use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::admin::ADMIN_ROLE,
    service::auth::token::{Claims, JwtKeys},
};

pub enum Permission {
    Admin,
}

/// Bearer token guard for protected routes.
///
/// Reads `Authorization: Bearer <token>`, verifies the token against the configured keys
/// and checks the requested permissions against its claims.
pub struct AuthGuard<'a> {
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { keys, headers }
    }

    /// Verifies the request's token and all `permissions`
    ///
    /// # Returns
    /// - `Ok(Claims)` - Claims of the authenticated admin
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or malformed token
    /// - `Err(AuthError::AccessDenied)` - Token lacks a required role
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self
            .keys
            .verify(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if claims.role != ADMIN_ROLE {
                        return Err(AuthError::AccessDenied(claims.username).into());
                    }
                }
            }
        }

        Ok(claims)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
