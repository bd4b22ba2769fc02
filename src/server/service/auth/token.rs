//! Signed access tokens for admins.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::model::admin::Admin;

/// Lifetime of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 1;

/// Claims carried by every admin token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin id.
    pub sub: String,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 key pair derived from the configured secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for `admin` valid for [`TOKEN_TTL_HOURS`].
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(jsonwebtoken::errors::Error)` - Signing failed
    pub fn issue(&self, admin: &Admin) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            role: admin.role.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verifies signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Admin {
        Admin {
            id: 7,
            username: "operator".to_string(),
            password_hash: String::new(),
            role: "admin".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let keys = JwtKeys::new("secret-one");
        let token = keys.issue(&admin()).unwrap();

        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "operator");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = JwtKeys::new("secret-one").issue(&admin()).unwrap();

        assert!(JwtKeys::new("secret-two").verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = JwtKeys::new("secret-one");
        let past = Utc::now() - Duration::hours(2);
        let claims = Claims {
            sub: "7".to_string(),
            username: "operator".to_string(),
            role: "admin".to_string(),
            iat: past.timestamp(),
            exp: (past + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();

        assert!(keys.verify(&token).is_err());
    }
}
