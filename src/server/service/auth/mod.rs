//! Admin registration and login.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::admin::AdminRepository,
    error::{auth::AuthError, AppError},
    model::admin::{Admin, LoginParams, RegisterAdminParams},
};

pub mod token;

use token::JwtKeys;

/// bcrypt work factor for stored password hashes.
const BCRYPT_COST: u32 = 10;

/// Service for admin credentials and token issuance.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys, config: &'a Config) -> Self {
        Self { db, keys, config }
    }

    /// Registers a new admin.
    ///
    /// The submitted registration secret must equal the configured one. The password is
    /// hashed on a blocking thread.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The stored admin
    /// - `Err(AppError::AuthErr(RegistrationDenied))` - Wrong registration secret
    /// - `Err(AppError::AuthErr(UsernameTaken))` - Username already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterAdminParams) -> Result<Admin, AppError> {
        if params.credentials != self.config.credentials {
            tracing::warn!("Rejected admin registration for '{}'", params.username);
            return Err(AuthError::RegistrationDenied.into());
        }

        let repo = AdminRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(AuthError::UsernameTaken(params.username).into());
        }

        let password = params.password;
        let password_hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

        let admin = repo.create(params.username, password_hash).await?;

        tracing::info!("Registered admin '{}'", admin.username);

        Ok(Admin::from_entity(admin))
    }

    /// Verifies credentials and issues an access token.
    ///
    /// # Returns
    /// - `Ok((String, Admin))` - Signed token and the authenticated admin
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError)` - Database, hashing task, or signing failure
    pub async fn login(&self, params: LoginParams) -> Result<(String, Admin), AppError> {
        let repo = AdminRepository::new(self.db);

        let Some(admin) = repo.find_by_username(&params.username).await? else {
            tracing::warn!("Login attempt for unknown admin '{}'", params.username);
            return Err(AuthError::InvalidCredentials.into());
        };
        let admin = Admin::from_entity(admin);

        let password = params.password;
        let hash = admin.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await?
            .unwrap_or_else(|e| {
                tracing::error!("Stored hash for admin {} is unusable: {}", admin.id, e);
                false
            });

        if !verified {
            tracing::warn!("Wrong password for admin '{}'", admin.username);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.keys.issue(&admin)?;

        Ok((token, admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::Admin as AdminEntity;
    use test_utils::builder::TestBuilder;

    fn register_params(username: &str, credentials: &str) -> RegisterAdminParams {
        RegisterAdminParams {
            username: username.to_string(),
            password: "s3nha-forte".to_string(),
            credentials: credentials.to_string(),
        }
    }

    #[tokio::test]
    async fn registers_and_logs_in() {
        let test = TestBuilder::new().with_table(AdminEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = Config::for_tests();
        let keys = JwtKeys::new(&config.jwt_secret);
        let service = AuthService::new(db, &keys, &config);

        let admin = service
            .register(register_params("operator", "let-me-in"))
            .await
            .unwrap();
        assert_ne!(admin.password_hash, "s3nha-forte");

        let (token, logged_in) = service
            .login(LoginParams {
                username: "operator".to_string(),
                password: "s3nha-forte".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(logged_in.id, admin.id);
        assert_eq!(keys.verify(&token).unwrap().sub, admin.id.to_string());
    }

    #[tokio::test]
    async fn rejects_wrong_registration_secret() {
        let test = TestBuilder::new().with_table(AdminEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = Config::for_tests();
        let keys = JwtKeys::new(&config.jwt_secret);
        let service = AuthService::new(db, &keys, &config);

        let result = service.register(register_params("operator", "guess")).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::RegistrationDenied))
        ));
    }

    #[tokio::test]
    async fn rejects_taken_username() {
        let test = TestBuilder::new().with_table(AdminEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = Config::for_tests();
        let keys = JwtKeys::new(&config.jwt_secret);
        let service = AuthService::new(db, &keys, &config);

        service
            .register(register_params("operator", "let-me-in"))
            .await
            .unwrap();
        let result = service
            .register(register_params("operator", "let-me-in"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::UsernameTaken(_)))
        ));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let test = TestBuilder::new().with_table(AdminEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = Config::for_tests();
        let keys = JwtKeys::new(&config.jwt_secret);
        let service = AuthService::new(db, &keys, &config);

        service
            .register(register_params("operator", "let-me-in"))
            .await
            .unwrap();

        for (username, password) in [("operator", "wrong-pass"), ("ghost", "s3nha-forte")] {
            let result = service
                .login(LoginParams {
                    username: username.to_string(),
                    password: password.to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));
        }
    }
}
