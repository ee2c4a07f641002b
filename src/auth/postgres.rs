use crate::auth::{self, Authenticator, Credentials};
use crate::domain::Role;
use crate::error::BizErrorEnum;
use async_trait::async_trait;
use secrecy::Secret;
use sqlx::PgPool;

/// Accounts stored in the `users` table.
pub struct PgAuthenticator {
    pool: PgPool,
}

impl PgAuthenticator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Authenticator for PgAuthenticator {
    #[tracing::instrument(
        name = "Authenticate against the users table",
        skip(self, credentials),
        fields(username = %credentials.username, role = %credentials.role)
    )]
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, BizErrorEnum> {
        let (password_hash, role) = match get_stored_credentials(&credentials.username, &self.pool)
            .await?
        {
            Some((password_hash, role)) => (password_hash, Some(role)),
            None => (auth::fallback_password_hash(), None),
        };
        let password_matches =
            auth::verify_password(password_hash, credentials.password.clone()).await?;

        Ok(password_matches && role == Some(credentials.role))
    }
}

#[tracing::instrument(name = "Get stored credentials", skip(pool))]
async fn get_stored_credentials(
    username: &str,
    pool: &PgPool,
) -> Result<Option<(Secret<String>, Role)>, BizErrorEnum> {
    let row: Option<(String, String)> =
        sqlx::query_as(r#"SELECT password_hash, role FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query users table: {:?}", e);
                BizErrorEnum::QueryUsersError(e)
            })?;

    match row {
        None => Ok(None),
        Some((password_hash, role)) => {
            let role = Role::parse(&role).map_err(|_| BizErrorEnum::StoredRoleInvalid(role))?;
            Ok(Some((Secret::new(password_hash), role)))
        }
    }
}
