use crate::auth::{self, Authenticator, Credentials};
use crate::configuration::AccountSettings;
use crate::domain::Role;
use crate::error::BizErrorEnum;
use async_trait::async_trait;
use secrecy::Secret;
use std::collections::HashMap;

struct StoredAccount {
    password_hash: Secret<String>,
    role: Role,
}

/// Account table held in memory, hashed once at startup.
///
/// Backs local development and the demo deployment; the plaintext
/// passwords from the configuration never outlive `build`.
#[derive(Default)]
pub struct InMemoryAuthenticator {
    accounts: HashMap<String, StoredAccount>,
}

impl InMemoryAuthenticator {
    #[tracing::instrument(name = "Build in-memory account table", skip(accounts))]
    pub async fn build(accounts: &[AccountSettings]) -> Result<Self, BizErrorEnum> {
        let mut authenticator = Self::default();
        for account in accounts {
            authenticator
                .add_account(account.username.clone(), account.password.clone(), account.role)
                .await?;
        }
        tracing::info!("Loaded {} account(s)", authenticator.accounts.len());
        Ok(authenticator)
    }

    /// Hash `password` and store it, replacing any account with the same username.
    pub async fn add_account(
        &mut self,
        username: String,
        password: Secret<String>,
        role: Role,
    ) -> Result<(), BizErrorEnum> {
        let password_hash = auth::hash_password(password).await?;
        self.accounts.insert(
            username,
            StoredAccount {
                password_hash,
                role,
            },
        );
        Ok(())
    }
}

#[async_trait]
impl Authenticator for InMemoryAuthenticator {
    #[tracing::instrument(
        name = "Authenticate against in-memory accounts",
        skip(self, credentials),
        fields(username = %credentials.username, role = %credentials.role)
    )]
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, BizErrorEnum> {
        let (password_hash, role) = match self.accounts.get(&credentials.username) {
            Some(account) => (account.password_hash.clone(), Some(account.role)),
            None => (auth::fallback_password_hash(), None),
        };
        let password_matches =
            auth::verify_password(password_hash, credentials.password.clone()).await?;

        Ok(password_matches && role == Some(credentials.role))
    }
}
