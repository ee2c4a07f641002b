use crate::auth::Credentials;
use crate::error::BizErrorEnum;
use async_trait::async_trait;
use std::sync::Arc;

/// Checks a username/password/role triple against an account store.
///
/// - `Ok(true)`: the account exists, the password matches and it holds the role
/// - `Ok(false)`: any of the above does not hold
/// - `Err(_)`: the store could not answer (connection, corrupt hash, ...)
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, BizErrorEnum>;
}

#[async_trait]
impl<T> Authenticator for Arc<T>
where
    T: Authenticator + ?Sized,
{
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, BizErrorEnum> {
        (**self).authenticate(credentials).await
    }
}
