use crate::domain::{LoginForm, Role};
use crate::error::LoginError;
use secrecy::{ExposeSecret, Secret};

/// What the authenticator is asked to check.
///
/// Built once per submission and dropped with it.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
    pub role: Role,
}

impl TryFrom<&LoginForm> for Credentials {
    type Error = LoginError;

    /// Every field must be non-empty before the role is even looked at;
    /// emptiness is literal, whitespace counts as input.
    fn try_from(form: &LoginForm) -> Result<Self, Self::Error> {
        if form.username.is_empty()
            || form.password.expose_secret().is_empty()
            || form.role.is_empty()
        {
            return Err(LoginError::Validation);
        }
        let role = Role::parse(&form.role)?;

        Ok(Self {
            username: form.username.clone(),
            password: Secret::new(form.password.expose_secret().clone()),
            role,
        })
    }
}
