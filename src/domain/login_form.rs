use crate::constant::DEFAULT_ROLE;
use crate::request::LoginData;
use secrecy::Secret;

/// The transient state behind the login form.
///
/// `role` keeps the raw selector value; turning it into a [`crate::domain::Role`]
/// happens at submit time so a value outside the selector can be reported.
#[derive(Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: Secret<String>,
    pub role: String,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: Secret::new(String::new()),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

impl From<LoginData> for LoginForm {
    fn from(value: LoginData) -> Self {
        Self {
            username: value.username,
            password: value.password,
            role: value.role,
        }
    }
}
