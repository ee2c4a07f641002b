use crate::error::BizErrorEnum;
use std::fmt::{Debug, Formatter};

/// Why a login attempt did not end on a dashboard.
///
/// `Display` is the text shown to the user, so `AuthFailure` and
/// `UnmappedRole` deliberately read the same and reveal nothing about the
/// credentials.
#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    Validation,

    #[error("Invalid credentials. Please check your username, password, and role.")]
    InvalidCredentials,

    #[error("Login failed. Please try again.")]
    AuthFailure(#[source] BizErrorEnum),

    #[error("Login failed. Please try again.")]
    UnmappedRole(String),
}

impl Debug for LoginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
