use crate::error::LoginError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The closed set of account categories.
///
/// The wire names (`super-admin`, `doctor`, ...) are what the role selector
/// submits, what the configuration files use and what ends up in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    Doctor,
    Receptionist,
    Patient,
}

impl Role {
    /// Every role, in the order the selector lists them.
    pub const ALL: [Role; 4] = [
        Role::SuperAdmin,
        Role::Doctor,
        Role::Receptionist,
        Role::Patient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
            Role::Patient => "patient",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Doctor => "Doctor",
            Role::Receptionist => "Receptionist",
            Role::Patient => "Patient",
        }
    }

    /// Where an authenticated user of this role lands after logging in.
    ///
    /// Keep this match exhaustive: adding a role must not compile until it
    /// has a dashboard.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "/dashboard/super-admin",
            Role::Doctor => "/dashboard/doctor",
            Role::Receptionist => "/dashboard/receptionist",
            Role::Patient => "/dashboard/patient",
        }
    }

    /// Parse a selector value.
    ///
    /// Matching is exact: the selector only ever submits the wire names.
    pub fn parse(value: &str) -> Result<Self, LoginError> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| LoginError::UnmappedRole(value.to_string()))
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
