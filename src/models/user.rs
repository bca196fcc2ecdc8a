use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{ERR_INVALID_ROLE, ERR_MISSING_USER_FIELDS};
use crate::error::AppError;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Privileged role: may create, edit and delete products
    #[serde(alias = "gerente")]
    Manager,
    #[serde(alias = "cliente")]
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" | "gerente" => Ok(Role::Manager),
            "customer" | "cliente" => Ok(Role::Customer),
            _ => Err(AppError::InvalidInput(ERR_INVALID_ROLE.to_string())),
        }
    }
}

/// User record as stored in the data file
///
/// Passwords are kept in plaintext; this is a demo shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(alias = "senha")]
    pub password: String,
    #[serde(alias = "nivel")]
    pub role: Role,
}

impl User {
    /// Case-insensitive email comparison
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// User model for API responses (never carries the password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: u64,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Validated signup data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    /// Presence-check the raw fields and parse the role
    pub fn from_parts(
        email: Option<&str>,
        password: Option<&str>,
        role: Option<&str>,
    ) -> Result<Self, AppError> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|s| !s.is_empty())
        }

        match (present(email), password.filter(|p| !p.is_empty()), present(role)) {
            (Some(email), Some(password), Some(role)) => Ok(Self {
                email: email.to_string(),
                password: password.to_string(),
                role: role.parse()?,
            }),
            _ => Err(AppError::InvalidInput(ERR_MISSING_USER_FIELDS.to_string())),
        }
    }

    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
            role: self.role,
        }
    }
}
