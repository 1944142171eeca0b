use std::fmt;

use uuid::Uuid;

use crate::role::errors::RoleIdError;
use crate::role::errors::RoleNameError;

/// Role entity.
///
/// A named permission group. Every user references exactly one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub name: RoleName,
}

/// Role unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleId(pub Uuid);

impl RoleId {
    /// Generate a new random role ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a role ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, RoleIdError> {
        Uuid::parse_str(s)
            .map(RoleId)
            .map_err(|e| RoleIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role name value type
///
/// 2-30 characters, letters (accented included) and spaces only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleName(String);

impl RoleName {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 30;

    /// Create a new valid role name.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 2 characters
    /// * `TooLong` - More than 30 characters
    /// * `InvalidCharacters` - Contains anything but letters and spaces
    pub fn new(name: String) -> Result<Self, RoleNameError> {
        let length = name.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(RoleNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(RoleNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
            return Err(RoleNameError::InvalidCharacters);
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new role
#[derive(Debug)]
pub struct CreateRoleCommand {
    pub name: RoleName,
}

/// Command to rename an existing role
#[derive(Debug)]
pub struct UpdateRoleCommand {
    pub name: RoleName,
}
