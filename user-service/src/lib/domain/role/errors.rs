use thiserror::Error;

/// Error for RoleId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for RoleName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleNameError {
    #[error("Role name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Role name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Role name can only contain letters and spaces")]
    InvalidCharacters,
}

/// Top-level error for all role-related operations
#[derive(Debug, Clone, Error)]
pub enum RoleError {
    #[error("Invalid role ID: {0}")]
    InvalidRoleId(#[from] RoleIdError),

    #[error("Invalid role name: {0}")]
    InvalidName(#[from] RoleNameError),

    #[error("Role not found: {0}")]
    NotFound(String),

    #[error("Role name already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
