//! Auth error types

use thiserror::Error;

/// Errors from the account directory and token table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately does not say which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailTaken,

    /// Signup input rejected
    #[error("{0}")]
    InvalidInput(String),

    /// Missing, unknown or expired bearer token
    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Errors from a persisted client session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid or expired token");
        assert_eq!(
            AuthError::InvalidInput("Password must not be empty".into()).to_string(),
            "Password must not be empty"
        );
    }
}
