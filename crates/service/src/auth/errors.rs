use thiserror::Error;

/// Failures while reading caller identity
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unknown capability: {0}")]
    UnknownCapability(String),
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("token error: {0}")]
    TokenError(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::UnknownCapability(_) => 1001,
            AuthError::Expired => 1004,
            AuthError::InvalidToken(_) => 1005,
            AuthError::TokenError(_) => 1102,
        }
    }
}
