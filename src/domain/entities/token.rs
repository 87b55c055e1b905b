use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::errors::AuthError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    /// The actor identity carried by the token.
    pub fn actor_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::InvalidUserId)
    }
}

/// Issued credential plus its validity window, as returned by login.
#[derive(Debug, Serialize)]
pub struct TokenGrant {
    pub message: String,
    pub token: String,
    pub expires_in: i64,
}

impl TokenGrant {
    pub fn new(token: String, expires_in: i64) -> Self {
        TokenGrant {
            message: "Login successful".to_string(),
            token,
            expires_in,
        }
    }
}
