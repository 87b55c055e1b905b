use jsonwebtoken::TokenData;
use uuid::Uuid;
use crate::{entities::token::Claims, errors::AuthError};

pub trait TokenServiceRepository: Send + Sync {
    /// Issues a signed, time-bounded credential for the user
    fn issue_jwt(&self, user_id: &Uuid) -> Result<String, AuthError>;

    /// Verifies signature and expiry, returning the claims
    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;

    /// Validity window of freshly issued tokens, in seconds
    fn expires_in_secs(&self) -> i64;
}
