use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};
use uuid::Uuid;

use crate::entities::token::Claims;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

/// Stateless token service. Keys are derived once from the injected config;
/// expiry is the only invalidation path, there is no refresh or revocation.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    pub fn issue_jwt(&self, user_id: &Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.expiration).timestamp() as usize;

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp() as usize,
            exp,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|_| AuthError::TokenCreation)
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }

    pub fn expires_in_secs(&self) -> i64 {
        self.expiration.num_seconds()
    }
}

impl TokenServiceRepository for JwtService {
    fn issue_jwt(&self, user_id: &Uuid) -> Result<String, AuthError> {
        self.issue_jwt(user_id)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_jwt(token)
    }

    fn expires_in_secs(&self) -> i64 {
        self.expires_in_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{AppConfig, AppEnvironment};

    fn test_config(expiration_minutes: i64) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "FreelanceHub Test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            worker_count: 1,
            database_url: "postgres://localhost/unused".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".to_string(),
            jwt_expiration_minutes: expiration_minutes,
        }
    }

    #[test]
    fn issue_and_decode_round_trip() {
        let service = JwtService::new(&test_config(60));
        let user_id = Uuid::new_v4();

        let token = service.issue_jwt(&user_id).unwrap();
        let decoded = service.decode_jwt(&token).unwrap();

        assert_eq!(decoded.claims.actor_id().unwrap(), user_id);
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 3600);
    }

    #[test]
    fn one_hour_grant_advertises_3600_seconds() {
        let service = JwtService::new(&test_config(60));
        assert_eq!(service.expires_in_secs(), 3600);
    }

    #[test]
    fn rejects_expired_token() {
        // exp two minutes in the past, beyond the decoder's default leeway
        let service = JwtService::new(&test_config(-2));
        let token = service.issue_jwt(&Uuid::new_v4()).unwrap();

        assert!(matches!(service.decode_jwt(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn rejects_tampered_token() {
        let service = JwtService::new(&test_config(60));
        let token = service.issue_jwt(&Uuid::new_v4()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(matches!(service.decode_jwt(&tampered), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn rejects_token_signed_with_other_key() {
        let issuer = JwtService::new(&test_config(60));
        let mut other_config = test_config(60);
        other_config.jwt_secret =
            "another_secret_that_is_also_long_enough_0987654321".to_string();
        let verifier = JwtService::new(&other_config);

        let token = issuer.issue_jwt(&Uuid::new_v4()).unwrap();

        assert!(matches!(verifier.decode_jwt(&token), Err(AuthError::InvalidToken)));
    }
}
