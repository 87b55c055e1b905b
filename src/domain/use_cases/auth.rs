use validator::Validate;

use crate::entities::token::TokenGrant;
use crate::entities::user::{ForgotPassword, LoginUser, NewUser, NewUserResponse};
use crate::errors::AppError;
use crate::interfaces::repositories::user::UserRepository;
use crate::auth::password::{hash_password, verify_password};
use crate::repositories::token::TokenServiceRepository;

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub user_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: R, token_service: T) -> Self {
        AuthHandler {
            user_repo,
            token_service,
        }
    }

    /// Registers a new user after validation and password hashing.
    /// Email uniqueness is checked up front; the store's unique index is the
    /// backstop for concurrent signups with the same address.
    pub async fn signup(&self, request: NewUser) -> Result<NewUserResponse, AppError> {
        request.validate()?;

        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::field("email", "User already exists with this email"));
        }

        let hashed_password = hash_password(&request.password)?;
        let user_insert = request.prepare_for_insert(hashed_password);

        let user = self.user_repo.create(&user_insert).await?;

        tracing::info!(email = %user.email, "new user signed up");
        Ok(NewUserResponse {
            id: user.id,
            message: "Signup successful".to_string(),
        })
    }

    /// Logs in a user, returning a bearer token and its validity window.
    pub async fn login(&self, request: LoginUser) -> Result<TokenGrant, AppError> {
        request.validate()?;

        let user = self.user_repo.find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let is_password_valid = verify_password(&request.password, &user.password_hash)?;
        if !is_password_valid {
            return Err(AppError::Unauthorized("Incorrect password".to_string()));
        }

        let token = self.token_service.issue_jwt(&user.id)
            .map_err(|e| {
                tracing::warn!("failed to create JWT: {e}");
                AppError::from(e)
            })?;

        tracing::info!(email = %user.email, "user logged in");
        Ok(TokenGrant::new(token, self.token_service.expires_in_secs()))
    }

    /// Resets the credential for the account matching the email/username
    /// pair. A mismatch on either is reported as the same generic failure.
    pub async fn forgot_password(&self, request: ForgotPassword) -> Result<(), AppError> {
        request.validate()?;

        let user = self.user_repo.find_by_email(&request.email)
            .await?
            .filter(|u| u.username == request.username)
            .ok_or_else(|| AppError::BadRequest("Invalid credentials".to_string()))?;

        let hashed_password = hash_password(&request.new_password)?;
        self.user_repo.set_password(&user.id, &hashed_password).await?;

        tracing::info!(email = %user.email, "password reset");
        Ok(())
    }
}
