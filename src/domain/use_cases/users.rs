use uuid::Uuid;
use validator::Validate;

use crate::entities::user::{
    ContactResponse, ProfileResponse, UpdateUser, UserChanges, UserDetailsResponse,
};
use crate::errors::AppError;
use crate::interfaces::repositories::user::UserRepository;
use crate::auth::password::hash_password;

/// Profile reads and updates. Every read goes out through a projection
/// matched to the caller: the owner sees the full profile, third parties a
/// reduced one, counterparty lookups only the email.
pub struct UserHandler<R>
where
    R: UserRepository,
{
    pub user_repo: R,
}

impl<R> UserHandler<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        UserHandler { user_repo }
    }

    pub async fn profile(&self, actor: &Uuid) -> Result<ProfileResponse, AppError> {
        let user = self.user_repo.find_by_id(actor)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ProfileResponse::from(user))
    }

    pub async fn public_details(&self, user_id: &Uuid) -> Result<UserDetailsResponse, AppError> {
        let user = self.user_repo.find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserDetailsResponse::from(user))
    }

    pub async fn contact(&self, user_id: &Uuid) -> Result<ContactResponse, AppError> {
        let user = self.user_repo.find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ContactResponse::from(user))
    }

    /// Merge-patch profile update. Username and college must be present on
    /// every call; omitted optional fields keep their stored value. A new
    /// password is re-validated against the account rules and re-hashed.
    pub async fn update_profile(
        &self,
        actor: &Uuid,
        request: UpdateUser,
    ) -> Result<ProfileResponse, AppError> {
        request.validate()?;

        let password_hash = match &request.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let changes = UserChanges {
            username: request.username,
            college: request.college,
            password_hash,
            phone_no: request.phone_no,
            bio: request.bio,
            address: request.address,
            image_url: request.image,
        };

        let user = self.user_repo.update(actor, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ProfileResponse::from(user))
    }
}
