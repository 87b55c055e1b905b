use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;
use uuid::Uuid;

use crate::domain::password::validate_password_format;

/// Full user row. Never serialized directly: every read goes through one of
/// the response projections below, so the credential hash stays server-side.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub college: String,
    pub phone_no: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserInsert {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub college: String,
    pub phone_no: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_password_format"))]
    pub password: String,

    #[validate(length(min = 1, message = "College is required"))]
    pub college: String,

    pub phone_no: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
}

impl NewUser {
    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        UserInsert {
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash,
            college: self.college.clone(),
            phone_no: self.phone_no.clone(),
            bio: self.bio.clone(),
            address: self.address.clone(),
            image_url: self.image.clone(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Reset request: identity is proven by the email/username pair matching an
/// existing record. No mail loop in this revision.
#[derive(Debug, Deserialize, Validate)]
pub struct ForgotPassword {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(custom(function = "validate_password_format"))]
    pub new_password: String,
}

/// Profile update. Username and college must be present on every call; the
/// optional fields are merge-patched, an omitted field keeps its stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "College is required"))]
    pub college: String,

    #[validate(custom(function = "validate_password_format"))]
    pub password: Option<String>,

    pub phone_no: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
}

/// Merge-patch record handed to the store. `None` means "leave untouched".
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub username: String,
    pub college: String,
    pub password_hash: Option<String>,
    pub phone_no: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewUserResponse {
    pub id: Uuid,
    pub message: String,
}

/// Owner view of the profile.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub college: String,
    pub phone_no: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        ProfileResponse {
            username: user.username,
            email: user.email,
            college: user.college,
            phone_no: user.phone_no,
            bio: user.bio,
            address: user.address,
            image: user.image_url,
            created_at: user.created_at,
        }
    }
}

/// Third-party view: no address, no college, no timestamps.
#[derive(Debug, Serialize)]
pub struct UserDetailsResponse {
    pub username: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
}

impl From<User> for UserDetailsResponse {
    fn from(user: User) -> Self {
        UserDetailsResponse {
            username: user.username,
            email: user.email,
            phone_no: user.phone_no,
            profile_image: user.image_url,
            bio: user.bio,
        }
    }
}

/// Narrowest projection, served for counterparty lookups.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub email: String,
}

impl From<User> for ContactResponse {
    fn from(user: User) -> Self {
        ContactResponse { email: user.email }
    }
}
