use async_trait::async_trait;
use uuid::Uuid;
use std::borrow::Cow;

use crate::{
    entities::user::{User, UserChanges, UserInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxUserRepo,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
    async fn create(&self, user: &UserInsert) -> Result<User, AppError>;
    /// Merge-patch update. `None` fields in `changes` keep their stored
    /// value; returns the updated row, or `None` for an unknown id.
    async fn update(&self, id: &Uuid, changes: &UserChanges) -> Result<Option<User>, AppError>;
    async fn set_password(&self, id: &Uuid, password_hash: &str) -> Result<bool, AppError>;
}

impl SqlxUserRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxUserRepo { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, user: &UserInsert) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (
                username,
                email,
                password_hash,
                college,
                phone_no,
                bio,
                address,
                image_url,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.college)
        .bind(&user.phone_no)
        .bind(&user.bio)
        .bind(&user.address)
        .bind(&user.image_url)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            match e {
                sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                    AppError::Conflict("User already exists with this email".to_string())
                }
                _ => AppError::from(e),
            }
        })
    }

    async fn update(&self, id: &Uuid, changes: &UserChanges) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users SET
                username = $2,
                college = $3,
                password_hash = COALESCE($4, password_hash),
                phone_no = COALESCE($5, phone_no),
                bio = COALESCE($6, bio),
                address = COALESCE($7, address),
                image_url = COALESCE($8, image_url)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.username)
        .bind(&changes.college)
        .bind(&changes.password_hash)
        .bind(&changes.phone_no)
        .bind(&changes.bio)
        .bind(&changes.address)
        .bind(&changes.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn set_password(&self, id: &Uuid, password_hash: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
