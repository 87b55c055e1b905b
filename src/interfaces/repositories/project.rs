use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::project::{Project, ProjectInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    async fn find_by_client(&self, client_id: &Uuid) -> Result<Vec<Project>, AppError>;
    async fn find_by_freelancer(&self, freelancer_id: &Uuid) -> Result<Vec<Project>, AppError>;
    async fn find_all(&self) -> Result<Vec<Project>, AppError>;
    async fn create(&self, project: &ProjectInsert) -> Result<Project, AppError>;

    /// Conditional assignment: sets the freelancer only while the project is
    /// still unclaimed and in progress. `false` means the precondition no
    /// longer held at write time (claimed by someone else, or closed).
    async fn claim(&self, project_id: &Uuid, freelancer_id: &Uuid) -> Result<bool, AppError>;

    /// Conditional release: clears the freelancer only while it still equals
    /// the caller and the project is in progress.
    async fn release(&self, project_id: &Uuid, freelancer_id: &Uuid) -> Result<bool, AppError>;

    /// Conditional close: marks completed only from in-progress, for the
    /// owning client.
    async fn complete(&self, project_id: &Uuid, client_id: &Uuid) -> Result<bool, AppError>;

    async fn delete(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_client(&self, client_id: &Uuid) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE client_id = $1 ORDER BY created_at DESC",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn find_by_freelancer(&self, freelancer_id: &Uuid) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE freelancer_id = $1 ORDER BY created_at DESC",
        )
        .bind(freelancer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn find_all(&self) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            r#"INSERT INTO projects (
                title,
                description,
                category,
                client_id,
                deadline,
                thumbnail_url,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.category)
        .bind(project.client_id)
        .bind(project.deadline)
        .bind(&project.thumbnail_url)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn claim(&self, project_id: &Uuid, freelancer_id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"UPDATE projects
            SET freelancer_id = $2
            WHERE id = $1
              AND freelancer_id IS NULL
              AND status = 'in_progress'
            "#,
        )
        .bind(project_id)
        .bind(freelancer_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn release(&self, project_id: &Uuid, freelancer_id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"UPDATE projects
            SET freelancer_id = NULL
            WHERE id = $1
              AND freelancer_id = $2
              AND status = 'in_progress'
            "#,
        )
        .bind(project_id)
        .bind(freelancer_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn complete(&self, project_id: &Uuid, client_id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"UPDATE projects
            SET status = 'completed'
            WHERE id = $1
              AND client_id = $2
              AND status = 'in_progress'
            "#,
        )
        .bind(project_id)
        .bind(client_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
