use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Marketplace project. `freelancer_id` doubles as the assignment state:
/// `None` while unclaimed, `Some` once a freelancer holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub client_id: Uuid,
    pub freelancer_id: Option<Uuid>,
    pub status: ProjectStatus,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
}

impl Project {
    /// Completed is terminal: no assignment or status transition may follow.
    pub fn is_terminal(&self) -> bool {
        self.status == ProjectStatus::Completed
    }

    pub fn is_claimed(&self) -> bool {
        self.freelancer_id.is_some()
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub deadline: DateTime<Utc>,

    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub category: String,
    pub client_id: Uuid,
    pub deadline: DateTime<Utc>,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewProject {
    pub fn prepare_for_insert(&self, client_id: Uuid) -> ProjectInsert {
        ProjectInsert {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            client_id,
            deadline: self.deadline,
            thumbnail_url: self.thumbnail.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Claim request body. The freelancer is always the authenticated actor.
#[derive(Debug, Deserialize)]
pub struct ClaimProject {
    pub project_id: Uuid,
}
