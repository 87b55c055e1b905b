use uuid::Uuid;
use validator::Validate;

use crate::entities::project::{NewProject, Project};
use crate::errors::AppError;
use crate::interfaces::repositories::project::ProjectRepository;

/// Project lifecycle controller.
///
/// A project is in one of three states, encoded by (status, freelancer_id):
/// Unclaimed (in progress, no freelancer), Claimed (in progress, freelancer
/// set) and Completed, which is terminal. Claim and exit go through the
/// store's conditional updates, so a transition that raced with another
/// writer comes back as `false` and is reported as a conflict rather than
/// silently overwriting the earlier write.
pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// A new project starts unclaimed and in progress, owned by the actor.
    pub async fn create(&self, actor: &Uuid, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert(*actor);
        let project = self.project_repo.create(&insert).await?;

        tracing::info!(project_id = %project.id, client_id = %actor, "project created");
        Ok(project)
    }

    pub async fn list_all(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.find_all().await
    }

    /// Every project the actor participates in: owned as client, then held
    /// as freelancer.
    pub async fn list_for_user(&self, actor: &Uuid) -> Result<Vec<Project>, AppError> {
        let mut projects = self.project_repo.find_by_client(actor).await?;
        projects.extend(self.project_repo.find_by_freelancer(actor).await?);
        Ok(projects)
    }

    /// Unclaimed -> Claimed. The freelancer is always the actor; a client
    /// can never claim their own project, and a closed project stays closed.
    pub async fn claim(&self, actor: &Uuid, project_id: &Uuid) -> Result<Project, AppError> {
        let project = self.fetch(project_id).await?;

        if project.client_id == *actor {
            return Err(AppError::Forbidden("Cannot add your own project".to_string()));
        }
        if project.is_terminal() {
            return Err(AppError::Conflict("Project is already completed".to_string()));
        }
        if project.is_claimed() {
            return Err(AppError::Conflict("Project is already taken by another freelancer".to_string()));
        }

        if !self.project_repo.claim(project_id, actor).await? {
            // lost the race between the read above and the write
            return Err(AppError::Conflict("Project is already taken by another freelancer".to_string()));
        }

        tracing::info!(project_id = %project_id, freelancer_id = %actor, "project claimed");
        self.fetch(project_id).await
    }

    /// Claimed -> Unclaimed, by the current freelancer only. Exiting an
    /// unclaimed project is a forbidden no-op, never a silent success.
    pub async fn exit(&self, actor: &Uuid, project_id: &Uuid) -> Result<(), AppError> {
        let project = self.fetch(project_id).await?;

        if project.client_id == *actor {
            return Err(AppError::Forbidden(
                "You cannot exit from your own project. Use the delete option to remove the project.".to_string(),
            ));
        }
        if project.is_terminal() {
            return Err(AppError::Conflict("Project is already completed".to_string()));
        }
        if project.freelancer_id != Some(*actor) {
            return Err(AppError::Forbidden("You are not a freelancer in this project".to_string()));
        }

        if !self.project_repo.release(project_id, actor).await? {
            return Err(AppError::Conflict("Project assignment changed, please retry".to_string()));
        }

        tracing::info!(project_id = %project_id, freelancer_id = %actor, "freelancer exited project");
        Ok(())
    }

    /// Any non-terminal state -> Completed, by the owning client only.
    pub async fn complete(&self, actor: &Uuid, project_id: &Uuid) -> Result<(), AppError> {
        let project = self.fetch(project_id).await?;

        if project.client_id != *actor {
            return Err(AppError::Forbidden("Unauthorized to update project".to_string()));
        }
        if project.is_terminal() {
            return Err(AppError::Conflict("Project is already completed".to_string()));
        }

        if !self.project_repo.complete(project_id, actor).await? {
            return Err(AppError::Conflict("Project is already completed".to_string()));
        }

        tracing::info!(project_id = %project_id, client_id = %actor, "project completed");
        Ok(())
    }

    /// Removal by the owning client, allowed in any state.
    pub async fn delete(&self, actor: &Uuid, project_id: &Uuid) -> Result<(), AppError> {
        let project = self.fetch(project_id).await?;

        if project.client_id != *actor {
            return Err(AppError::Forbidden("Unauthorized to delete project".to_string()));
        }

        if !self.project_repo.delete(project_id).await? {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        tracing::info!(project_id = %project_id, client_id = %actor, "project deleted");
        Ok(())
    }

    async fn fetch(&self, project_id: &Uuid) -> Result<Project, AppError> {
        self.project_repo.find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }
}
