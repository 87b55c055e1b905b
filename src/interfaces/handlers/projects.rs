use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::project::{ClaimProject, NewProject};
use crate::errors::AppError;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

/// GET /projects — every listed project, public.
#[get("/projects")]
pub async fn all_projects(state: web::Data<AppState>) -> impl Responder {
    match state.project_handler.list_all().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => e.to_http_response(),
    }
}

/// GET /user/projects — projects the actor owns or works on.
#[get("/user/projects")]
pub async fn my_projects(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let actor = claims.0.actor_id()?;

    match state.project_handler.list_for_user(&actor).await {
        Ok(projects) => Ok(HttpResponse::Ok().json(projects)),
        Err(e) => Ok(e.to_http_response()),
    }
}

/// POST /save_projects — post a new project as client.
#[post("/save_projects")]
pub async fn save_project(
    state: web::Data<AppState>,
    claims: AuthClaims,
    body: web::Json<NewProject>,
) -> Result<HttpResponse, AppError> {
    let actor = claims.0.actor_id()?;

    match state.project_handler.create(&actor, body.into_inner()).await {
        Ok(project) => Ok(HttpResponse::Created().json(serde_json::json!({
            "message": "Project saved successfully",
            "project": project,
        }))),
        Err(e) => Ok(e.to_http_response()),
    }
}

/// POST /add_myProject — claim an unclaimed project as freelancer.
#[post("/add_myProject")]
pub async fn claim_project(
    state: web::Data<AppState>,
    claims: AuthClaims,
    body: web::Json<ClaimProject>,
) -> Result<HttpResponse, AppError> {
    let actor = claims.0.actor_id()?;

    match state.project_handler.claim(&actor, &body.project_id).await {
        Ok(project) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Project updated successfully",
            "project": project,
        }))),
        Err(e) => Ok(e.to_http_response()),
    }
}

/// PATCH /user/projects/{project_id}/exit — leave a claimed project.
#[patch("/user/projects/{project_id}/exit")]
pub async fn exit_project(
    state: web::Data<AppState>,
    claims: AuthClaims,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let actor = claims.0.actor_id()?;

    match state.project_handler.exit(&actor, &path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Exited from project successfully"
        }))),
        Err(e) => Ok(e.to_http_response()),
    }
}

/// PATCH /user/projects/{project_id} — mark a project completed.
#[patch("/user/projects/{project_id}")]
pub async fn complete_project(
    state: web::Data<AppState>,
    claims: AuthClaims,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let actor = claims.0.actor_id()?;

    match state.project_handler.complete(&actor, &path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Project status updated to Completed"
        }))),
        Err(e) => Ok(e.to_http_response()),
    }
}

/// DELETE /user/projects/{project_id} — remove an owned project.
#[delete("/user/projects/{project_id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    claims: AuthClaims,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let actor = claims.0.actor_id()?;

    match state.project_handler.delete(&actor, &path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Project deleted successfully"
        }))),
        Err(e) => Ok(e.to_http_response()),
    }
}
