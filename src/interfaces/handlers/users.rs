use actix_web::{get, patch, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::user::UpdateUser;
use crate::errors::AppError;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

/// GET /user — full profile of the authenticated user.
#[get("/user")]
pub async fn me(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let actor = claims.0.actor_id()?;

    match state.user_handler.profile(&actor).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(profile)),
        Err(e) => Ok(e.to_http_response()),
    }
}

/// PATCH /user — merge-patch profile update for the authenticated user.
#[patch("/user")]
pub async fn update_profile(
    state: web::Data<AppState>,
    claims: AuthClaims,
    request: web::Json<UpdateUser>,
) -> Result<HttpResponse, AppError> {
    let actor = claims.0.actor_id()?;

    match state.user_handler.update_profile(&actor, request.into_inner()).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(profile)),
        Err(e) => Ok(e.to_http_response()),
    }
}

/// GET /user-details/{id} — reduced third-party projection.
#[get("/user-details/{id}")]
pub async fn user_details(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match state.user_handler.public_details(&path.into_inner()).await {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(e) => e.to_http_response(),
    }
}

/// GET /freelancer/{id} — contact email for a freelancer.
#[get("/freelancer/{id}")]
pub async fn freelancer_contact(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match state.user_handler.contact(&path.into_inner()).await {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(e) => e.to_http_response(),
    }
}

/// GET /client/{id} — contact email for a client.
#[get("/client/{id}")]
pub async fn client_contact(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match state.user_handler.contact(&path.into_inner()).await {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(e) => e.to_http_response(),
    }
}
