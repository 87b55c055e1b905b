use actix_web::{post, web, HttpResponse, Responder};

use crate::entities::user::{ForgotPassword, LoginUser, NewUser};
use crate::AppState;

#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    user: web::Json<NewUser>
) -> impl Responder {
    match state.auth_handler.signup(user.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => e.to_http_response(),
    }
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>
) -> impl Responder {
    match state.auth_handler.login(user.into_inner()).await {
        Ok(grant) => HttpResponse::Ok().json(grant),
        Err(e) => e.to_http_response(),
    }
}

#[post("/forgot-password")]
pub async fn forgot_password(
    state: web::Data<AppState>,
    request: web::Json<ForgotPassword>
) -> impl Responder {
    match state.auth_handler.forgot_password(request.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Password reset successful"
        })),
        Err(e) => e.to_http_response(),
    }
}
