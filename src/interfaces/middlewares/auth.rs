use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{errors::AuthError, AppState};

/// Bearer-token gate in front of every mutating route.
///
/// A request with no token at all is turned away with 401; a request whose
/// token fails signature or expiry checks gets 403. Valid claims are stashed
/// in the request extensions for the `AuthClaims` extractor.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let path = req.path();
            let method = req.method().as_str();

            if is_public_route(path, method) {
                return service.call(req).await.map(ServiceResponse::map_into_boxed_body);
            }

            let state = req.app_data::<web::Data<AppState>>()
                .ok_or_else(|| {
                    tracing::error!("AppState missing in middleware");
                    AuthError::TokenCreation
                })?;

            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    tracing::warn!("missing or malformed Authorization header");
                    return Ok(custom_error_response(req, HttpResponse::Unauthorized().json(
                        serde_json::json!({"message": "Unauthorized"}),
                    )));
                }
            };

            let claims = match state.auth_handler.token_service.decode_jwt(&token) {
                Ok(decoded) => decoded.claims,
                Err(e) => {
                    tracing::warn!("rejected bearer token: {e}");
                    return Ok(custom_error_response(req, HttpResponse::Forbidden().json(
                        serde_json::json!({"message": "Forbidden"}),
                    )));
                }
            };

            req.extensions_mut().insert(claims);
            service.call(req).await.map(ServiceResponse::map_into_boxed_body)
        })
    }
}

fn is_public_route(path: &str, method: &str) -> bool {
    if method == "OPTIONS" {
        return true;
    }

    if method == "GET"
        && (path.starts_with("/user-details/")
            || path.starts_with("/freelancer/")
            || path.starts_with("/client/"))
    {
        return true;
    }

    matches!(
        (path, method),
        ("/", "GET") |
        ("/signup", "POST") |
        ("/login", "POST") |
        ("/forgot-password", "POST") |
        ("/projects", "GET")
    )
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn custom_error_response(req: ServiceRequest, res: HttpResponse) -> ServiceResponse<BoxBody> {
    req.into_response(res)
}

#[cfg(test)]
mod tests {
    use super::is_public_route;

    #[test]
    fn auth_free_routes() {
        assert!(is_public_route("/", "GET"));
        assert!(is_public_route("/signup", "POST"));
        assert!(is_public_route("/login", "POST"));
        assert!(is_public_route("/forgot-password", "POST"));
        assert!(is_public_route("/projects", "GET"));
        assert!(is_public_route("/user-details/abc", "GET"));
        assert!(is_public_route("/freelancer/abc", "GET"));
        assert!(is_public_route("/client/abc", "GET"));
    }

    #[test]
    fn protected_routes() {
        assert!(!is_public_route("/user", "GET"));
        assert!(!is_public_route("/user", "PATCH"));
        assert!(!is_public_route("/user/projects", "GET"));
        assert!(!is_public_route("/save_projects", "POST"));
        assert!(!is_public_route("/add_myProject", "POST"));
        assert!(!is_public_route("/user/projects/abc/exit", "PATCH"));
        assert!(!is_public_route("/user/projects/abc", "DELETE"));
        assert!(!is_public_route("/user/projects/abc", "PATCH"));
    }
}
