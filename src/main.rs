use actix_cors::Cors;
use actix_web::{
    get, http::StatusCode, middleware::NormalizePath, web, App, HttpResponse, HttpServer, Responder,
};
use freelancehub_backend::{
    db::postgres::create_pool,
    graceful_shutdown::shutdown_signal,
    handlers::{
        auth::{forgot_password, login, signup},
        json_error::json_error,
        projects::{
            all_projects, claim_project, complete_project, delete_project, exit_project,
            my_projects, save_project,
        },
        users::{client_contact, freelancer_contact, me, update_profile, user_details},
    },
    middlewares::auth::AuthMiddleware,
    settings::AppConfig,
    AppState,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the FreelanceHub API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let app_state = web::Data::new(AppState::new(&config, pool));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting FreelanceHub API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let worker_count = config.worker_count;
    let cors_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        let cors = if cors_origins.iter().any(|o| o == "*") {
            Cors::permissive()
        } else {
            cors_origins.iter().fold(Cors::default(), |cors, origin| {
                cors.allowed_origin(origin)
            })
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600)
        };

        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            actix_web::error::InternalError::from_response(
                err,
                json_error(StatusCode::BAD_REQUEST, "Invalid request payload"),
            )
            .into()
        });

        App::new()
            .app_data(app_state.clone())
            .app_data(json_config)
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::trim())
            .wrap(AuthMiddleware)
            .wrap(cors)
            .service(home)
            .service(signup)
            .service(login)
            .service(forgot_password)
            .service(me)
            .service(update_profile)
            .service(user_details)
            .service(freelancer_contact)
            .service(client_contact)
            .service(my_projects)
            .service(save_project)
            .service(all_projects)
            .service(claim_project)
            .service(exit_project)
            .service(complete_project)
            .service(delete_project)
    })
    .workers(worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
