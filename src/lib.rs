mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares};
pub use infrastructure::{auth, db};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{SqlxProjectRepo, SqlxUserRepo};
use use_cases::{auth::AuthHandler, projects::ProjectHandler, users::UserHandler};

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub user_handler: AppUserHandler,
    pub project_handler: AppProjectHandler,
}

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;
pub type AppUserHandler = UserHandler<SqlxUserRepo>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);

        AppState {
            auth_handler: AuthHandler::new(SqlxUserRepo::new(pool.clone()), jwt_service),
            user_handler: UserHandler::new(SqlxUserRepo::new(pool.clone())),
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool)),
        }
    }
}
