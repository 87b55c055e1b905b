pub mod auth;
pub mod json_error;
pub mod projects;
pub mod users;
