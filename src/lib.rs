// Library root for the visitor ticketing gateway and frontend shell

pub mod api;
pub mod config;
pub mod core;
pub mod shell;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::{create_app, create_app_with};
pub use crate::utils::error_handler::AppError;
