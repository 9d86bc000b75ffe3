// Application state shared with handlers and middleware

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;

/// Cheap-to-clone state handed to the router. Built by the caller so every
/// server (and every test) owns an isolated instance.
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }

    /// Loads configuration from the environment and wraps it in a new state
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(EnvironmentVariables::load()?))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EnvironmentVariables::default())
    }
}
