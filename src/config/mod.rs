// * Configuration: environment variables and the application state built from them.

pub mod environment;
pub mod state;

pub use environment::EnvironmentVariables;
pub use state::AppState;
