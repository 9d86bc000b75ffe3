/*
    * Cross-cutting helpers: typed errors with their terminal handler,
    * and the JSON envelope errors are rendered into.
*/

pub mod error_handler;
pub mod response_handler;

pub use error_handler::AppError;
