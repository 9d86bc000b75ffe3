// * Process-level plumbing: logging setup, listener binding and the server itself.

pub mod listener;
pub mod logging;
pub mod server;
