// Composition root for the users service.
//
// Responsibilities
// - Read config from environment.
// - Hold the shared application state handed to every handler.
// - Expose the HTTP router; the binary in main.rs binds and serves it.

pub mod config;
pub mod http;
pub mod state;
