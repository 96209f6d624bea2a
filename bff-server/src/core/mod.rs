//! Core module - server configuration, state and lifecycle
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared per-request state (the upstream client)
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
