//! Shared types for the SportHub BFF
//!
//! Wire models for every upstream resource, the standardized response
//! envelope, and small utilities shared by the client and the server.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use response::{ApiResponse, Paginated};
pub use serde::{Deserialize, Serialize};
