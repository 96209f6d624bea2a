//! SportHub BFF - backend-for-frontend for the booking platform
//!
//! A thin HTTP layer between the web frontend and the upstream system of
//! record. It reshapes nothing it does not have to: requests are
//! validated, forwarded through the injected upstream client, and wrapped
//! in one response envelope. The only computed views are the availability
//! normalization, the occupancy statistics and the complex-detail join,
//! all provided by `sporthub-client`.
//!
//! # Module structure
//!
//! ```text
//! bff-server/src/
//! ├── core/      # config, state, server
//! ├── common/    # error mapping, logger
//! └── api/       # HTTP routes and handlers, one module per resource
//! ```

pub mod api;
pub mod common;
pub mod core;

// Re-export common types
pub use common::{AppError, AppResult};
pub use core::{Config, Server, ServerState};

/// Load `.env` before anything reads the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();
}

pub fn print_banner() {
    println!(
        r#"
   _____                   __  __  __      __
  / ___/____  ____  _____/ /_/ / / /_  __/ /_
  \__ \/ __ \/ __ \/ ___/ __/ /_/ / / / / __ \
 ___/ / /_/ / /_/ / /  / /_/ __  / /_/ / /_/ /
/____/ .___/\____/_/   \__/_/ /_/\__,_/_.___/
    /_/                                 BFF
    "#
    );
}
