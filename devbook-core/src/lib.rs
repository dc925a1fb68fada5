//! devbook-core: user model and process configuration
//!
//! Store-agnostic pieces shared by the server and the CLI.

pub mod config;
pub mod user;
pub mod validation;

pub use config::Config;
pub use user::{User, UserId};
pub use validation::ValidationError;
