//! devbook-server: user/follow store and HTTP API
//!
//! `db` owns the SQLite pool, schema and [`UserRepo`]; `http` exposes it over
//! axum. `accounts` runs entity checks and password hashing in front of the
//! store and reports failures as [`Error`].

pub mod accounts;
pub mod auth;
pub mod db;
pub mod error;
pub mod http;

pub use db::{create_memory_pool, create_pool, migrate, StoreError, UserRepo};
pub use error::{Error, Result};
pub use http::{build_router, run_server, ServerConfig, ServerError};
