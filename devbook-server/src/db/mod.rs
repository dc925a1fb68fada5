//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Pooled connections, no `Arc<Mutex<Connection>>`
//! - Every statement binds its parameters, none are formatted into SQL
//! - Rely on DB constraints (UNIQUE, PRIMARY KEY, FOREIGN KEY), no check-then-insert
//! - One statement per operation, no multi-write transactions

pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool, migrate};
pub use repos::*;
