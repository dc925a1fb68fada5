//! Credential handling
//!
//! The store keeps whatever string it is given in `users.password`; the HTTP
//! layer hashes before writing and verifies on login.

pub mod password;

pub use password::{hash_password, verify_password, PasswordError};
