//! Error types for devbook-server

use devbook_core::ValidationError;
use thiserror::Error;

use crate::auth::PasswordError;
use crate::db::StoreError;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything an account operation can fail with
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}
