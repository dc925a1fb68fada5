//! User account model
//!
//! A `User` is built in memory (usually deserialized from a request body),
//! checked and normalized by [`User::prepare`], then handed to the store.
//! `User::default()` is the zero value: id `0`, empty strings, no timestamp.
//! Lookups that find nothing return it instead of an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Store-assigned numeric user identifier.
pub type UserId = i64;

/// Registered account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "is_unset")]
    pub id: UserId,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nick: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    /// Opaque credential; read from input, never written to output.
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn is_unset(id: &UserId) -> bool {
    *id == 0
}

/// Which fields a payload is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Registration,
    ProfileEdit,
}

impl User {
    /// Validate then normalize a user about to be registered.
    ///
    /// Checks name, nick, email and password in that order and returns the
    /// first missing one. Nothing is trimmed unless every check passes; the
    /// password is never trimmed.
    pub fn prepare(&mut self) -> Result<(), ValidationError> {
        self.validate(Stage::Registration)?;
        self.format();
        Ok(())
    }

    /// Same as [`User::prepare`] for a profile edit, where the password is
    /// not part of the payload.
    pub fn prepare_profile(&mut self) -> Result<(), ValidationError> {
        self.validate(Stage::ProfileEdit)?;
        self.format();
        Ok(())
    }

    /// True when this is the zero value returned for "not found".
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }

    fn validate(&self, stage: Stage) -> Result<(), ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::Empty { field: "name" });
        }
        if is_blank(&self.nick) {
            return Err(ValidationError::Empty { field: "nick" });
        }
        if is_blank(&self.email) {
            return Err(ValidationError::Empty { field: "email" });
        }
        if stage == Stage::Registration && is_blank(&self.password) {
            return Err(ValidationError::Empty { field: "password" });
        }
        Ok(())
    }

    fn format(&mut self) {
        self.name = self.name.trim().to_owned();
        self.nick = self.nick.trim().to_owned();
        self.email = self.email.trim().to_owned();
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
