//! Account workflows
//!
//! Entity checks, password hashing and the store call, in that order. Nothing
//! reaches [`UserRepo`] unless the user passed `prepare`.

use devbook_core::{User, UserId, ValidationError};
use sqlx::SqlitePool;

use crate::auth::{hash_password, verify_password};
use crate::db::UserRepo;
use crate::error::Result;

/// Outcome of a password change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChange {
    Updated,
    WrongPassword,
    UnknownUser,
}

/// Validate, normalize and hash `user`, then insert it.
///
/// On success `user` holds the trimmed fields and the stored hash.
pub async fn register(pool: &SqlitePool, user: &mut User) -> Result<UserId> {
    user.prepare()?;
    user.password = hash_password(&user.password)?;

    let id = UserRepo::new(pool).create(user).await?;
    tracing::info!(user_id = id, nick = %user.nick, "user registered");
    Ok(id)
}

/// Validate and normalize a profile edit, then overwrite name, nick and email.
pub async fn edit_profile(pool: &SqlitePool, id: UserId, user: &mut User) -> Result<()> {
    user.prepare_profile()?;
    UserRepo::new(pool).update(id, user).await?;
    Ok(())
}

/// Replace the stored hash after checking `current` against it.
pub async fn change_password(
    pool: &SqlitePool,
    id: UserId,
    current: &str,
    new: &str,
) -> Result<PasswordChange> {
    if new.trim().is_empty() {
        return Err(ValidationError::Empty { field: "password" }.into());
    }

    let repo = UserRepo::new(pool);
    let Some(stored) = repo.find_password_opt(id).await? else {
        return Ok(PasswordChange::UnknownUser);
    };

    if !verify_password(current, &stored)? {
        tracing::warn!(user_id = id, "password change with wrong current password");
        return Ok(PasswordChange::WrongPassword);
    }

    repo.update_password(id, &hash_password(new)?).await?;
    Ok(PasswordChange::Updated)
}
