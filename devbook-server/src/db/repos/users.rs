//! User repository
//!
//! Users and the follower relationship between them:
//! - create/update/delete: one bound statement each
//! - lookups: absence returns the zero `User` (or an empty string), never an error
//! - follow: INSERT OR IGNORE on the (user_id, follower_id) primary key (idempotent)
//! - followers/following: one JOIN each (no N+1)

use chrono::{DateTime, Utc};
use devbook_core::{User, UserId};
use sqlx::{FromRow, SqlitePool};

use super::StoreError;

/// Public projection of a user row (everything but the password)
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    nick: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            nick: row.nick,
            email: row.email,
            password: String::new(),
            created_at: Some(row.created_at),
        }
    }
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return the identifier the store assigned.
    ///
    /// Expects a prepared user; a duplicate nick or email surfaces as a
    /// UNIQUE violation.
    pub async fn create(&self, user: &User) -> Result<UserId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO users (name, nick, email, password) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.name)
        .bind(&user.nick)
        .bind(&user.email)
        .bind(&user.password)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(user_id = id, nick = %user.nick, "user created");
        Ok(id)
    }

    /// Users whose name or nick contains `term`.
    ///
    /// Case sensitivity follows the store's LIKE (ASCII case-insensitive in
    /// SQLite). The password is never loaded.
    pub async fn find(&self, term: &str) -> Result<Vec<User>, StoreError> {
        let pattern = format!("%{}%", term);

        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, nick, email, created_at
            FROM users
            WHERE name LIKE ? OR nick LIKE ?
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(term, matches = rows.len(), "user search");
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Single user by id, or the zero value when there is none.
    pub async fn find_by_id(&self, id: UserId) -> Result<User, StoreError> {
        Ok(self.find_by_id_opt(id).await?.unwrap_or_default())
    }

    /// Single user by id, `None` when there is none.
    pub async fn find_by_id_opt(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, name, nick, email, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    /// Overwrite name, email and nick. Password and id are left alone.
    pub async fn update(&self, id: UserId, user: &User) -> Result<(), StoreError> {
        sqlx::query("UPDATE users SET name = ?, email = ?, nick = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.nick)
            .bind(id)
            .execute(self.pool)
            .await?;

        tracing::debug!(user_id = id, "user updated");
        Ok(())
    }

    /// Hard delete. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        tracing::debug!(user_id = id, deleted = result.rows_affected(), "user delete");
        Ok(())
    }

    /// Login lookup: only `id` and `password` are populated.
    ///
    /// Returns the zero value when no user has this email.
    pub async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
        Ok(self.find_by_email_opt(email).await?.unwrap_or_default())
    }

    /// Login lookup, `None` when no user has this email.
    pub async fn find_by_email_opt(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, password FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(|(id, password)| User {
            id,
            password,
            ..Default::default()
        }))
    }

    /// Stored credential, or an empty string for an unknown id.
    pub async fn find_password(&self, id: UserId) -> Result<String, StoreError> {
        Ok(self.find_password_opt(id).await?.unwrap_or_default())
    }

    /// Stored credential, `None` for an unknown id.
    pub async fn find_password_opt(&self, id: UserId) -> Result<Option<String>, StoreError> {
        let password: Option<String> =
            sqlx::query_scalar("SELECT password FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(password)
    }

    /// Overwrite the credential only.
    pub async fn update_password(&self, id: UserId, password: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password)
            .bind(id)
            .execute(self.pool)
            .await?;

        tracing::debug!(user_id = id, "password updated");
        Ok(())
    }

    /// Record that `follower_id` follows `user_id`.
    ///
    /// Following twice is a no-op. Self-follow is not rejected here.
    pub async fn follow(&self, user_id: UserId, follower_id: UserId) -> Result<(), StoreError> {
        sqlx::query("INSERT OR IGNORE INTO followers (user_id, follower_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(follower_id)
            .execute(self.pool)
            .await?;

        tracing::debug!(user_id, follower_id, "follow");
        Ok(())
    }

    /// Remove the exact (user_id, follower_id) pair, if present.
    pub async fn unfollow(&self, user_id: UserId, follower_id: UserId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM followers WHERE user_id = ? AND follower_id = ?")
            .bind(user_id)
            .bind(follower_id)
            .execute(self.pool)
            .await?;

        tracing::debug!(user_id, follower_id, "unfollow");
        Ok(())
    }

    /// Everyone who follows `user_id`.
    pub async fn find_followers(&self, user_id: UserId) -> Result<Vec<User>, StoreError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT u.id, u.name, u.nick, u.email, u.created_at
            FROM users u
            INNER JOIN followers s ON u.id = s.follower_id
            WHERE s.user_id = ?
            ORDER BY u.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Everyone `user_id` follows.
    pub async fn find_following(&self, user_id: UserId) -> Result<Vec<User>, StoreError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT u.id, u.name, u.nick, u.email, u.created_at
            FROM users u
            INNER JOIN followers s ON u.id = s.user_id
            WHERE s.follower_id = ?
            ORDER BY u.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
