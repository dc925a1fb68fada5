//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use devbook_core::User;
use serde::Deserialize;

use crate::accounts::{self, PasswordChange};
use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;

/// `?user=term` on the listing; absent means everyone
#[derive(Deserialize, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub user: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current: String,
    pub new: String,
}

/// POST /users - register
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(mut user): Json<User>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let id = accounts::register(&state.pool, &mut user).await?;
    let created = UserRepo::new(&state.pool)
        .find_by_id_opt(id)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: format!("user {} vanished after insert", id),
        })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /users?user=term - search by name or nick
async fn search_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).find(params.user.trim()).await?;
    Ok(Json(users))
}

/// GET /users/{id}
async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<User>, ApiError> {
    UserRepo::new(&state.pool)
        .find_by_id_opt(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: "user",
            id: id.to_string(),
        })
}

/// PUT /users/{id} - edit name, nick and email
async fn update_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(mut user): Json<User>,
) -> Result<StatusCode, ApiError> {
    accounts::edit_profile(&state.pool, id, &mut user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /users/{id}/password - change password after checking the current one
async fn change_password(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    match accounts::change_password(&state.pool, id, &req.current, &req.new).await? {
        PasswordChange::Updated => Ok(StatusCode::NO_CONTENT),
        PasswordChange::WrongPassword => Err(ApiError::Unauthorized),
        PasswordChange::UnknownUser => Err(ApiError::NotFound {
            resource: "user",
            id: id.to_string(),
        }),
    }
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(search_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/{id}/password", post(change_password))
}
