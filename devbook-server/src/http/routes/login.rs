//! Login endpoint
//!
//! Password-hash comparison only. A successful login answers with the user id;
//! no token or session is issued.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use devbook_core::UserId;
use serde::{Deserialize, Serialize};

use crate::auth::verify_password;
use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub id: UserId,
}

/// POST /login
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = req.email.trim();
    let Some(stored) = UserRepo::new(&state.pool).find_by_email_opt(email).await? else {
        tracing::warn!(email, "login for unknown email");
        return Err(ApiError::Unauthorized);
    };

    if !verify_password(&req.password, &stored.password)? {
        tracing::warn!(user_id = stored.id, "login with wrong password");
        return Err(ApiError::Unauthorized);
    }

    tracing::info!(user_id = stored.id, "login");
    Ok(Json(LoginResponse { id: stored.id }))
}

/// Login routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn login_returns_id_for_matching_password() {
        let (app, _pool) = app().await;
        let (_, created) = send(
            &app,
            "POST",
            "/users",
            Some(json!({"name": "Anna", "nick": "anna", "email": "anna@example.com", "password": "pw"})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            "/login",
            Some(json!({"email": "anna@example.com", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], created["id"]);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_401() {
        let (app, _pool) = app().await;
        send(
            &app,
            "POST",
            "/users",
            Some(json!({"name": "Anna", "nick": "anna", "email": "anna@example.com", "password": "pw"})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            "/login",
            Some(json!({"email": "anna@example.com", "password": "nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "unauthorized");

        let (status, _) = send(
            &app,
            "POST",
            "/login",
            Some(json!({"email": "ghost@example.com", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
