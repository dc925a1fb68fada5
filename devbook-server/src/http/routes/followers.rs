//! Follow endpoints
//!
//! `/users/{id}/followers/{follower_id}` reads as "follower_id follows id".

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use devbook_core::User;

use crate::db::repos::UserRepo;
use crate::db::StoreError;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidFollowPair, ValidId};
use crate::http::server::AppState;

/// A follow edge pointing at a user that does not exist
fn unknown_pair(e: StoreError, pair: &ValidFollowPair) -> ApiError {
    if e.is_foreign_key_violation() {
        ApiError::NotFound {
            resource: "user",
            id: format!("{} or {}", pair.user_id, pair.follower_id),
        }
    } else {
        e.into()
    }
}

/// POST /users/{id}/followers/{follower_id}
async fn follow(
    State(state): State<Arc<AppState>>,
    pair: ValidFollowPair,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.pool)
        .follow(pair.user_id, pair.follower_id)
        .await
        .map_err(|e| unknown_pair(e, &pair))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /users/{id}/followers/{follower_id}
async fn unfollow(
    State(state): State<Arc<AppState>>,
    pair: ValidFollowPair,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.pool)
        .unfollow(pair.user_id, pair.follower_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/{id}/followers
async fn list_followers(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(UserRepo::new(&state.pool).find_followers(id).await?))
}

/// GET /users/{id}/following
async fn list_following(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(UserRepo::new(&state.pool).find_following(id).await?))
}

/// Follow routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/followers", get(list_followers))
        .route(
            "/users/{id}/followers/{follower_id}",
            post(follow).delete(unfollow),
        )
        .route("/users/{id}/following", get(list_following))
}

#[cfg(test)]
mod tests {
    use crate::db::repos::UserRepo;
    use crate::http::test_support::{app, send};
    use axum::http::StatusCode;
    use devbook_core::User;
    use serde_json::Value;

    async fn seed(pool: &sqlx::SqlitePool, nick: &str) -> i64 {
        let user = User {
            name: nick.to_uppercase(),
            nick: nick.to_string(),
            email: format!("{}@example.com", nick),
            password: "x".into(),
            ..Default::default()
        };
        UserRepo::new(pool).create(&user).await.unwrap()
    }

    fn nicks(body: &Value) -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|u| u["nick"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn follow_then_list_both_directions() {
        let (app, pool) = app().await;
        let anna = seed(&pool, "anna").await;
        let bob = seed(&pool, "bob").await;

        let uri = format!("/users/{}/followers/{}", anna, bob);
        let (status, _) = send(&app, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, followers) = send(&app, "GET", &format!("/users/{}/followers", anna), None).await;
        assert_eq!(nicks(&followers), ["bob"]);
        assert!(followers[0].get("password").is_none());

        let (_, following) = send(&app, "GET", &format!("/users/{}/following", bob), None).await;
        assert_eq!(nicks(&following), ["anna"]);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, followers) = send(&app, "GET", &format!("/users/{}/followers", anna), None).await;
        assert!(nicks(&followers).is_empty());

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn follow_unknown_user_is_404() {
        let (app, pool) = app().await;
        let anna = seed(&pool, "anna").await;

        let (status, body) = send(&app, "POST", &format!("/users/{}/followers/77", anna), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn non_numeric_follower_is_400() {
        let (app, _pool) = app().await;
        let (status, _) = send(&app, "POST", "/users/1/followers/bob", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
