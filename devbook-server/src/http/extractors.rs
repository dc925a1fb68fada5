//! Custom Axum extractors

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use devbook_core::UserId;

use super::error::ApiError;

/// Extract and validate a numeric user id from a single-segment path
pub struct ValidId(pub UserId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| bad_id("id"))?;

        Ok(Self(parse_id(&raw, "id")?))
    }
}

/// Extract `(user_id, follower_id)` from `/users/{id}/followers/{follower_id}`
pub struct ValidFollowPair {
    pub user_id: UserId,
    pub follower_id: UserId,
}

impl<S> FromRequestParts<S> for ValidFollowPair
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params): Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| bad_id("id"))?;

        Self::from_params(&params)
    }
}

impl ValidFollowPair {
    fn from_params(params: &HashMap<String, String>) -> Result<Self, ApiError> {
        Ok(Self {
            user_id: segment(params, "id")?,
            follower_id: segment(params, "follower_id")?,
        })
    }
}

/// Named path segment as an id; a missing segment is reported by name
fn segment(params: &HashMap<String, String>, field: &str) -> Result<UserId, ApiError> {
    let raw = params.get(field).ok_or_else(|| bad_id(field))?;
    parse_id(raw, field)
}

fn parse_id(raw: &str, field: &str) -> Result<UserId, ApiError> {
    match raw.parse::<UserId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(bad_id(field)),
    }
}

fn bad_id(field: &str) -> ApiError {
    ApiError::BadRequest {
        message: format!("{} must be a positive integer", field),
    }
}
