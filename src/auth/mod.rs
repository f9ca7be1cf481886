use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::config::config;
use crate::error::ApiError;

/// Role marker for callers holding the shared teacher credential.
///
/// Extracting this from a request enforces the teacher gate: 401 when the
/// Authorization header is missing or malformed, 403 when the bearer token
/// is not the configured teacher secret.
#[derive(Clone, Debug)]
pub struct Teacher;

/// Caller identity taken verbatim from the bearer token.
///
/// No verification happens here: any non-empty token is accepted and its
/// literal value becomes the user id. This is a known-insecure stand-in kept
/// for behavioral parity with the deployed API; see DESIGN.md.
#[derive(Clone, Debug)]
pub struct UserIdentity(pub String);

fn bearer_token(parts: &Parts) -> Result<String, ApiError> {
    let header = parts
        .headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("Authorization header missing or invalid"))?;
    let value = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Authorization header missing or invalid"))?;
    // The scheme must be literally "Bearer "
    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authorization header missing or invalid"))?;
    if token.trim().is_empty() {
        return Err(ApiError::unauthorized("Authorization header missing or invalid"));
    }
    Ok(token.to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for Teacher
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let secret = &config().security.teacher_token;
        if secret.is_empty() || token != *secret {
            return Err(ApiError::forbidden("Not authorized as teacher"));
        }
        Ok(Teacher)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(UserIdentity(bearer_token(parts)?))
    }
}
