use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;
use storage::{Database, repository::judge::JudgeRepository};

use crate::error::WebError;

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Guards the admin API with a static set of bearer keys
pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let authorized =
        bearer_token(request.headers()).is_some_and(|token| api_keys.is_valid(token));

    if !authorized {
        tracing::warn!("Invalid API key attempt");
        return Err(WebError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Resolves the bearer token to a judge of the active event and makes it
/// available to handlers as an `Extension<Judge>`
pub async fn require_judge(
    State(db): State<Database>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = bearer_token(request.headers())
        .map(str::to_owned)
        .ok_or(WebError::Unauthorized)?;

    let judge = JudgeRepository::new(db.pool())
        .find_active_by_access_key(&token)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Invalid judge access key attempt");
            WebError::Unauthorized
        })?;

    tracing::debug!(judge_id = %judge.judge_id, "Judge authenticated");
    request.extensions_mut().insert(judge);

    Ok(next.run(request).await)
}

#[derive(Clone)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_api_keys_from_comma_separated() {
        let keys = ApiKeys::from_comma_separated(" admin-one , admin-two,,");

        assert!(keys.is_valid("admin-one"));
        assert!(keys.is_valid("admin-two"));
        assert!(!keys.is_valid(""));
        assert!(!keys.is_valid("admin-three"));
    }

    #[test]
    fn test_empty_api_keys_accept_nothing() {
        let keys = ApiKeys::from_comma_separated("");

        assert!(keys.is_empty());
        assert!(!keys.is_valid(""));
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer judge-key-01"));
        assert_eq!(bearer_token(&headers), Some("judge-key-01"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
