//! Auth Routes
//!
//! - POST /api/auth/login - Exchange email/password for a bearer token
//! - POST /api/auth/signup - Register an account and log it in
//! - GET /api/auth/session - Describe the session behind a bearer token
//! - POST /api/auth/logout - Revoke a bearer token

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CredentialsRequest, SessionResponse, TokenResponse};
use crate::api::error::ApiResult;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::auth::AuthError;

/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let account = state.accounts.verify(&req.email, &req.password).await?;
    let token = state.tokens.issue(&account.email).await;

    tracing::info!(email = %account.email, "Login succeeded");

    Ok(Json(token.into()))
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let account = state.accounts.register(&req.email, &req.password).await?;
    let token = state.tokens.issue(&account.email).await;

    Ok((StatusCode::CREATED, Json(token.into())))
}

/// GET /api/auth/session
pub async fn session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionResponse>> {
    let token = bearer_token(&headers).ok_or(AuthError::InvalidToken)?;
    let issued = state.tokens.validate(token).await?;

    Ok(Json(SessionResponse {
        email: issued.email,
        expires_at: issued.expires_at,
    }))
}

/// POST /api/auth/logout
///
/// Always 204; unknown tokens are ignored.
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        if state.tokens.revoke(token).await {
            tracing::info!("Token revoked");
        }
    }
    StatusCode::NO_CONTENT
}

/// Email of the account behind the request's bearer token
pub(crate) async fn session_email(state: &AppState, headers: &HeaderMap) -> ApiResult<String> {
    let token = bearer_token(headers).ok_or(AuthError::InvalidToken)?;
    let issued = state.tokens.validate(token).await?;
    Ok(issued.email)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
