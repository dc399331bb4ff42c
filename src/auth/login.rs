//! Login Flow
//!
//! Client side of `POST /api/auth/login`: send credentials, and on success
//! persist the token and navigate to the dashboard. On failure the caller
//! gets a display string: the server's `detail` when it sent one, otherwise
//! [`DEFAULT_LOGIN_ERROR`]. The call is not retried.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::session::SessionStore;
use crate::dashboard::Route;

/// Message shown when the server gave no detail
pub const DEFAULT_LOGIN_ERROR: &str = "Login failed";

/// Path of the login endpoint, relative to the API base URL
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Path of the session lookup endpoint
pub const SESSION_PATH: &str = "/api/auth/session";

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Session lookup response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Login client errors
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl LoginError {
    /// Text to show the user
    pub fn display_message(&self) -> String {
        match self {
            LoginError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => DEFAULT_LOGIN_ERROR.to_string(),
        }
    }
}

/// The remote side of a login
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError>;
}

/// Where a successful login sends the user
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Result of one login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn { token: String },
    Failed { message: String },
}

/// Run one login attempt
///
/// Success stores the token in `store` and navigates to the dashboard.
/// Failure leaves the store and navigation untouched.
pub async fn submit_login(
    api: &dyn AuthApi,
    store: &dyn SessionStore,
    navigator: &dyn Navigator,
    email: &str,
    password: &str,
) -> LoginOutcome {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = match api.login(&request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "Login attempt failed");
            return LoginOutcome::Failed {
                message: e.display_message(),
            };
        }
    };

    if let Err(e) = store.store_login(&response.access_token) {
        tracing::warn!(error = %e, "Could not persist session");
        return LoginOutcome::Failed {
            message: DEFAULT_LOGIN_ERROR.to_string(),
        };
    }

    navigator.navigate(Route::Dashboard);
    LoginOutcome::LoggedIn {
        token: response.access_token,
    }
}

/// `AuthApi` over HTTP
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up the session behind a token
    pub async fn session(&self, token: &str) -> Result<SessionInfo, LoginError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, SESSION_PATH))
            .bearer_auth(token)
            .send()
            .await?;

        read_json(response).await
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, LOGIN_PATH))
            .json(request)
            .send()
            .await?;

        read_json(response).await
    }
}

/// Decode a success body, or turn an error body into `Rejected` with its
/// optional string `detail`
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, LoginError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        return serde_json::from_str(&body).map_err(|e| LoginError::MalformedResponse(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));

    Err(LoginError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::{MemorySessionStore, IS_LOGGED_IN_KEY, TOKEN_KEY};
    use axum::{http::StatusCode, routing::post, Json, Router};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.lock().unwrap().push(route);
        }
    }

    impl RecordingNavigator {
        fn visited(&self) -> Vec<Route> {
            self.visited.lock().unwrap().clone()
        }
    }

    /// Serve `router` on an ephemeral port and return its base URL
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_login_success_persists_token_and_navigates() {
        let router = Router::new().route(
            LOGIN_PATH,
            post(|| async { Json(serde_json::json!({ "access_token": "abc" })) }),
        );
        let api = HttpAuthApi::new(Client::new(), spawn_stub(router).await);
        let store = MemorySessionStore::new();
        let navigator = RecordingNavigator::default();

        let outcome = submit_login(&api, &store, &navigator, "pat@example.com", "pw").await;

        assert_eq!(
            outcome,
            LoginOutcome::LoggedIn {
                token: "abc".to_string()
            }
        );
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(store.get(IS_LOGGED_IN_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(navigator.visited(), vec![Route::Dashboard]);
    }

    #[tokio::test]
    async fn test_login_error_detail_is_displayed_without_navigation() {
        let router = Router::new().route(
            LOGIN_PATH,
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({ "detail": "bad credentials" })),
                )
            }),
        );
        let api = HttpAuthApi::new(Client::new(), spawn_stub(router).await);
        let store = MemorySessionStore::new();
        let navigator = RecordingNavigator::default();

        let outcome = submit_login(&api, &store, &navigator, "pat@example.com", "pw").await;

        assert_eq!(
            outcome,
            LoginOutcome::Failed {
                message: "bad credentials".to_string()
            }
        );
        assert!(navigator.visited().is_empty());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_error_without_detail_uses_default() {
        let router = Router::new().route(
            LOGIN_PATH,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let api = HttpAuthApi::new(Client::new(), spawn_stub(router).await);
        let navigator = RecordingNavigator::default();

        let outcome = submit_login(
            &api,
            &MemorySessionStore::new(),
            &navigator,
            "pat@example.com",
            "pw",
        )
        .await;

        assert_eq!(
            outcome,
            LoginOutcome::Failed {
                message: DEFAULT_LOGIN_ERROR.to_string()
            }
        );
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_server_uses_default() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpAuthApi::new(Client::new(), format!("http://{}", addr));
        let navigator = RecordingNavigator::default();
        let outcome = submit_login(
            &api,
            &MemorySessionStore::new(),
            &navigator,
            "pat@example.com",
            "pw",
        )
        .await;

        assert_eq!(
            outcome,
            LoginOutcome::Failed {
                message: DEFAULT_LOGIN_ERROR.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_success_without_token_is_malformed() {
        let router = Router::new().route(
            LOGIN_PATH,
            post(|| async { Json(serde_json::json!({ "ok": true })) }),
        );
        let api = HttpAuthApi::new(Client::new(), spawn_stub(router).await);
        let request = LoginRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
        };

        let err = api.login(&request).await.unwrap_err();
        assert!(matches!(err, LoginError::MalformedResponse(_)));
        assert_eq!(err.display_message(), DEFAULT_LOGIN_ERROR);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpAuthApi::new(Client::new(), "http://localhost:8082/");
        assert_eq!(api.base_url(), "http://localhost:8082");
    }
}
