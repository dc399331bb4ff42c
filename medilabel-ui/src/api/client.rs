//! HTTP API Client
//!
//! Functions for communicating with the MediLabel REST API.

use gloo_net::http::Request;

use crate::state::models::{DashboardLayout, MedicationRow};
use crate::state::session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082";

/// Shown when a failed login carries no server message
pub const DEFAULT_LOGIN_ERROR: &str = "Login failed";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("medilabel_api_url").ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct InventoryResponse {
    pub total: usize,
    pub rows: Vec<MedicationRow>,
}

/// Error body returned by the API
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Message for a rejected request: the server's `detail`, else `fallback`
fn error_message(body: Option<ApiError>, fallback: &str) -> String {
    body.and_then(|e| e.detail)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

// ============ API Functions ============

/// Exchange credentials for an access token
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        email: &'a str,
        password: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/auth/login", api_base))
        .json(&LoginRequest { email, password })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|_| DEFAULT_LOGIN_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response.json().await.ok(), DEFAULT_LOGIN_ERROR));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|_| DEFAULT_LOGIN_ERROR.to_string())?;

    Ok(token.access_token)
}

/// Revoke the stored token on the server
pub async fn logout() -> Result<(), String> {
    let Some(token) = session::token() else {
        return Ok(());
    };

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/auth/logout", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response.json().await.ok(), "Logout failed"));
    }

    Ok(())
}

/// Fetch the arranged dashboard cards
pub async fn fetch_dashboard() -> Result<DashboardLayout, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/dashboard", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response.json().await.ok(), "Unknown error"));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a batch of mock inventory rows; `None` uses the server default
pub async fn fetch_inventory(count: Option<usize>) -> Result<InventoryResponse, String> {
    let api_base = get_api_base();

    let url = match count {
        Some(n) => format!("{}/api/inventory?count={}", api_base, n),
        None => format!("{}/api/inventory", api_base),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response.json().await.ok(), "Unknown error"));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_uses_detail() {
        let body: ApiError =
            serde_json::from_str(r#"{"detail": "bad credentials", "code": "INVALID_CREDENTIALS"}"#)
                .unwrap();
        assert_eq!(error_message(Some(body), DEFAULT_LOGIN_ERROR), "bad credentials");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(None, DEFAULT_LOGIN_ERROR), "Login failed");

        let body: ApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(error_message(Some(body), DEFAULT_LOGIN_ERROR), "Login failed");
    }

    #[test]
    fn test_inventory_response_shape() {
        let body: InventoryResponse = serde_json::from_str(r#"{"total": 0, "rows": []}"#).unwrap();
        assert_eq!(body.total, 0);
        assert!(body.rows.is_empty());
    }
}
