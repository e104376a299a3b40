//! API utilities for frontend-backend communication
//!
//! Builds list URLs from compiled queries and fetches paginated responses.

use contracts::shared::list_query::{ListRequest, ListResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::list_endpoints::EndpointRegistry;
use super::list_query::ListQueryError;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from configuration when set. Otherwise constructs it
/// from the current window location, using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if neither is available
pub fn api_base(config: &ApiConfig) -> String {
    if !config.base_url.is_empty() {
        return config.base_url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build the full URL of a list page request
///
/// # Example
/// ```rust,ignore
/// let url = list_url("http://localhost:3000", &registry, "materials", &request)?;
/// // http://localhost:3000/material?limit=20&offset=0
/// ```
pub fn list_url(
    base: &str,
    registry: &EndpointRegistry,
    endpoint: &str,
    request: &ListRequest,
) -> Result<String, ListQueryError> {
    Ok(format!("{}{}", base, registry.query_path(endpoint, request)?))
}

/// Загрузить страницу списка
pub async fn fetch_list<T: DeserializeOwned>(
    base: &str,
    registry: &EndpointRegistry,
    endpoint: &str,
    request: &ListRequest,
) -> Result<ListResponse<T>, String> {
    let url = list_url(base, registry, endpoint, request).map_err(|e| e.to_string())?;
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ListResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    log::debug!(
        "{}: received {} of {} items",
        endpoint,
        data.items.len(),
        data.total_count
    );
    Ok(data)
}
