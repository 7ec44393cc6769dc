//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests
//! against the `{ "data": ... }` envelope of the REST API.

use crate::shared::config::ui_config;
use contracts::shared::api::{ApiResponse, SearchParams};
use contracts::shared::error::SearchError;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

/// Get the base URL for API requests
///
/// Taken from `[api] base_url` of the UI config, without a trailing slash.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/products/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    ui_config().api.base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Прерывает запрос по истечении `[api] timeout_ms`
struct Deadline {
    controller: Option<AbortController>,
    _timer: Option<Timeout>,
}

impl Deadline {
    fn start() -> Self {
        let controller = AbortController::new().ok();
        let timer = controller.clone().map(|c| {
            Timeout::new(ui_config().api.timeout_ms, move || c.abort())
        });
        Self {
            controller,
            _timer: timer,
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }
}

async fn send(builder: RequestBuilder, method: &str, url: &str) -> Result<Response, SearchError> {
    log::debug!("{} {}", method, url);
    let deadline = Deadline::start();
    let response = builder
        .abort_signal(deadline.signal().as_ref())
        .send()
        .await
        .map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            SearchError::Request(e.to_string())
        })?;

    if !response.ok() {
        log::error!("{} {} -> {}", method, url, response.status());
        return Err(SearchError::Status(response.status()));
    }
    Ok(response)
}

/// GET и распаковка `data`
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, SearchError> {
    let url = api_url(path);
    let response = send(Request::get(&url), "GET", &url).await?;
    let body: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(body.data)
}

/// Поиск: `GET {path}?input=..&pageNumber=0&pageSize=..`
pub async fn search_data<T: DeserializeOwned>(path: &str, input: &str) -> Result<Vec<T>, SearchError> {
    let params = SearchParams::first_page(input, ui_config().search.page_size);
    let query = serde_qs::to_string(&params).map_err(|e| SearchError::Request(e.to_string()))?;
    get_data(&format!("{}?{}", path, query)).await
}

async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    method: &str,
    url: &str,
    body: &B,
) -> Result<(), SearchError> {
    let deadline = Deadline::start();
    log::debug!("{} {}", method, url);
    let response = builder
        .abort_signal(deadline.signal().as_ref())
        .json(body)
        .map_err(|e| SearchError::Request(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            SearchError::Request(e.to_string())
        })?;

    if !response.ok() {
        log::error!("{} {} -> {}", method, url, response.status());
        return Err(SearchError::Status(response.status()));
    }
    Ok(())
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), SearchError> {
    let url = api_url(path);
    send_json(Request::post(&url), "POST", &url, body).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), SearchError> {
    let url = api_url(path);
    send_json(Request::put(&url), "PUT", &url, body).await
}

pub async fn delete(path: &str) -> Result<(), SearchError> {
    let url = api_url(path);
    send(Request::delete(&url), "DELETE", &url).await?;
    Ok(())
}
