//! Same-origin proxy: serves the built web client and relays `/api/*` upstream.
use std::path::Path;

use axum::{
    Router,
    extract::{RawQuery, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::api::USER_AGENT;
use crate::config::normalize_base_url;
use crate::{ApiError, PROVIDERS_PATH, TRAILS_PATH};

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream_url: String,
}

impl ProxyState {
    pub fn new(upstream_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self {
            client,
            upstream_url: normalize_base_url(upstream_url),
        })
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }
}

pub fn router(state: ProxyState, static_dir: &Path) -> Router {
    Router::new()
        .route(TRAILS_PATH, get(proxy_trails))
        .route(PROVIDERS_PATH, get(proxy_providers))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .with_state(state)
}

async fn proxy_trails(
    State(state): State<ProxyState>,
    RawQuery(query): RawQuery,
) -> Result<Response, (StatusCode, String)> {
    let url = match query.as_deref() {
        Some(query) if !query.is_empty() => {
            format!("{}{}?{}", state.upstream_url, TRAILS_PATH, query)
        }
        _ => format!("{}{}", state.upstream_url, TRAILS_PATH),
    };
    forward(&state, &url).await
}

async fn proxy_providers(
    State(state): State<ProxyState>,
) -> Result<Response, (StatusCode, String)> {
    let url = format!("{}{}", state.upstream_url, PROVIDERS_PATH);
    forward(&state, &url).await
}

async fn forward(state: &ProxyState, url: &str) -> Result<Response, (StatusCode, String)> {
    tracing::debug!("proxying GET {}", url);
    let response = state.client.get(url).send().await.map_err(|err| {
        tracing::warn!("upstream request failed for {}: {}", url, err);
        (
            StatusCode::BAD_GATEWAY,
            format!("upstream request failed: {err}"),
        )
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("upstream answered {} for {}", status, url);
    }
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let body = response.bytes().await.map_err(|err| {
        (
            StatusCode::BAD_GATEWAY,
            format!("upstream body read failed: {err}"),
        )
    })?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
