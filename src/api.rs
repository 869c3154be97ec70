//! Native HTTP transport for the dogtrails API.
use serde::de::DeserializeOwned;

use crate::{ApiError, PROVIDERS_PATH, Provider, TRAILS_PATH, Trail, TrailsApi};

pub const USER_AGENT: &str = concat!("dogtrails/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct HttpTrailsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTrailsApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn trails_url(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, TRAILS_PATH)
        } else {
            format!("{}{}?{}", self.base_url, TRAILS_PATH, query)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl TrailsApi for HttpTrailsApi {
    async fn providers(&self) -> Result<Vec<Provider>, ApiError> {
        let url = format!("{}{}", self.base_url, PROVIDERS_PATH);
        self.get_json(&url).await
    }

    async fn trails(&self, query: &str) -> Result<Vec<Trail>, ApiError> {
        self.get_json(&self.trails_url(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let api = HttpTrailsApi::new("http://localhost:3000/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:3000");
    }

    #[test]
    fn trails_url_omits_empty_query() {
        let api = HttpTrailsApi::new("http://localhost:3000").unwrap();
        assert_eq!(api.trails_url(""), "http://localhost:3000/api/trails");
        assert_eq!(
            api.trails_url("dog=any"),
            "http://localhost:3000/api/trails?dog=any"
        );
    }
}
