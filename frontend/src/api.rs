use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use yew::UseStateHandle;

use dogtrails::{
    ApiError, PROVIDERS_PATH, Provider, ProvidersDisplay, ProvidersView, TRAILS_PATH, Trail,
    TrailsApi, TrailsDisplay, TrailsView,
};

/// Same-origin fetch transport.
pub struct GlooApi;

impl TrailsApi for GlooApi {
    async fn providers(&self) -> Result<Vec<Provider>, ApiError> {
        get_json(PROVIDERS_PATH).await
    }

    async fn trails(&self, query: &str) -> Result<Vec<Trail>, ApiError> {
        if query.is_empty() {
            get_json(TRAILS_PATH).await
        } else {
            get_json(&format!("{}?{}", TRAILS_PATH, query)).await
        }
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if !response.ok() {
        return Err(ApiError::status(response.status(), response.status_text()));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// A yew state handle used as a view. Setting from an older handle still
/// updates the live component.
pub struct StateView<D>(pub UseStateHandle<D>);

impl TrailsView for StateView<TrailsDisplay> {
    fn render_trails(&self, display: TrailsDisplay) {
        self.0.set(display);
    }
}

impl ProvidersView for StateView<ProvidersDisplay> {
    fn render_providers(&self, display: ProvidersDisplay) {
        self.0.set(display);
    }
}
