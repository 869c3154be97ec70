use std::sync::atomic::{AtomicU64, Ordering};

use crate::render::{ProviderItem, TrailList, count_label, render_providers, render_trails};
use crate::{ApiError, FormFields, Provider, Trail, build_query};

/// Transport for the two listing endpoints.
#[allow(async_fn_in_trait)]
pub trait TrailsApi {
    async fn providers(&self) -> Result<Vec<Provider>, ApiError>;

    /// `query` is an already encoded query string without the leading `?`.
    async fn trails(&self, query: &str) -> Result<Vec<Trail>, ApiError>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TrailsDisplay {
    #[default]
    Loading,
    Loaded(TrailList),
    Failed {
        message: String,
        count_label: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProvidersDisplay {
    #[default]
    Loading,
    Loaded(Vec<ProviderItem>),
    Failed { message: String },
}

pub trait TrailsView {
    fn render_trails(&self, display: TrailsDisplay);
}

pub trait ProvidersView {
    fn render_providers(&self, display: ProvidersDisplay);
}

impl<V: TrailsView + ?Sized> TrailsView for &V {
    fn render_trails(&self, display: TrailsDisplay) {
        (**self).render_trails(display);
    }
}

impl<V: ProvidersView + ?Sized> ProvidersView for &V {
    fn render_providers(&self, display: ProvidersDisplay) {
        (**self).render_providers(display);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Rendered { count: usize },
    Failed { error: ApiError },
    /// A later search started before this one finished, so its result was dropped.
    Superseded,
}

pub struct SearchController<A, T, P> {
    api: A,
    trails_view: T,
    providers_view: P,
    generation: AtomicU64,
}

impl<A, T, P> SearchController<A, T, P>
where
    A: TrailsApi,
    T: TrailsView,
    P: ProvidersView,
{
    pub fn new(api: A, trails_view: T, providers_view: P) -> Self {
        Self {
            api,
            trails_view,
            providers_view,
            generation: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial load and every submitted search: providers and trails together.
    pub async fn run(&self, fields: &FormFields) -> SearchOutcome {
        let ((), outcome) = futures::join!(self.refresh_providers(), self.search(fields));
        outcome
    }

    pub async fn refresh_providers(&self) {
        let display = match self.api.providers().await {
            Ok(providers) => ProvidersDisplay::Loaded(render_providers(&providers)),
            Err(err) => {
                tracing::warn!("providers fetch failed: {}", err);
                ProvidersDisplay::Failed {
                    message: format!("Could not load providers. {err}"),
                }
            }
        };
        self.providers_view.render_providers(display);
    }

    pub async fn search(&self, fields: &FormFields) -> SearchOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = build_query(fields);
        self.trails_view.render_trails(TrailsDisplay::Loading);

        let result = self.api.trails(&query).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!("dropping stale trails response for search #{}", ticket);
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(trails) => {
                tracing::info!("search #{} returned {} trails", ticket, trails.len());
                self.trails_view
                    .render_trails(TrailsDisplay::Loaded(render_trails(&trails)));
                SearchOutcome::Rendered {
                    count: trails.len(),
                }
            }
            Err(err) => {
                tracing::warn!("trails fetch failed: {}", err);
                self.trails_view.render_trails(TrailsDisplay::Failed {
                    message: format!("Could not load live trails. {err}"),
                    count_label: count_label(0),
                });
                SearchOutcome::Failed { error: err }
            }
        }
    }
}
