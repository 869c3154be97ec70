//! Pure view-models for trail cards and the providers list.
//!
//! Every display string is built here so the web client and the terminal
//! only lay the values out.

use crate::{Provider, Trail};

pub const DOG_RESTRICTED_FALLBACK: &str = "Dog access has restrictions.";
pub const MAP_LINK_LABEL: &str = "View map";
pub const UNKNOWN: &str = "Unknown";

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub href: String,
    pub label: String,
    /// Open in a new browsing context (`target="_blank"`).
    pub new_context: bool,
}

impl Link {
    fn external(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            new_context: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailCard {
    pub key: String,
    pub name: String,
    pub location: String,
    pub distance: String,
    pub elevation: String,
    pub difficulty: String,
    pub provider: String,
    pub dog_policy: String,
    pub surface: String,
    pub map_link: Link,
    pub warning: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrailList {
    pub cards: Vec<TrailCard>,
    pub count_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProviderItem {
    pub name: String,
    pub status: String,
    pub notes: String,
    pub website: Link,
}

pub fn render_trails(trails: &[Trail]) -> TrailList {
    TrailList {
        cards: trails
            .iter()
            .enumerate()
            .map(|(index, trail)| {
                let mut card = trail_card(trail);
                if trail.id.is_none() {
                    card.key = format!("{}#{}", trail.name, index);
                }
                card
            })
            .collect(),
        count_label: count_label(trails.len()),
    }
}

pub fn trail_card(trail: &Trail) -> TrailCard {
    let warning = if trail.dog_policy == "allowed" {
        None
    } else {
        Some(
            trail
                .dog_notes
                .clone()
                .unwrap_or_else(|| DOG_RESTRICTED_FALLBACK.to_string()),
        )
    };
    TrailCard {
        key: trail.id.clone().unwrap_or_else(|| trail.name.clone()),
        name: trail.name.clone(),
        location: trail.location.clone(),
        distance: format_distance(trail.distance_km),
        elevation: format_elevation(trail.elevation_m),
        difficulty: humanize_label(&trail.difficulty),
        provider: trail.provider.clone(),
        dog_policy: humanize_label(&trail.dog_policy),
        surface: trail.surface.clone(),
        map_link: Link::external(&trail.map_url, MAP_LINK_LABEL),
        warning,
    }
}

pub fn render_providers(providers: &[Provider]) -> Vec<ProviderItem> {
    providers
        .iter()
        .map(|provider| ProviderItem {
            name: provider.name.clone(),
            status: provider.api_status.clone(),
            notes: provider.notes.clone(),
            website: Link::external(&provider.website, &provider.website),
        })
        .collect()
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 route".to_string()
    } else {
        format!("{count} routes")
    }
}

pub fn format_distance(distance_km: f64) -> String {
    format!("{:.1} km", distance_km)
}

pub fn format_elevation(elevation_m: Option<f64>) -> String {
    match elevation_m {
        Some(elevation) => format!("{:.0} m gain", elevation),
        None => UNKNOWN.to_string(),
    }
}

pub fn humanize_label(value: &str) -> String {
    value.replace('_', " ")
}
