use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Settings resolved from the environment. CLI flags override these in `main`.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub upstream_url: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_url: non_empty("DOGTRAILS_API_URL")
                .map(|value| normalize_base_url(&value))
                .unwrap_or(defaults.api_url),
            upstream_url: non_empty("DOGTRAILS_UPSTREAM_URL")
                .map(|value| normalize_base_url(&value))
                .unwrap_or(defaults.upstream_url),
            port: non_empty("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: non_empty("DOGTRAILS_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup_from(&[])), Config::default());
    }

    #[test]
    fn reads_and_normalizes_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DOGTRAILS_API_URL", "https://trails.example.nz/"),
            ("DOGTRAILS_UPSTREAM_URL", " http://10.0.0.5:8080// "),
            ("PORT", "8123"),
            ("DOGTRAILS_STATIC_DIR", "public"),
        ]));
        assert_eq!(config.api_url, "https://trails.example.nz");
        assert_eq!(config.upstream_url, "http://10.0.0.5:8080");
        assert_eq!(config.port, 8123);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[("DOGTRAILS_API_URL", "   ")]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
