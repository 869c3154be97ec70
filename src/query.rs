use crate::region::region_bbox;

pub const REGION_FIELD: &str = "region";
const BBOX_FIELDS: [&str; 4] = ["min_lat", "min_lon", "max_lat", "max_lon"];

/// Raw form input, in the order the fields were first set. Values may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Replaces an existing field in place, or appends a new one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.set(name, value);
        }
        fields
    }
}

/// Non-empty filter values with any `region` already expanded to its bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    entries: Vec<(String, String)>,
}

impl FilterCriteria {
    /// A recognized region owns the bbox keys: literal `min_lat` etc. are
    /// dropped in its favour.
    pub fn from_fields(fields: &FormFields) -> Self {
        let region = fields
            .get(REGION_FIELD)
            .map(str::trim)
            .filter(|value| !value.is_empty());
        let bbox = region.and_then(region_bbox);
        if let (Some(value), None) = (region, bbox) {
            tracing::debug!("ignoring unknown region {:?}", value);
        }

        let mut entries = Vec::new();
        for (name, value) in fields.iter() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if name == REGION_FIELD {
                if let Some(bbox) = bbox {
                    entries.extend(
                        bbox.to_query()
                            .into_iter()
                            .map(|(key, bound)| (key.to_string(), bound)),
                    );
                }
                continue;
            }
            if bbox.is_some() && BBOX_FIELDS.contains(&name) {
                continue;
            }
            entries.push((name.to_string(), value.to_string()));
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn build_query(fields: &FormFields) -> String {
    FilterCriteria::from_fields(fields).to_query_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(query: &str) -> Vec<&str> {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split('=').next().unwrap_or_default())
            .collect()
    }

    #[test]
    fn keeps_only_non_empty_fields() {
        let fields: FormFields = [
            ("effort", "steady"),
            ("length", ""),
            ("dog", "allowed_only"),
            ("difficulty", "   "),
        ]
        .into_iter()
        .collect();
        assert_eq!(build_query(&fields), "effort=steady&dog=allowed_only");
    }

    #[test]
    fn each_field_appears_once() {
        let mut fields = FormFields::new().with("effort", "easy").with("length", "short");
        fields.set("effort", "hard");
        let query = build_query(&fields);
        assert_eq!(query, "effort=hard&length=short");
        assert_eq!(keys(&query), ["effort", "length"]);
    }

    #[test]
    fn known_region_expands_to_bounds() {
        let fields = FormFields::new()
            .with("effort", "easy")
            .with("region", "wellington")
            .with("dog", "any");
        let criteria = FilterCriteria::from_fields(&fields);
        assert_eq!(criteria.get("region"), None);
        assert_eq!(criteria.get("min_lat"), Some("-41.35"));
        assert_eq!(criteria.get("min_lon"), Some("174.72"));
        assert_eq!(criteria.get("max_lat"), Some("-41.24"));
        assert_eq!(criteria.get("max_lon"), Some("174.82"));
        assert_eq!(
            keys(&criteria.to_query_string()),
            ["effort", "min_lat", "min_lon", "max_lat", "max_lon", "dog"]
        );
    }

    #[test]
    fn region_bounds_replace_literal_bbox_fields() {
        let fields = FormFields::new()
            .with("min_lat", "-10")
            .with("dog", "any")
            .with("region", "wellington")
            .with("max_lon", "180");
        let criteria = FilterCriteria::from_fields(&fields);
        let query = criteria.to_query_string();
        for key in ["min_lat", "min_lon", "max_lat", "max_lon"] {
            assert_eq!(keys(&query).iter().filter(|k| **k == key).count(), 1, "{key}");
        }
        assert_eq!(criteria.get("min_lat"), Some("-41.35"));
        assert_eq!(criteria.get("max_lon"), Some("174.82"));
        assert_eq!(
            query,
            "dog=any&min_lat=-41.35&min_lon=174.72&max_lat=-41.24&max_lon=174.82"
        );
    }

    #[test]
    fn literal_bbox_fields_pass_through_without_region() {
        let fields = FormFields::new()
            .with("region", "atlantis")
            .with("min_lat", "-10");
        assert_eq!(build_query(&fields), "min_lat=-10");
    }

    #[test]
    fn unknown_region_is_dropped() {
        let fields = FormFields::new()
            .with("region", "atlantis")
            .with("length", "long");
        let query = build_query(&fields);
        assert_eq!(query, "length=long");
        assert!(!query.contains("region"));
        assert!(!query.contains("min_lat"));
    }

    #[test]
    fn empty_region_emits_nothing() {
        let fields = FormFields::new().with("region", "");
        let criteria = FilterCriteria::from_fields(&fields);
        assert!(criteria.is_empty());
        assert_eq!(criteria.to_query_string(), "");
    }

    #[test]
    fn values_are_percent_encoded() {
        let fields = FormFields::new().with("q", "river & ridge");
        assert_eq!(build_query(&fields), "q=river%20%26%20ridge");
    }
}
