//! Opaque sitemap entry.
//!
//! An entry is a string-keyed record (`loc`, `lastmod`, `images`, ...)
//! whose shape belongs to the renderer. The model stores entries as-is
//! and never inspects their keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a field, returning the previous value if present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Entry {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_keeps_insertion_order() {
        let entry = Entry::new()
            .with("loc", "https://example.com/")
            .with("priority", "0.8")
            .with("freq", "daily");

        let keys: Vec<_> = entry.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, ["loc", "priority", "freq"]);
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut entry = Entry::new().with("lastmod", "2024-01-01");
        let previous = entry.insert("lastmod", "2024-02-01");

        assert_eq!(previous, Some(json!("2024-01-01")));
        assert_eq!(entry.get("lastmod"), Some(&json!("2024-02-01")));
        assert_eq!(entry.len(), 1);
    }

    #[test]
    fn test_nested_values_are_opaque() {
        let images = json!([{ "url": "https://example.com/a.png", "title": "A" }]);
        let entry = Entry::new().with("images", images.clone());

        assert_eq!(entry.get("images"), Some(&images));
        assert_eq!(entry.get("missing"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let value = json!({ "loc": "https://example.com/", "priority": 0.5 });
        let entry: Entry = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(entry.len(), 2);
        assert_eq!(serde_json::to_value(&entry).unwrap(), value);
    }

    #[test]
    fn test_from_map() {
        let mut map = Map::new();
        map.insert("loc".into(), json!("https://example.com/"));
        let entry = Entry::from(map.clone());

        assert!(!entry.is_empty());
        assert_eq!(entry.into_map(), map);
    }
}
