//! Query-parameter store representation and the canonical filter state
//!
//! The query-parameter map is the single source of truth for view state; it
//! is owned externally (address bar, navigation layer) and every committed
//! mutation produces a fresh map. Absence of a key means "no constraint" --
//! an empty-string value is never emitted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::text::parse_page;

/// Query-parameter keys recognized by the controller.
pub mod keys {
    pub const SEARCH: &str = "search";
    pub const CATEGORY: &str = "category";
    pub const SUBCATEGORY: &str = "subcategory";
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const PAGE: &str = "page";
}

/// An externally-owned key/value string map (address-bar parameters).
///
/// Ordered map so the encoded form is deterministic for logging and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert a value; an empty value removes the key instead (absence, not
    /// empty string, is the "no constraint" state).
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), value);
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse an address-bar style query string (`category=Military&page=2`).
    ///
    /// A leading `?` is tolerated. Later duplicates win. Keys with empty
    /// values are dropped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.set(&key, value.into_owned());
        }
        params
    }

    /// Encode back to `key=value&...` form with percent-encoding.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(&k, v);
        }
        params
    }
}

/// The six optional filter dimensions, parsed from the parameter map.
///
/// All values are raw strings; absence means no constraint on that
/// dimension. Numeric fields (`id`, `page`) stay raw here so that malformed
/// values keep their spec'd fallback semantics at the point of use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub search: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub page: Option<String>,
}

impl QueryState {
    /// Derive the filter state from a committed parameter map.
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            search: params.get(keys::SEARCH).map(str::to_string),
            category: params.get(keys::CATEGORY).map(str::to_string),
            subcategory: params.get(keys::SUBCATEGORY).map(str::to_string),
            id: params.get(keys::ID).map(str::to_string),
            name: params.get(keys::NAME).map(str::to_string),
            page: params.get(keys::PAGE).map(str::to_string),
        }
    }

    /// Produce the parameter map to commit. Absent fields emit no key.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        let fields = [
            (keys::SEARCH, &self.search),
            (keys::CATEGORY, &self.category),
            (keys::SUBCATEGORY, &self.subcategory),
            (keys::ID, &self.id),
            (keys::NAME, &self.name),
            (keys::PAGE, &self.page),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                params.set(key, value.clone());
            }
        }
        params
    }

    /// The 1-based page number; absent or malformed values fall back to 1.
    pub fn page_number(&self) -> u32 {
        parse_page(self.page.as_deref())
    }

    /// True when any filtering dimension is active (page alone doesn't count).
    pub fn has_constraints(&self) -> bool {
        self.search.is_some()
            || self.category.is_some()
            || self.subcategory.is_some()
            || self.id.is_some()
            || self.name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_empty_removes_key() {
        let mut params = QueryParams::new();
        params.set(keys::SEARCH, "bdu");
        assert!(params.contains(keys::SEARCH));
        params.set(keys::SEARCH, "");
        assert!(!params.contains(keys::SEARCH));
    }

    #[test]
    fn test_parse_query_string() {
        let params = QueryParams::parse("?category=Military%20Combat%20Uniform&page=2");
        assert_eq!(params.get(keys::CATEGORY), Some("Military Combat Uniform"));
        assert_eq!(params.get(keys::PAGE), Some("2"));
    }

    #[test]
    fn test_parse_drops_empty_values() {
        let params = QueryParams::parse("search=&page=1");
        assert!(!params.contains(keys::SEARCH));
        assert_eq!(params.get(keys::PAGE), Some("1"));
    }

    #[test]
    fn test_query_string_round_trip() {
        let mut params = QueryParams::new();
        params.set(keys::CATEGORY, "Military Combat Uniform");
        params.set(keys::SUBCATEGORY, "ACU uniform");
        params.set(keys::PAGE, "3");

        let encoded = params.to_query_string();
        let decoded = QueryParams::parse(&encoded);
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_query_state_round_trip() {
        let state = QueryState {
            search: Some("bdu".to_string()),
            category: Some("Military Combat Uniform".to_string()),
            subcategory: None,
            id: None,
            name: None,
            page: Some("2".to_string()),
        };

        let params = state.to_params();
        assert!(!params.contains(keys::SUBCATEGORY));
        assert_eq!(QueryState::from_params(&params), state);
    }

    #[test]
    fn test_absent_fields_emit_no_keys() {
        let state = QueryState::default();
        assert!(state.to_params().is_empty());
    }

    #[test]
    fn test_page_number_fallback() {
        let mut state = QueryState::default();
        assert_eq!(state.page_number(), 1);
        state.page = Some("nonsense".to_string());
        assert_eq!(state.page_number(), 1);
        state.page = Some("4".to_string());
        assert_eq!(state.page_number(), 4);
    }

    #[test]
    fn test_has_constraints_ignores_page() {
        let mut state = QueryState {
            page: Some("3".to_string()),
            ..Default::default()
        };
        assert!(!state.has_constraints());
        state.name = Some("acu".to_string());
        assert!(state.has_constraints());
    }
}
