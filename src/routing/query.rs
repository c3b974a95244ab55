//! Shareable query representation and typed filter keys.
//!
//! [`QueryParams`] is the single source of truth for the listing filters. It
//! behaves like a browser's `URLSearchParams`: ordered pairs, `set` replaces an
//! existing key in place, and parsing/serialization use
//! `application/x-www-form-urlencoded` rules. Writing an empty value deletes the
//! key, so empty values are never persisted.

use std::fmt;
use url::form_urlencoded;

/// The four recognized filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// Free-text search (`q`).
    Search,
    /// Department identifier (`departmentId`).
    Department,
    /// Location identifier (`locationId`).
    Location,
    /// Function identifier (`functionId`).
    Function,
}

impl FilterKey {
    /// All keys in canonical order.
    pub const ALL: [Self; 4] = [Self::Search, Self::Department, Self::Location, Self::Function];

    /// The three dropdown-backed keys.
    pub const LOOKUPS: [Self; 3] = [Self::Department, Self::Location, Self::Function];

    /// The query-string parameter name.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Search => "q",
            Self::Department => "departmentId",
            Self::Location => "locationId",
            Self::Function => "functionId",
        }
    }

    /// Human-readable label used on dropdowns and filter chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Department => "Department",
            Self::Location => "Location",
            Self::Function => "Function",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

/// Ordered key/value pairs of a query string.
///
/// # Examples
///
/// ```
/// use zjobs::routing::QueryParams;
///
/// let mut query = QueryParams::parse("q=rust&departmentId=3");
/// query.set("q", "");
/// query.set("locationId", "pune");
/// assert_eq!(query.to_string(), "departmentId=3&locationId=pune");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parses a query string; a leading `?` is ignored and pairs with an
    /// empty value are dropped.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        let pairs = form_urlencoded::parse(input.as_bytes())
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`, or deletes it when `value` is empty.
    ///
    /// An existing key keeps its position; duplicates are collapsed. Returns
    /// `true` if the representation changed.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        if value.is_empty() {
            return self.delete(key);
        }

        let before = self.pairs.len();
        let mut replaced = false;
        let mut changed = false;
        self.pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if replaced {
                return false;
            }
            replaced = true;
            if v != value {
                value.clone_into(v);
                changed = true;
            }
            true
        });

        if !replaced {
            self.pairs.push((key.to_string(), value.to_string()));
            return true;
        }
        changed || self.pairs.len() != before
    }

    /// Removes every pair with `key`. Returns `true` if anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    /// Removes all pairs.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Typed read of a filter value; empty when absent.
    #[must_use]
    pub fn filter(&self, key: FilterKey) -> &str {
        self.get(key.param()).unwrap_or_default()
    }

    /// Typed write of a filter value; empty clears the key.
    pub fn set_filter(&mut self, key: FilterKey, value: &str) -> bool {
        self.set(key.param(), value)
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}

/// Snapshot of the four filter values as committed to the query.
///
/// Only non-empty values are held; the job-list request carries exactly these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub search: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub function: Option<String>,
}

impl FilterSet {
    /// Reads the current filter values from `query`.
    #[must_use]
    pub fn from_query(query: &QueryParams) -> Self {
        let read = |key: FilterKey| {
            let value = query.filter(key);
            (!value.is_empty()).then(|| value.to_string())
        };
        Self {
            search: read(FilterKey::Search),
            department: read(FilterKey::Department),
            location: read(FilterKey::Location),
            function: read(FilterKey::Function),
        }
    }

    /// Value held for `key`, if active.
    #[must_use]
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Search => self.search.as_deref(),
            FilterKey::Department => self.department.as_deref(),
            FilterKey::Location => self.location.as_deref(),
            FilterKey::Function => self.function.as_deref(),
        }
    }

    /// Active `(param, value)` pairs in canonical key order.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        FilterKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.param(), value)))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.into_iter().all(|key| self.get(key).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_serialize_preserve_order_and_encoding() {
        let query = QueryParams::parse("?q=senior+rust&departmentId=d%201");

        assert_eq!(query.get("q"), Some("senior rust"));
        assert_eq!(query.get("departmentId"), Some("d 1"));
        assert_eq!(query.to_string(), "q=senior+rust&departmentId=d+1");
    }

    #[test]
    fn set_then_read_round_trips_and_clear_reads_empty() {
        for key in FilterKey::ALL {
            let mut query = QueryParams::new();
            assert!(query.set_filter(key, "v"));
            assert_eq!(query.filter(key), "v");

            assert!(query.set_filter(key, ""));
            assert_eq!(query.filter(key), "");
            assert!(query.is_empty());
        }
    }

    #[test]
    fn clearing_an_absent_key_is_a_no_op() {
        let mut query = QueryParams::parse("locationId=2");
        let before = query.clone();

        assert!(!query.set_filter(FilterKey::Department, ""));
        assert!(!query.delete("q"));
        assert_eq!(query, before);
    }

    #[test]
    fn parsing_drops_empty_values() {
        let query = QueryParams::parse("?q=&departmentId=d1&locationId");

        assert_eq!(query.get("q"), None);
        assert_eq!(query.get("locationId"), None);
        assert_eq!(query.to_string(), "departmentId=d1");
    }

    #[test]
    fn set_replaces_in_place_and_collapses_duplicates() {
        let mut query = QueryParams::parse("q=a&locationId=1&q=b");

        assert!(query.set("q", "c"));
        assert_eq!(query.to_string(), "q=c&locationId=1");
        assert!(!query.set("q", "c"));
    }

    #[test]
    fn filter_set_holds_only_non_empty_values() {
        let query = QueryParams::parse("q=&departmentId=d1&functionId=f2&utm=x");
        let filters = FilterSet::from_query(&query);

        assert_eq!(filters.params(), vec![("departmentId", "d1"), ("functionId", "f2")]);
        assert!(!filters.is_empty());
        assert!(FilterSet::from_query(&QueryParams::new()).is_empty());
    }

    #[test]
    fn filter_set_params_cover_every_combination() {
        for mask in 0u8..16 {
            let mut query = QueryParams::new();
            let mut expected = Vec::new();
            for (bit, key) in FilterKey::ALL.into_iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    query.set_filter(key, "x");
                    expected.push((key.param(), "x"));
                }
            }
            assert_eq!(FilterSet::from_query(&query).params(), expected);
        }
    }
}
