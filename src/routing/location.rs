//! Current address: a path plus its shareable query.

use crate::routing::QueryParams;
use std::fmt;

const JOBS_PREFIX: &str = "/jobs/";

/// An address within the plugin, e.g. `/?departmentId=3` or `/jobs/42`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: QueryParams,
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Location {
    /// The listing entry point `/` with no filters.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: QueryParams::new(),
        }
    }

    /// Address of a job's detail view.
    #[must_use]
    pub fn job(id: &str) -> Self {
        Self {
            path: format!("{JOBS_PREFIX}{id}"),
            query: QueryParams::new(),
        }
    }

    /// Parses `path?query`. A missing path becomes `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zjobs::routing::{Location, Route};
    ///
    /// let location = Location::parse("/?q=rust");
    /// assert_eq!(location.route(), Route::Listing);
    /// assert_eq!(location.query.get("q"), Some("rust"));
    ///
    /// assert_eq!(Location::parse("/jobs/42").route(), Route::Detail(Some("42".into())));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = input.split_once('?').unwrap_or((input, ""));
        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            path,
            query: QueryParams::parse(query),
        }
    }

    /// Resolves the view this address selects.
    #[must_use]
    pub fn route(&self) -> Route {
        match self.path.strip_prefix(JOBS_PREFIX) {
            Some(rest) => {
                let id = rest.trim_end_matches('/');
                Route::Detail((!id.is_empty()).then(|| id.to_string()))
            }
            None if self.path == "/jobs" => Route::Detail(None),
            None => Route::Listing,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

/// The two views the plugin can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Grouped, filterable job listing.
    Listing,
    /// Single job; `None` when the address carries no id.
    Detail(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_fall_back_to_listing() {
        assert_eq!(Location::parse("/careers").route(), Route::Listing);
        assert_eq!(Location::parse("").route(), Route::Listing);
        assert_eq!(Location::parse("?q=x").path, "/");
    }

    #[test]
    fn jobs_path_without_id_is_detail_without_id() {
        assert_eq!(Location::parse("/jobs/").route(), Route::Detail(None));
        assert_eq!(Location::parse("/jobs").route(), Route::Detail(None));
        assert_eq!(Location::parse("jobs/7/").route(), Route::Detail(Some("7".into())));
    }

    #[test]
    fn display_omits_empty_query() {
        assert_eq!(Location::root().to_string(), "/");
        assert_eq!(Location::job("42").to_string(), "/jobs/42");

        let mut location = Location::root();
        location.query.set("departmentId", "d1");
        assert_eq!(location.to_string(), "/?departmentId=d1");
        assert_eq!(Location::parse(&location.to_string()), location);
    }

    #[test]
    fn empty_query_values_do_not_survive_parsing() {
        assert_eq!(Location::parse("/?q=&departmentId=d1").to_string(), "/?departmentId=d1");
        assert_eq!(Location::parse("/?q=").to_string(), "/");
    }
}
