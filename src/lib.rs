//! zjobs: A Zellij plugin for browsing a company's job openings.
//!
//! zjobs talks to a job-board HTTP API and provides:
//! - A listing of open positions grouped by department
//! - Debounced title search and department / location / function filters
//! - Filter state mirrored into a shareable address such as `/?departmentId=3`
//! - A detail view with the formatted description, apply link and share links

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, key map                          │
//! │  - Listing / detail views, debounce, cancellation   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Routing Layer │
//! │ (ui/)         │   │ (api/)        │   │ (routing/)    │
//! │ - Rendering   │   │ - URL builder │   │ - Address     │
//! │ - Theming     │   │ - Decoding    │   │ - Query params│
//! │ - Markup      │   │ - Contexts    │   │ - Filters     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Job model, share links (domain/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - Rotating log file                                │
//! │  - File-based OTLP span export                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zjobs.wasm" {
//!         api_base_url "https://teknorix.jobsoid.com/api/v1"
//!         site_url "https://careers.example.com"
//!         company "Teknorix"
//!         start_path "/?departmentId=3"
//!         search_debounce_ms "500"
//!         open_command "xdg-open"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse [`Config`], initialize tracing,
//!    build the [`AppState`] and request web access.
//! 2. **Permissions granted**: [`Event::Start`] mounts the view for
//!    `start_path` and emits its fetches.
//! 3. **Responses**: each `WebRequestResult` becomes an [`Event::WebResponse`];
//!    answers for views that were left are dropped.
//! 4. **Rendering**: the view model is recomputed and printed every frame.
//!
//! # Example
//!
//! ```rust
//! use zjobs::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     start_path: "/?locationId=2".to_string(),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config)?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//! let fetches = actions.iter().filter(|a| matches!(a, Action::Fetch(_))).count();
//! assert_eq!(fetches, 4); // departments, locations, functions, jobs
//! # Ok::<(), zjobs::JobsError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod routing;
pub mod ui;

pub use app::{handle_event, map_key, Action, AppState, Event, InputMode, View};
pub use domain::{Job, JobsError, Lookup, Result};
pub use ui::Theme;

use api::ApiClient;
use routing::Location;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://teknorix.jobsoid.com/api/v1";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_COMPANY: &str = "Teknorix";
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zjobs.wasm" {
///     api_base_url "https://board.example/api/v1"
///     start_path "/jobs/42"
///     theme_file "~/.config/zjobs/nord.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the job-board API; endpoint paths are appended to it.
    pub api_base_url: String,

    /// Public origin of the board, used for share links.
    pub site_url: String,

    /// Company named in the header and in share titles.
    pub company: String,

    /// Address opened on start, e.g. `/?departmentId=3` or `/jobs/42`.
    pub start_path: String,

    /// Quiescence window before typed search text is applied.
    pub search_debounce: Duration,

    /// Host command that opens URLs (apply and share links).
    pub open_command: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for logs and spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            company: DEFAULT_COMPANY.to_string(),
            start_path: "/".to_string(),
            search_debounce: app::state::DEFAULT_DEBOUNCE,
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing or blank values fall back to the defaults; an unparsable
    /// `search_debounce_ms` falls back to 500.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use zjobs::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("company".to_string(), "Acme".to_string());
    /// map.insert("search_debounce_ms".to_string(), "250".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.company, "Acme");
    /// assert_eq!(config.search_debounce, Duration::from_millis(250));
    /// assert_eq!(config.open_command, "xdg-open");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let search_debounce = text("search_debounce_ms")
            .and_then(|ms| ms.parse::<u64>().ok())
            .map_or(defaults.search_debounce, Duration::from_millis);

        Self {
            api_base_url: text("api_base_url").unwrap_or(defaults.api_base_url),
            site_url: text("site_url").unwrap_or(defaults.site_url),
            company: text("company").unwrap_or(defaults.company),
            start_path: text("start_path").unwrap_or(defaults.start_path),
            search_debounce,
            open_command: text("open_command").unwrap_or(defaults.open_command),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Loads the configured theme: `theme_file`, then `theme`, then the default.
    /// Load failures are logged and fall through.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the application state for `config`. Nothing is fetched until
/// [`Event::Start`].
///
/// An invalid `api_base_url` is logged and replaced by the default.
///
/// # Errors
///
/// Returns [`JobsError::Config`] only if the default API address is rejected
/// as well.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(api = %config.api_base_url, start = %config.start_path, "initializing zjobs plugin");

    let client = match ApiClient::new(&config.api_base_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "invalid api_base_url, using default");
            ApiClient::new(DEFAULT_API_BASE_URL)?
        }
    };

    let mut state = AppState::new(Location::parse(&config.start_path), client, config.load_theme());
    state.site_url.clone_from(&config.site_url);
    state.company.clone_from(&config.company);
    state.debounce = config.search_debounce;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("company", "  "),
            ("search_debounce_ms", "soon"),
            ("theme", "catppuccin-latte"),
        ]));

        assert_eq!(config.company, DEFAULT_COMPANY);
        assert_eq!(config.search_debounce, Duration::from_millis(500));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config::from_zellij(&map(&[
            ("api_base_url", "https://board.example/api"),
            ("site_url", "https://careers.example"),
            ("company", "Acme"),
            ("start_path", "/jobs/42"),
            ("search_debounce_ms", "200"),
            ("theme", "catppuccin-frappe"),
        ]));

        let state = initialize(&config).unwrap();
        assert_eq!(state.client.base_url(), "https://board.example/api");
        assert_eq!(state.page_url(), "https://careers.example/jobs/42");
        assert_eq!(state.company, "Acme");
        assert_eq!(state.debounce, Duration::from_millis(200));
        assert_eq!(state.theme.name, "catppuccin-frappe");
        assert!(state.detail().is_some());
    }

    #[test]
    fn invalid_api_base_url_falls_back_to_default() {
        let config = Config {
            api_base_url: "not a url".to_string(),
            ..Default::default()
        };

        let state = initialize(&config).unwrap();
        assert_eq!(state.client.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn theme_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", include_str!("../themes/catppuccin-latte.toml")).unwrap();
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };

        assert_eq!(config.load_theme().name, "catppuccin-latte");
    }
}
