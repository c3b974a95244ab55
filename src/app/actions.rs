//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! library never calls the Zellij host itself; the plugin shim in `main.rs`
//! executes these in order.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use zjobs::app::Action;
//!
//! let actions = vec![
//!     Action::ArmTimer(Duration::from_millis(500)),
//!     Action::SetTitle("zjobs /?q=rust".to_string()),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::api::ApiRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Issues a GET through the host's `web_request`.
    ///
    /// The request context travels in the context map and comes back with the
    /// `WebRequestResult` event.
    Fetch(ApiRequest),

    /// Arms a one-shot host timer.
    ///
    /// Used for the search debounce. The handler keeps the matching token; the
    /// runtime only has to deliver the `Timer` event back.
    ArmTimer(Duration),

    /// Opens a URL with the configured opener command.
    OpenUrl(String),

    /// Renames the plugin pane, so the current address stays visible.
    SetTitle(String),
}
