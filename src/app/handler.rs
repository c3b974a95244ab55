//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The plugin runtime maps host events and keys to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and the mounted view
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenSelected`, `Back`
//! - **Search input**: `FocusSearch`, `LeaveSearch`, `Char`, `Backspace`, `ClearSearchText`
//! - **Filters**: `CycleFilter`, `RemoveFilter`, `ClearAllFilters`
//! - **Outbound links**: `Apply`, `Share`
//! - **Host**: `Start`, `PermissionsDenied`, `TimerElapsed`, `WebResponse`
//!
//! Whenever an event changes the current address the handler also emits
//! [`Action::SetTitle`] so the pane title tracks it.
//!
//! # Example
//!
//! ```rust
//! use zjobs::api::ApiClient;
//! use zjobs::app::{handle_event, Action, AppState, Event};
//! use zjobs::routing::Location;
//! use zjobs::ui::Theme;
//!
//! let client = ApiClient::new("https://board.example/api/v1")?;
//! let mut state = AppState::new(Location::parse("/jobs/"), client, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::SetTitle("zjobs /jobs/".to_string())]);
//! # Ok::<(), zjobs::JobsError>(())
//! ```

use crate::api::ApiResponse;
use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::share::share_link;
use crate::domain::ShareTarget;
use crate::routing::{FilterKey, Location};

/// Prefix of the pane title; the current address follows it.
pub const TITLE_PREFIX: &str = "zjobs";

/// Events triggered by user input or the plugin host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions were granted; mount the view for the start address.
    Start,
    /// The host refused web access.
    PermissionsDenied,

    /// Moves the card selection (listing) or scrolls the description (detail).
    KeyDown,
    KeyUp,
    /// Opens the selected job's detail view.
    OpenSelected,
    /// Opens the apply page of the selected (listing) or shown (detail) job.
    Apply,
    /// Returns to the previous address.
    Back,
    /// Hides the plugin.
    CloseFocus,

    /// Enters search input mode.
    FocusSearch,
    /// Leaves search input mode, keeping the text.
    LeaveSearch,
    Char(char),
    Backspace,
    /// Empties the search box (debounced like typing).
    ClearSearchText,

    /// Steps a dropdown to its next (or previous) option.
    CycleFilter {
        key: FilterKey,
        forward: bool,
    },
    /// Removes the n-th applied filter chip, 1-based.
    RemoveFilter(usize),
    ClearAllFilters,

    /// Opens a share link for the shown job.
    Share(ShareTarget),

    /// The oldest debounce timer fired.
    TimerElapsed,
    /// A web request completed.
    WebResponse(ApiResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean asks the runtime to re-render.
///
/// # Errors
///
/// Currently infallible at runtime; fetch failures are absorbed into view
/// state. The `Result` keeps the runtime contract uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_kind(event)).entered();

    let address = state.location.to_string();
    let (render, mut actions) = dispatch(state, event);

    let current = state.location.to_string();
    if current != address || matches!(event, Event::Start) {
        tracing::debug!(address = %current, "address changed");
        actions.push(Action::SetTitle(format!("{TITLE_PREFIX} {current}")));
    }

    Ok((render, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Start => (true, state.start()),
        Event::PermissionsDenied => {
            tracing::warn!("web access permission denied");
            state.notice = Some("Web access was not granted; job openings cannot be loaded.".to_string());
            (true, vec![])
        }
        Event::KeyDown => {
            if state.with_listing(|listing, _, _| listing.move_selection_down()).is_none() {
                if let Some(detail) = state.detail_mut() {
                    detail.scroll_down();
                }
            }
            (true, vec![])
        }
        Event::KeyUp => {
            if state.with_listing(|listing, _, _| listing.move_selection_up()).is_none() {
                if let Some(detail) = state.detail_mut() {
                    detail.scroll_up();
                }
            }
            (true, vec![])
        }
        Event::OpenSelected => {
            let Some(job) = state.listing().and_then(|listing| listing.selected_job()) else {
                tracing::debug!("no job selected");
                return (false, vec![]);
            };
            tracing::debug!(job_id = %job.id, title = %job.title, "opening job");
            (true, state.navigate(Location::job(&job.id)))
        }
        Event::Apply => {
            let job = match state.listing() {
                Some(listing) => listing.selected_job(),
                None => state.detail().and_then(|detail| detail.job().cloned()),
            };
            match job.and_then(|job| job.apply_url) {
                Some(url) => (false, vec![Action::OpenUrl(url)]),
                None => {
                    tracing::debug!("no apply url for current job");
                    (false, vec![])
                }
            }
        }
        Event::Back => {
            if state.detail().is_none() {
                return (false, vec![]);
            }
            (true, state.back())
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::FocusSearch => {
            if state.listing().is_none() {
                return (false, vec![]);
            }
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::LeaveSearch => {
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return (false, vec![]);
            }
            match state.with_listing(|listing, _, _| listing.type_char(*c)) {
                Some(generation) => {
                    tracing::trace!(char = %c, generation, "search text updated");
                    (true, vec![state.arm_debounce(generation)])
                }
                None => (false, vec![]),
            }
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return (false, vec![]);
            }
            match state.with_listing(|listing, _, _| listing.backspace()).flatten() {
                Some(generation) => (true, vec![state.arm_debounce(generation)]),
                None => (false, vec![]),
            }
        }
        Event::ClearSearchText => {
            let generation = state.with_listing(|listing, _, _| {
                (!listing.search.text().is_empty()).then(|| listing.set_search_text(""))
            });
            match generation.flatten() {
                Some(generation) => (true, vec![state.arm_debounce(generation)]),
                None => (false, vec![]),
            }
        }
        Event::CycleFilter { key, forward } => {
            let request = state
                .with_listing(|listing, query, client| listing.cycle_filter(*key, *forward, query, client))
                .flatten();
            (true, request.into_iter().map(Action::Fetch).collect())
        }
        Event::RemoveFilter(number) => {
            let key = state.listing().and_then(|listing| {
                listing
                    .applied_filters(&state.location.query)
                    .get(number.wrapping_sub(1))
                    .map(|filter| filter.key)
            });
            let Some(key) = key else {
                return (false, vec![]);
            };
            tracing::debug!(key = %key, "removing filter");
            let request = state
                .with_listing(|listing, query, client| listing.remove_filter(key, query, client))
                .flatten();
            (true, request.into_iter().map(Action::Fetch).collect())
        }
        Event::ClearAllFilters => {
            let request = state
                .with_listing(|listing, query, client| listing.clear_all(query, client))
                .flatten();
            (true, request.into_iter().map(Action::Fetch).collect())
        }
        Event::Share(target) => {
            let Some(job) = state.detail().and_then(|detail| detail.job()) else {
                return (false, vec![]);
            };
            let link = share_link(*target, job, &state.page_url(), &state.company);
            tracing::debug!(target = target.label(), url = %link.url, "sharing job");
            (false, vec![Action::OpenUrl(link.url)])
        }
        Event::TimerElapsed => match state.timer_elapsed() {
            Some(request) => (true, vec![Action::Fetch(request)]),
            None => (false, vec![]),
        },
        Event::WebResponse(response) => (state.handle_response(response), vec![]),
    }
}

/// Short event name for spans; keystrokes and bodies stay out of the logs.
const fn event_kind(event: &Event) -> &'static str {
    match event {
        Event::Start => "start",
        Event::PermissionsDenied => "permissions_denied",
        Event::KeyDown => "key_down",
        Event::KeyUp => "key_up",
        Event::OpenSelected => "open_selected",
        Event::Apply => "apply",
        Event::Back => "back",
        Event::CloseFocus => "close_focus",
        Event::FocusSearch => "focus_search",
        Event::LeaveSearch => "leave_search",
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::ClearSearchText => "clear_search_text",
        Event::CycleFilter { .. } => "cycle_filter",
        Event::RemoveFilter(_) => "remove_filter",
        Event::ClearAllFilters => "clear_all_filters",
        Event::Share(_) => "share",
        Event::TimerElapsed => "timer_elapsed",
        Event::WebResponse(_) => "web_response",
    }
}
