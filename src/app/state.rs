//! Application state and navigation.
//!
//! [`AppState`] is the single source of truth for the plugin. It owns the
//! current [`Location`] (whose query holds the listing filters), the history
//! of previous addresses, and the mounted view. Every navigation mounts a
//! fresh view under a new mount id; responses and timers tagged with an older
//! mount id are dropped when they arrive, which is how a view that was left
//! cancels its outstanding work.
//!
//! # Debounce timers
//!
//! Host timers all share the configured debounce duration and fire in the
//! order they were armed, so tokens are kept in a FIFO queue and popped one
//! per `Timer` event. A token is never discarded early; a stale one simply
//! fails the mount check when its timer fires.

use crate::api::{ApiClient, ApiRequest, ApiResponse};
use crate::app::detail::DetailState;
use crate::app::listing::ListingState;
use crate::app::modes::InputMode;
use crate::app::Action;
use crate::routing::{Location, QueryParams, Route};
use crate::ui::theme::Theme;
use std::collections::VecDeque;
use std::time::Duration;

/// Default quiescence window before the search text is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// The mounted view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Listing(ListingState),
    Detail(DetailState),
}

impl View {
    fn mount(location: &Location, mount: u64, client: &ApiClient) -> (Self, Vec<ApiRequest>) {
        match location.route() {
            Route::Listing => {
                let mut listing = ListingState::new(mount, &location.query);
                let requests = listing.start(&location.query, client);
                (Self::Listing(listing), requests)
            }
            Route::Detail(job_id) => {
                let detail = DetailState::new(mount, job_id);
                let requests = detail.start(client).into_iter().collect();
                (Self::Detail(detail), requests)
            }
        }
    }
}

/// A debounce timer in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerToken {
    mount: u64,
    generation: u64,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: Theme,
    pub client: ApiClient,

    /// Public origin of the job board, prefixed to addresses in share links.
    pub site_url: String,
    /// Company named in share titles when a job carries none.
    pub company: String,
    pub debounce: Duration,

    /// Current address. Its query is the listing's filter state.
    pub location: Location,
    history: Vec<Location>,

    pub view: View,
    pub input_mode: InputMode,

    /// Set when the host refused a permission the plugin needs.
    pub notice: Option<String>,

    mount: u64,
    timers: VecDeque<TimerToken>,
}

impl AppState {
    /// Creates the state for `location`. Nothing is fetched until [`Self::start`].
    #[must_use]
    pub fn new(location: Location, client: ApiClient, theme: Theme) -> Self {
        let view = match location.route() {
            Route::Listing => View::Listing(ListingState::new(0, &location.query)),
            Route::Detail(job_id) => View::Detail(DetailState::new(0, job_id)),
        };

        Self {
            theme,
            client,
            site_url: "http://localhost:3000".to_string(),
            company: "Teknorix".to_string(),
            debounce: DEFAULT_DEBOUNCE,
            location,
            history: Vec::new(),
            view,
            input_mode: InputMode::Normal,
            notice: None,
            mount: 0,
            timers: VecDeque::new(),
        }
    }

    /// Mounts the view for the current address and returns its fetches.
    pub fn start(&mut self) -> Vec<Action> {
        self.notice = None;
        self.mount_view()
    }

    /// Moves to `location`, remembering the current address for [`Self::back`].
    pub fn navigate(&mut self, location: Location) -> Vec<Action> {
        tracing::debug!(from = %self.location, to = %location, "navigating");
        let previous = std::mem::replace(&mut self.location, location);
        self.history.push(previous);
        self.mount_view()
    }

    /// Returns to the previous address, or the listing root when there is none.
    pub fn back(&mut self) -> Vec<Action> {
        let location = self.history.pop().unwrap_or_default();
        tracing::debug!(from = %self.location, to = %location, "navigating back");
        self.location = location;
        self.mount_view()
    }

    fn mount_view(&mut self) -> Vec<Action> {
        self.mount += 1;
        self.input_mode = InputMode::Normal;

        let (view, requests) = View::mount(&self.location, self.mount, &self.client);
        tracing::debug!(mount = self.mount, route = ?self.location.route(), requests = requests.len(), "mounted view");
        self.view = view;
        requests.into_iter().map(Action::Fetch).collect()
    }

    #[must_use]
    pub const fn mount(&self) -> u64 {
        self.mount
    }

    /// Number of previous addresses available to [`Self::back`].
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Full address of the current view on the public site.
    #[must_use]
    pub fn page_url(&self) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), self.location)
    }

    /// Runs `f` against the mounted listing with the current query.
    ///
    /// Returns `None` when the detail view is mounted.
    pub fn with_listing<R>(
        &mut self,
        f: impl FnOnce(&mut ListingState, &mut QueryParams, &ApiClient) -> R,
    ) -> Option<R> {
        match &mut self.view {
            View::Listing(listing) => Some(f(listing, &mut self.location.query, &self.client)),
            View::Detail(_) => None,
        }
    }

    #[must_use]
    pub fn listing(&self) -> Option<&ListingState> {
        match &self.view {
            View::Listing(listing) => Some(listing),
            View::Detail(_) => None,
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailState> {
        match &self.view {
            View::Detail(detail) => Some(detail),
            View::Listing(_) => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailState> {
        match &mut self.view {
            View::Detail(detail) => Some(detail),
            View::Listing(_) => None,
        }
    }

    /// Queues a debounce token for the listing and returns the timer action.
    pub fn arm_debounce(&mut self, generation: u64) -> Action {
        self.timers.push_back(TimerToken {
            mount: self.mount,
            generation,
        });
        Action::ArmTimer(self.debounce)
    }

    /// Number of debounce timers still in flight.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// The oldest armed timer fired. Commits the search text when it is the
    /// latest keystroke of the mounted listing.
    pub fn timer_elapsed(&mut self) -> Option<ApiRequest> {
        let Some(token) = self.timers.pop_front() else {
            tracing::debug!("timer fired with no token queued");
            return None;
        };
        if token.mount != self.mount {
            tracing::debug!(token_mount = token.mount, mount = self.mount, "dropping orphaned timer");
            return None;
        }
        self.with_listing(|listing, query, client| listing.commit_search(token.generation, query, client))
            .flatten()
    }

    /// Routes a response to the mounted view. Returns `true` if it changed.
    pub fn handle_response(&mut self, response: &ApiResponse) -> bool {
        if response.context.mount != self.mount {
            tracing::debug!(
                resource = %response.context.resource,
                response_mount = response.context.mount,
                mount = self.mount,
                "dropping orphaned response"
            );
            return false;
        }

        match &mut self.view {
            View::Listing(listing) => listing.handle_response(response),
            View::Detail(detail) => detail.handle_response(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Resource;

    fn state(address: &str) -> AppState {
        let client = ApiClient::new("https://board.example/api/v1").unwrap();
        AppState::new(Location::parse(address), client, Theme::default())
    }

    fn fetches(actions: &[Action]) -> Vec<&ApiRequest> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::Fetch(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_mounts_the_routed_view() {
        let mut listing = state("/?locationId=2");
        assert_eq!(fetches(&listing.start()).len(), 4);
        assert!(listing.listing().is_some());

        let mut detail = state("/jobs/9");
        let actions = detail.start();
        assert_eq!(fetches(&actions)[0].url, "https://board.example/api/v1/jobs/9");

        let mut orphan = state("/jobs/");
        assert!(orphan.start().is_empty());
    }

    #[test]
    fn back_restores_previous_listing_address() {
        let mut state = state("/?departmentId=d1");
        state.start();
        state.navigate(Location::job("5"));
        assert_eq!(state.location.to_string(), "/jobs/5");

        state.back();
        assert_eq!(state.location.to_string(), "/?departmentId=d1");
        assert!(state.listing().is_some());

        state.back();
        assert_eq!(state.location, Location::root());
    }

    #[test]
    fn responses_for_an_unmounted_view_are_dropped() {
        let mut state = state("/jobs/5");
        let actions = state.start();
        let old = fetches(&actions)[0].context;
        state.back();

        let response = ApiResponse::new(old, 200, r#"{"id":5,"title":"X"}"#);
        assert!(!state.handle_response(&response));
        assert_eq!(old.resource, Resource::JobDetails);
    }

    #[test]
    fn timers_from_a_previous_mount_do_not_commit() {
        let mut state = state("/");
        state.start();
        let generation = state.with_listing(|l, _, _| l.type_char('x')).unwrap();
        state.arm_debounce(generation);

        state.navigate(Location::job("1"));
        state.back();

        assert!(state.timer_elapsed().is_none());
        assert_eq!(state.pending_timers(), 0);
        assert!(state.location.query.is_empty());
    }

    #[test]
    fn page_url_joins_site_and_address() {
        let mut state = state("/jobs/42");
        state.site_url = "https://careers.example/".to_string();
        assert_eq!(state.page_url(), "https://careers.example/jobs/42");
    }
}
