//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zjobs library and the Zellij plugin
//! system. Everything that touches the host lives here: permissions, event
//! subscriptions, web requests, timers, opening URLs and the pane title.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request web access; the grant starts the first view
//! 3. **Update**: Map host events to library events, execute returned actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key` → key map for the mounted view and input mode
//! - `WebRequestResult` → `Event::WebResponse` (the request context travels
//!   in the host's context map)
//! - `Timer` → `Event::TimerElapsed`
//! - `PermissionRequestResult` → `Event::Start` / `Event::PermissionsDenied`
//!
//! The library is host-agnostic, so off the WASM target this binary is empty.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;
#[cfg(target_family = "wasm")]
use zjobs::api::{ApiResponse, RequestContext};
#[cfg(target_family = "wasm")]
use zjobs::{handle_event, map_key, Action, AppState, Config, Event};

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {}

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the host-only configuration.
#[cfg(target_family = "wasm")]
#[derive(Default)]
struct State {
    /// `None` until load, or when the configuration could not be used.
    app: Option<AppState>,

    /// Reason `app` is missing after load.
    load_error: Option<String>,

    /// Host command used to open apply and share links.
    open_command: String,
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, then requests
    /// permissions and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: Call the job-board API
    /// - `RunCommands`: Open links with `open_command`
    /// - `ChangeApplicationState`: Rename the plugin pane
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zjobs::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.open_command.clone_from(&config.open_command);
        match zjobs::initialize(&config) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                tracing::error!(error = %e, "failed to initialize");
                self.load_error = Some(e.to_string());
            }
        }

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::RunCommands,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates the host event, delegates to `handle_event` and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let Some(app) = self.app.as_mut() else {
            return false;
        };

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                tracing::trace!(bare_key = ?key.bare_key, "key event");
                match map_key(app, key) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerElapsed,
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => match permissions {
                PermissionStatus::Granted => {
                    tracing::debug!("permissions granted - starting");
                    Event::Start
                }
                PermissionStatus::Denied => {
                    tracing::warn!("permissions denied - plugin functionality limited");
                    Event::PermissionsDenied
                }
            },
            _ => return false,
        };

        match handle_event(app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        match &self.app {
            Some(app) => zjobs::ui::render(app, rows, cols),
            None => {
                let reason = self.load_error.as_deref().unwrap_or("not loaded");
                println!("zjobs could not start: {reason}");
            }
        }
    }
}

#[cfg(target_family = "wasm")]
impl State {
    /// Short name of a host event for span fields.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Results without a readable context were not issued by this plugin.
    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(context) = RequestContext::from_map(context) else {
            tracing::warn!(status, "web response without request context");
            return None;
        };
        tracing::debug!(resource = %context.resource, status, bytes = body.len(), "web response");
        Some(Event::WebResponse(ApiResponse::new(context, status, body)))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::Fetch(request) => {
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    headers,
                    Vec::new(),
                    request.context.to_map(),
                );
            }
            Action::ArmTimer(delay) => set_timeout(delay.as_secs_f64()),
            Action::OpenUrl(url) => {
                run_command(&[self.open_command.as_str(), url.as_str()], BTreeMap::new());
            }
            Action::SetTitle(title) => rename_plugin_pane(get_plugin_ids().plugin_id, title),
            Action::CloseFocus => hide_self(),
        }
    }
}
