//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the domain,
//! routing and API layers. It never calls the Zellij host directly.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer / WebRequestResult → Event → handle_event → State Mutations → Actions
//!                                              ↑                              ↓
//!                                              └── ApiResponse ←── web_request ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Generation-tagged debounce of the search text
//! - [`derived`]: Department grouping and applied-filter summary
//! - [`detail`]: Detail view state
//! - [`handler`]: Event processing logic
//! - [`keymap`]: Key bindings per view and input mode
//! - [`listing`]: Listing view state
//! - [`modes`]: Input mode
//! - [`state`]: Central state container, navigation and cancellation
//! - [`view`]: View model computation

pub mod actions;
pub mod debounce;
pub mod derived;
pub mod detail;
pub mod handler;
pub mod keymap;
pub mod listing;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::InputMode;
pub use state::{AppState, View};
