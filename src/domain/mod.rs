//! Domain layer for the zjobs plugin.
//!
//! Core types that are independent of Zellij APIs and of the rendering layer:
//! the job and lookup records returned by the board, share link generation, and
//! the error type shared across the crate.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`job`]: Job and lookup records
//! - [`share`]: Social share link templates

pub mod error;
pub mod job;
pub mod share;

pub use error::{JobsError, Result};
pub use job::{Job, Lookup};
pub use share::{ShareLink, ShareTarget};
