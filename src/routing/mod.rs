//! Addresses and the shareable query.
//!
//! The listing's filter state lives in the query of the current [`Location`];
//! views read it from there and write it back, so any address can be reopened
//! later and shows the same filtered view.

pub mod location;
pub mod query;

pub use location::{Location, Route};
pub use query::{FilterKey, FilterSet, QueryParams};
