//! Job-board API client.
//!
//! Zellij plugins cannot open sockets; HTTP goes through the host's
//! `web_request` command and the result arrives later as an event. The client
//! therefore splits each call in two: [`ApiClient`] builds an [`ApiRequest`]
//! (URL plus correlation context) for the runtime to issue, and the `decode_*`
//! functions turn the resulting [`ApiResponse`] into domain records.
//!
//! # Endpoints
//!
//! | Call | Request |
//! |------|---------|
//! | [`ApiClient::fetch_jobs`] | `GET {base}/jobs?q=&departmentId=&locationId=&functionId=` |
//! | [`ApiClient::fetch_job_details`] | `GET {base}/jobs/{id}` |
//! | [`ApiClient::fetch_locations`] | `GET {base}/locations` |
//! | [`ApiClient::fetch_departments`] | `GET {base}/departments` |
//! | [`ApiClient::fetch_functions`] | `GET {base}/functions` |

pub mod client;
pub mod context;
pub mod decode;

pub use client::{ApiClient, ApiRequest};
pub use context::{RequestContext, Resource};
pub use decode::{decode_job, decode_jobs, decode_lookups, ApiResponse};
