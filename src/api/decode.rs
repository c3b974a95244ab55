//! Response decoding.
//!
//! Every failure (non-2xx status, transport error reported by the host,
//! undecodable body) is logged here with its request context and surfaced as
//! [`JobsError::Fetch`]. Callers decide what to show; nothing is retried.

use crate::api::RequestContext;
use crate::domain::error::{JobsError, Result};
use crate::domain::{Job, Lookup};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A completed request as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub context: RequestContext,
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(context: RequestContext, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            context,
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decodes a job-list response. A body that is not a JSON array yields an
/// empty list.
///
/// # Errors
///
/// Returns [`JobsError::Fetch`] on a non-success status or malformed JSON.
pub fn decode_jobs(response: &ApiResponse) -> Result<Vec<Job>> {
    match parse_body(response)? {
        value @ Value::Array(_) => from_value(response, value),
        other => {
            tracing::warn!(
                resource = %response.context.resource,
                kind = json_kind(&other),
                "job list response is not an array, treating as empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Decodes a job-detail response. A `null` or empty body means the board has
/// no such record.
///
/// # Errors
///
/// Returns [`JobsError::Fetch`] on a non-success status or a body that is not
/// a job record.
pub fn decode_job(response: &ApiResponse) -> Result<Option<Job>> {
    if response.is_success() && response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    match parse_body(response)? {
        Value::Null => Ok(None),
        value => from_value(response, value).map(Some),
    }
}

/// Decodes a department, location or function list.
///
/// # Errors
///
/// Returns [`JobsError::Fetch`] on a non-success status or a body that is not
/// a list of lookups.
pub fn decode_lookups(response: &ApiResponse) -> Result<Vec<Lookup>> {
    let value = parse_body(response)?;
    from_value(response, value)
}

fn parse_body(response: &ApiResponse) -> Result<Value> {
    if !response.is_success() {
        let message = format!("Request failed with status code {}", response.status);
        tracing::error!(
            resource = %response.context.resource,
            status = response.status,
            body = %String::from_utf8_lossy(&response.body),
            "api request failed"
        );
        return Err(JobsError::Fetch(message));
    }

    serde_json::from_slice(&response.body).map_err(|e| decode_error(response, &e))
}

fn from_value<T: DeserializeOwned>(response: &ApiResponse, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| decode_error(response, &e))
}

fn decode_error(response: &ApiResponse, err: &serde_json::Error) -> JobsError {
    tracing::error!(
        resource = %response.context.resource,
        status = response.status,
        error = %err,
        "failed to decode api response"
    );
    JobsError::Fetch(format!("Invalid response from server: {err}"))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Resource;

    fn response(resource: Resource, status: u16, body: &str) -> ApiResponse {
        ApiResponse::new(RequestContext::new(resource, 1, 1), status, body.as_bytes())
    }

    #[test]
    fn job_list_decodes_array() {
        let jobs = decode_jobs(&response(
            Resource::Jobs,
            200,
            r#"[{"id":1,"title":"Engineer","department":{"id":"d1","title":"Engineering"}}]"#,
        ))
        .unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].department_id(), Some("d1"));
    }

    #[test]
    fn non_array_job_list_is_empty() {
        assert!(decode_jobs(&response(Resource::Jobs, 200, r#"{"items":[]}"#)).unwrap().is_empty());
        assert!(decode_jobs(&response(Resource::Jobs, 200, "null")).unwrap().is_empty());
    }

    #[test]
    fn non_success_status_is_a_fetch_error() {
        let err = decode_jobs(&response(Resource::Jobs, 500, "oops")).unwrap_err();
        assert_eq!(err, JobsError::Fetch("Request failed with status code 500".to_string()));

        let err = decode_job(&response(Resource::JobDetails, 404, "")).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[test]
    fn null_or_empty_detail_is_no_record() {
        assert_eq!(decode_job(&response(Resource::JobDetails, 200, "null")).unwrap(), None);
        assert_eq!(decode_job(&response(Resource::JobDetails, 200, "")).unwrap(), None);

        let job = decode_job(&response(Resource::JobDetails, 200, r#"{"id":"7","title":"PM"}"#)).unwrap();
        assert_eq!(job.map(|j| j.title), Some("PM".to_string()));
    }

    #[test]
    fn malformed_bodies_are_fetch_errors() {
        assert!(matches!(
            decode_lookups(&response(Resource::Locations, 200, "<html>")),
            Err(JobsError::Fetch(_))
        ));
        assert!(matches!(
            decode_lookups(&response(Resource::Locations, 200, r#"{"id":1}"#)),
            Err(JobsError::Fetch(_))
        ));
    }

    #[test]
    fn lookups_decode_numeric_ids() {
        let lookups = decode_lookups(&response(
            Resource::Departments,
            200,
            r#"[{"id":1,"title":"Engineering"},{"id":"d2","title":"Sales"}]"#,
        ))
        .unwrap();

        assert_eq!(lookups, vec![Lookup::new("1", "Engineering"), Lookup::new("d2", "Sales")]);
    }
}
