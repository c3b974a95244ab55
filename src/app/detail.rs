//! Detail view state.

use crate::api::{decode_job, ApiClient, ApiRequest, ApiResponse, Resource};
use crate::domain::Job;
use crate::ui::markup::{parse_description, Block};

/// Shown when the address carries no job id.
pub const MISSING_ID_MESSAGE: &str = "Job ID not provided in URL.";

/// Shown when a fetch failure has no message of its own.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to load job details.";

/// Where the detail view is in its single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    /// The fetch failed, or there was nothing to fetch.
    Failed(String),
    /// The board answered with no record.
    Missing,
    Loaded(Box<Job>),
}

/// State of one mounted detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    mount: u64,
    pub job_id: Option<String>,
    pub status: DetailStatus,
    pub description: Vec<Block>,
    pub scroll: usize,
}

impl DetailState {
    /// Creates the view for `job_id`. Without an id the view fails right away.
    #[must_use]
    pub fn new(mount: u64, job_id: Option<String>) -> Self {
        let status = if job_id.is_some() {
            DetailStatus::Loading
        } else {
            DetailStatus::Failed(MISSING_ID_MESSAGE.to_string())
        };
        Self {
            mount,
            job_id,
            status,
            description: Vec::new(),
            scroll: 0,
        }
    }

    #[must_use]
    pub const fn mount(&self) -> u64 {
        self.mount
    }

    /// The single detail fetch, if there is an id to fetch.
    #[must_use]
    pub fn start(&self, client: &ApiClient) -> Option<ApiRequest> {
        let Some(id) = self.job_id.as_deref() else {
            tracing::debug!("no job id in address, skipping fetch");
            return None;
        };
        Some(client.fetch_job_details(id, self.mount))
    }

    /// Applies the detail response. Returns `true` if the view changed.
    pub fn handle_response(&mut self, response: &ApiResponse) -> bool {
        if response.context.resource != Resource::JobDetails || self.status != DetailStatus::Loading {
            return false;
        }

        self.status = match decode_job(response) {
            Ok(Some(job)) => {
                self.description = parse_description(job.description());
                tracing::debug!(job_id = %job.id, blocks = self.description.len(), "job details loaded");
                DetailStatus::Loaded(Box::new(job))
            }
            Ok(None) => DetailStatus::Missing,
            Err(err) => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    DetailStatus::Failed(FETCH_FALLBACK_MESSAGE.to_string())
                } else {
                    DetailStatus::Failed(message)
                }
            }
        };
        self.scroll = 0;
        true
    }

    #[must_use]
    pub fn job(&self) -> Option<&Job> {
        match &self.status {
            DetailStatus::Loaded(job) => Some(&**job),
            _ => None,
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.description.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestContext;

    fn client() -> ApiClient {
        ApiClient::new("https://board.example/api/v1").unwrap()
    }

    fn respond(status: u16, body: &str) -> ApiResponse {
        ApiResponse::new(RequestContext::new(Resource::JobDetails, 4, 0), status, body.as_bytes())
    }

    #[test]
    fn missing_id_fails_without_a_request() {
        let detail = DetailState::new(4, None);

        assert!(detail.start(&client()).is_none());
        assert_eq!(detail.status, DetailStatus::Failed("Job ID not provided in URL.".to_string()));
    }

    #[test]
    fn failure_message_is_the_rejection_message() {
        let mut detail = DetailState::new(4, Some("42".to_string()));
        let request = detail.start(&client()).unwrap();
        assert_eq!(request.url, "https://board.example/api/v1/jobs/42");

        assert!(detail.handle_response(&respond(404, "")));
        assert_eq!(
            detail.status,
            DetailStatus::Failed("Request failed with status code 404".to_string())
        );
    }

    #[test]
    fn null_record_is_missing() {
        let mut detail = DetailState::new(4, Some("42".to_string()));
        detail.handle_response(&respond(200, "null"));
        assert_eq!(detail.status, DetailStatus::Missing);
    }

    #[test]
    fn loaded_job_carries_parsed_description_and_scrolls_within_it() {
        let mut detail = DetailState::new(4, Some("42".to_string()));
        detail.handle_response(&respond(
            200,
            r#"{"id":42,"title":"Engineer","description":"<p>One</p><p>Two</p>"}"#,
        ));

        assert_eq!(detail.job().map(|j| j.title.as_str()), Some("Engineer"));
        assert_eq!(detail.description.len(), 2);

        detail.scroll_down();
        detail.scroll_down();
        assert_eq!(detail.scroll, 1);
        detail.scroll_up();
        detail.scroll_up();
        assert_eq!(detail.scroll, 0);
    }

    #[test]
    fn a_second_response_is_ignored() {
        let mut detail = DetailState::new(4, Some("42".to_string()));
        detail.handle_response(&respond(200, "null"));
        assert!(!detail.handle_response(&respond(500, "")));
        assert_eq!(detail.status, DetailStatus::Missing);
    }
}
