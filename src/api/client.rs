//! Request builder for the job-board REST API.

use crate::api::{RequestContext, Resource};
use crate::domain::error::{JobsError, Result};
use crate::routing::FilterSet;
use url::Url;

/// A GET request ready to be issued by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub context: RequestContext,
}

/// Stateless client for the five board endpoints.
///
/// Building a request never fails once the client exists; the base URL is
/// validated up front.
///
/// # Examples
///
/// ```
/// use zjobs::api::ApiClient;
/// use zjobs::routing::{FilterSet, QueryParams};
///
/// let client = ApiClient::new("https://board.example/api/v1").unwrap();
/// let filters = FilterSet::from_query(&QueryParams::parse("q=rust engineer&locationId=2"));
/// let request = client.fetch_jobs(&filters, 1, 1);
/// assert_eq!(
///     request.url,
///     "https://board.example/api/v1/jobs?q=rust+engineer&locationId=2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: Url,
}

impl ApiClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`JobsError::Config`] when the URL does not parse or is not an
    /// `http(s)` URL with a path.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim())
            .map_err(|e| JobsError::Config(format!("invalid api_base_url '{base_url}': {e}")))?;

        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(JobsError::Config(format!(
                "api_base_url must be an http(s) URL, got '{base_url}'"
            )));
        }

        Ok(Self { base })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// `GET {base}/jobs` with exactly the active filter values.
    #[must_use]
    pub fn fetch_jobs(&self, filters: &FilterSet, mount: u64, seq: u64) -> ApiRequest {
        let mut url = self.endpoint(&["jobs"]);
        let params = filters.params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        self.request(url, RequestContext::new(Resource::Jobs, mount, seq))
    }

    /// `GET {base}/jobs/{id}`.
    #[must_use]
    pub fn fetch_job_details(&self, id: &str, mount: u64) -> ApiRequest {
        let url = self.endpoint(&["jobs", id]);
        self.request(url, RequestContext::new(Resource::JobDetails, mount, 0))
    }

    /// `GET {base}/departments`.
    #[must_use]
    pub fn fetch_departments(&self, mount: u64) -> ApiRequest {
        self.lookup(Resource::Departments, mount)
    }

    /// `GET {base}/locations`.
    #[must_use]
    pub fn fetch_locations(&self, mount: u64) -> ApiRequest {
        self.lookup(Resource::Locations, mount)
    }

    /// `GET {base}/functions`.
    #[must_use]
    pub fn fetch_functions(&self, mount: u64) -> ApiRequest {
        self.lookup(Resource::Functions, mount)
    }

    fn lookup(&self, resource: Resource, mount: u64) -> ApiRequest {
        let url = self.endpoint(&[resource.as_str()]);
        self.request(url, RequestContext::new(resource, mount, 0))
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    #[allow(clippy::unused_self)]
    fn request(&self, url: Url, context: RequestContext) -> ApiRequest {
        tracing::debug!(resource = %context.resource, url = %url, mount = context.mount, seq = context.seq, "built api request");
        ApiRequest {
            url: url.into(),
            context,
        }
    }
}
