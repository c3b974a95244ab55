//! Listing view state.
//!
//! The listing owns the fetched jobs and lookups, the loading and error flags,
//! and the debounced shadow of the search text. Filter values themselves live
//! in the shareable query, which every operation receives as `&mut
//! QueryParams`; after each write the listing compares the query's filters
//! with the ones it last fetched and issues a new job-list request when they
//! differ.

use crate::api::{decode_jobs, decode_lookups, ApiClient, ApiRequest, ApiResponse, Resource};
use crate::app::debounce::Debouncer;
use crate::app::derived::{applied_filters, group_by_department, AppliedFilter, JobGroup, Lookups};
use crate::domain::error::{JobsError, Result};
use crate::domain::{Job, Lookup};
use crate::routing::{FilterKey, FilterSet, QueryParams};

/// Lookup responses collected until all three have arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LookupJoin {
    departments: Option<Vec<Lookup>>,
    locations: Option<Vec<Lookup>>,
    functions: Option<Vec<Lookup>>,
    failed: bool,
}

impl LookupJoin {
    fn complete(&mut self) -> Option<Lookups> {
        if self.failed {
            return None;
        }
        match (&self.departments, &self.locations, &self.functions) {
            (Some(_), Some(_), Some(_)) => Some(Lookups {
                departments: self.departments.take().unwrap_or_default(),
                locations: self.locations.take().unwrap_or_default(),
                functions: self.functions.take().unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

/// State of one mounted listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    mount: u64,
    pub search: Debouncer,
    pub jobs: Vec<Job>,
    pub lookups: Lookups,
    pub loading: bool,
    pub error: Option<JobsError>,
    pub selected: usize,
    fetched: Option<FilterSet>,
    seq: u64,
    join: LookupJoin,
}

impl ListingState {
    /// Creates the view for `query`; nothing is fetched until [`Self::start`].
    #[must_use]
    pub fn new(mount: u64, query: &QueryParams) -> Self {
        Self {
            mount,
            search: Debouncer::new(query.filter(FilterKey::Search)),
            jobs: Vec::new(),
            lookups: Lookups::default(),
            loading: true,
            error: None,
            selected: 0,
            fetched: None,
            seq: 0,
            join: LookupJoin::default(),
        }
    }

    #[must_use]
    pub const fn mount(&self) -> u64 {
        self.mount
    }

    /// Mount-time requests: the three lookups plus the job list for `query`.
    pub fn start(&mut self, query: &QueryParams, client: &ApiClient) -> Vec<ApiRequest> {
        let mut requests = vec![
            client.fetch_departments(self.mount),
            client.fetch_locations(self.mount),
            client.fetch_functions(self.mount),
        ];
        requests.extend(self.refresh(query, client));
        requests
    }

    /// Issues a job-list request when the committed filters differ from the
    /// ones last fetched.
    pub fn refresh(&mut self, query: &QueryParams, client: &ApiClient) -> Option<ApiRequest> {
        let filters = FilterSet::from_query(query);
        if self.fetched.as_ref() == Some(&filters) {
            return None;
        }

        self.seq += 1;
        self.loading = true;
        self.error = None;
        tracing::debug!(seq = self.seq, filters = ?filters.params(), "fetching job list");
        let request = client.fetch_jobs(&filters, self.mount, self.seq);
        self.fetched = Some(filters);
        Some(request)
    }

    /// Replaces the shadow search text. Returns the generation of the timer
    /// the caller must arm.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> u64 {
        self.search.update(text)
    }

    /// Appends `c` to the shadow search text.
    pub fn type_char(&mut self, c: char) -> u64 {
        let mut text = self.search.text().to_string();
        text.push(c);
        self.set_search_text(text)
    }

    /// Removes the last character of the shadow search text, if any.
    pub fn backspace(&mut self) -> Option<u64> {
        let mut text = self.search.text().to_string();
        text.pop()?;
        Some(self.set_search_text(text))
    }

    /// A debounce timer fired; commits the shadow text to `q` when it is the
    /// latest one.
    pub fn commit_search(
        &mut self,
        generation: u64,
        query: &mut QueryParams,
        client: &ApiClient,
    ) -> Option<ApiRequest> {
        let text = self.search.fire(generation)?.to_string();
        tracing::debug!(q = %text, "committing search text");
        query.set_filter(FilterKey::Search, &text);
        self.refresh(query, client)
    }

    /// Commits a dropdown value immediately. An empty value clears the key.
    pub fn select_filter(
        &mut self,
        key: FilterKey,
        value: &str,
        query: &mut QueryParams,
        client: &ApiClient,
    ) -> Option<ApiRequest> {
        query.set_filter(key, value);
        self.refresh(query, client)
    }

    /// Steps a dropdown through "all" followed by each lookup in order.
    pub fn cycle_filter(
        &mut self,
        key: FilterKey,
        forward: bool,
        query: &mut QueryParams,
        client: &ApiClient,
    ) -> Option<ApiRequest> {
        let options = self.lookups.for_key(key);
        let current = query.filter(key);
        let position = options.iter().position(|lookup| lookup.id == current);

        // Slot 0 is "all"; slot i + 1 is options[i].
        let slots = options.len() + 1;
        let slot = position.map_or(0, |p| p + 1);
        let next = if forward {
            (slot + 1) % slots
        } else {
            (slot + slots - 1) % slots
        };
        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].id.clone()
        };

        self.select_filter(key, &value, query, client)
    }

    /// Clears a single applied filter. Clearing the search also empties the
    /// search box.
    pub fn remove_filter(
        &mut self,
        key: FilterKey,
        query: &mut QueryParams,
        client: &ApiClient,
    ) -> Option<ApiRequest> {
        if key == FilterKey::Search {
            self.search.reset("");
        }
        query.set_filter(key, "");
        self.refresh(query, client)
    }

    /// Resets the whole query and the search box in one step.
    pub fn clear_all(&mut self, query: &mut QueryParams, client: &ApiClient) -> Option<ApiRequest> {
        query.clear();
        self.search.reset("");
        self.refresh(query, client)
    }

    /// Applies a response addressed to this mount. Returns `true` if anything
    /// visible changed.
    pub fn handle_response(&mut self, response: &ApiResponse) -> bool {
        match response.context.resource {
            Resource::Jobs => self.apply_jobs(response),
            Resource::Departments | Resource::Locations | Resource::Functions => {
                self.apply_lookup(response)
            }
            Resource::JobDetails => false,
        }
    }

    fn apply_jobs(&mut self, response: &ApiResponse) -> bool {
        if response.context.seq != self.seq {
            tracing::debug!(seq = response.context.seq, latest = self.seq, "dropping stale job list");
            return false;
        }

        match decode_jobs(response) {
            Ok(jobs) => {
                tracing::debug!(count = jobs.len(), "job list loaded");
                self.jobs = jobs;
                self.error = None;
            }
            Err(err) => {
                self.jobs.clear();
                self.error = Some(err);
            }
        }
        self.loading = false;
        self.clamp_selection();
        true
    }

    fn apply_lookup(&mut self, response: &ApiResponse) -> bool {
        if self.join.failed {
            return false;
        }

        let lookups = match decode_lookups(response) {
            Ok(lookups) => lookups,
            Err(err) => {
                tracing::error!(resource = %response.context.resource, error = %err, "failed to load filter options");
                self.join = LookupJoin {
                    failed: true,
                    ..LookupJoin::default()
                };
                return false;
            }
        };

        match response.context.resource {
            Resource::Departments => self.join.departments = Some(lookups),
            Resource::Locations => self.join.locations = Some(lookups),
            Resource::Functions => self.join.functions = Some(lookups),
            Resource::Jobs | Resource::JobDetails => return false,
        }

        let Some(lookups) = self.join.complete() else {
            return false;
        };
        tracing::debug!(
            departments = lookups.departments.len(),
            locations = lookups.locations.len(),
            functions = lookups.functions.len(),
            "filter options loaded"
        );
        self.lookups = lookups;
        self.clamp_selection();
        true
    }

    /// Department groups for the current jobs.
    #[must_use]
    pub fn groups(&self) -> Vec<JobGroup> {
        group_by_department(&self.jobs, &self.lookups.departments)
    }

    /// Applied-filter summary for `query`.
    #[must_use]
    pub fn applied_filters(&self, query: &QueryParams) -> Vec<AppliedFilter> {
        applied_filters(query, &self.lookups)
    }

    /// Jobs in display order (grouped), which is the order selection walks.
    #[must_use]
    pub fn visible_jobs(&self) -> Vec<Job> {
        self.groups().into_iter().flat_map(|group| group.jobs).collect()
    }

    #[must_use]
    pub fn selected_job(&self) -> Option<Job> {
        self.visible_jobs().into_iter().nth(self.selected)
    }

    pub fn move_selection_down(&mut self) {
        let count = self.visible_jobs().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn move_selection_up(&mut self) {
        let count = self.visible_jobs().len();
        if count > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_jobs().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    /// Resolves the error that reached the view, if any.
    ///
    /// # Errors
    ///
    /// Returns the stored fetch error.
    pub fn status(&self) -> Result<()> {
        self.error.clone().map_or(Ok(()), Err)
    }
}
