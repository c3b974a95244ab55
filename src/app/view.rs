//! View model computation.
//!
//! Turns the mounted view plus the current address into a [`UIViewModel`]:
//! formats labels, picks the loader/error/empty message, windows the grouped
//! listing around the selected card and highlights the committed search in
//! card titles.

use crate::app::detail::{DetailState, DetailStatus};
use crate::app::listing::ListingState;
use crate::app::modes::InputMode;
use crate::app::state::{AppState, View};
use crate::domain::{Job, ShareTarget};
use crate::routing::FilterKey;
use crate::ui::components::card_title_width;
use crate::ui::viewmodel::{
    Body, ChipInfo, DetailView, DisplayItem, DropdownInfo, FooterInfo, HeaderInfo, JobPanel,
    ListingContent, ListingLine, ListingView, SearchBarInfo, ShareInfo, StatusKind, StatusMessage,
    UIViewModel,
};
use chrono::Utc;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Rows used by the listing outside the results: blank line, header, address,
/// border, search box (3), dropdowns, chips, bottom border, footer.
pub const LISTING_CHROME_ROWS: usize = 11;

pub const LOADING_JOBS: &str = "Fetching job openings...";
pub const JOBS_FAILED: &str = "Failed to load job openings. Please try refreshing.";
pub const NO_JOBS: &str = "No job openings found matching your criteria.";
pub const LOADING_DETAILS: &str = "Fetching job details...";
pub const NO_DETAILS: &str = "No job details found.";

impl AppState {
    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match &self.view {
            View::Listing(listing) => Body::Listing(self.compute_listing(listing, rows, cols)),
            View::Detail(detail) => Body::Detail(self.compute_detail(detail)),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.view {
            View::Listing(listing) if !listing.loading && listing.error.is_none() => {
                format!(" {} Job Openings ({}) ", self.company, listing.jobs.len())
            }
            View::Listing(_) => format!(" {} Job Openings ", self.company),
            View::Detail(detail) => match detail.job() {
                Some(job) => format!(" {} ", job.title),
                None => " Job Details ".to_string(),
            },
        };

        HeaderInfo {
            title,
            address: self.location.to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.view, self.input_mode) {
            (View::Listing(_), InputMode::Search) => {
                "Type to search  Backspace: delete  Esc/Enter: done"
            }
            (View::Listing(_), InputMode::Normal) => {
                "j/k: move  Enter: view  a: apply  /: search  x: clear search  d/l/f: filters  1-4: remove  C: clear all  q: quit"
            }
            (View::Detail(detail), _) if detail.job().is_some() => {
                "j/k: scroll  a: apply  1: Facebook  2: LinkedIn  3: Twitter  b/Esc: back  q: quit"
            }
            (View::Detail(_), _) => "b/Esc: back  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_listing(&self, listing: &ListingState, rows: usize, cols: usize) -> ListingView {
        let query = &self.location.query;

        let search_bar = SearchBarInfo {
            query: listing.search.text().to_string(),
            focused: self.input_mode == InputMode::Search,
            pending: listing.search.is_pending(),
        };

        let dropdowns = FilterKey::LOOKUPS
            .into_iter()
            .zip(['d', 'l', 'f'])
            .map(|(key, hotkey)| {
                let id = query.filter(key);
                let value = if id.is_empty() {
                    "All".to_string()
                } else {
                    listing.lookups.title(key, id).unwrap_or(id).to_string()
                };
                DropdownInfo {
                    label: key.label().to_string(),
                    value,
                    hotkey,
                }
            })
            .collect();

        let chips = listing
            .applied_filters(query)
            .into_iter()
            .enumerate()
            .map(|(i, filter)| ChipInfo {
                number: i + 1,
                label: filter.label,
            })
            .collect();

        ListingView {
            search_bar,
            dropdowns,
            chips,
            content: self.compute_listing_content(listing, rows, cols),
        }
    }

    fn compute_listing_content(&self, listing: &ListingState, rows: usize, cols: usize) -> ListingContent {
        if let Some(notice) = &self.notice {
            return ListingContent::Status(status(StatusKind::Error, notice, ""));
        }
        if listing.loading {
            return ListingContent::Status(status(StatusKind::Loading, LOADING_JOBS, ""));
        }
        if let Some(err) = &listing.error {
            return ListingContent::Status(status(StatusKind::Error, JOBS_FAILED, &err.to_string()));
        }

        if listing.jobs.is_empty() {
            let subtitle = if self.location.query.is_empty() {
                ""
            } else {
                "Press C to clear all filters"
            };
            return ListingContent::Status(status(StatusKind::Empty, NO_JOBS, subtitle));
        }

        // Groups stay empty until the department lookup arrives.
        let groups = listing.groups();
        let search = self.location.query.filter(FilterKey::Search);
        let matcher = (!search.is_empty()).then(SkimMatcherV2::default);
        let title_width = card_title_width(cols);

        let mut lines = Vec::new();
        let mut selected_line = 0;
        let mut job_index = 0;
        for group in groups {
            lines.push(ListingLine::Heading {
                title: group.department.title.clone(),
                count: group.jobs.len(),
            });
            for job in &group.jobs {
                let is_selected = job_index == listing.selected;
                if is_selected {
                    selected_line = lines.len();
                }
                let highlight = matcher.as_ref().map(|m| (m, search));
                lines.push(ListingLine::Card(display_item(job, is_selected, title_width, highlight)));
                job_index += 1;
            }
        }

        let available = rows.saturating_sub(LISTING_CHROME_ROWS).max(1);
        let (start, end) = window(selected_line, lines.len(), available);
        lines.truncate(end);
        ListingContent::Lines(lines.split_off(start))
    }

    fn compute_detail(&self, detail: &DetailState) -> DetailView {
        if let Some(notice) = &self.notice {
            return DetailView::Status(status(StatusKind::Error, notice, ""));
        }

        match &detail.status {
            DetailStatus::Loading => DetailView::Status(status(StatusKind::Loading, LOADING_DETAILS, "")),
            DetailStatus::Failed(message) => DetailView::Status(status(
                StatusKind::Error,
                message,
                "Press b to go back to Job Openings",
            )),
            DetailStatus::Missing => DetailView::Status(status(
                StatusKind::Empty,
                NO_DETAILS,
                "Press b to go back to Jobs",
            )),
            DetailStatus::Loaded(job) => DetailView::Job(JobPanel {
                title: job.title.clone(),
                facts: facts(job),
                can_apply: job.apply_url.is_some(),
                description: detail.description.iter().skip(detail.scroll).cloned().collect(),
                scrolled: detail.scroll,
                shares: ShareTarget::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, target)| ShareInfo {
                        number: i + 1,
                        label: target.label().to_string(),
                    })
                    .collect(),
                page_url: self.page_url(),
            }),
        }
    }
}

fn status(kind: StatusKind, message: &str, subtitle: &str) -> StatusMessage {
    StatusMessage {
        kind,
        message: message.to_string(),
        subtitle: subtitle.to_string(),
    }
}

fn facts(job: &Job) -> Vec<(String, String)> {
    let mut facts = Vec::new();
    let mut push = |label: &str, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            facts.push((label.to_string(), value));
        }
    };

    push("Department", job.department.as_ref().map(|d| d.title.clone()));
    push("Location", job.location.as_ref().map(|l| l.title.clone()));
    push("Type", job.type_tag());
    push("Experience", job.experience.clone());
    push("Posted", job.posted_ago(Utc::now()));
    facts
}

fn display_item(
    job: &Job,
    is_selected: bool,
    title_width: usize,
    highlight: Option<(&SkimMatcherV2, &str)>,
) -> DisplayItem {
    let title = truncate(&job.title, title_width);
    let title_len = title.chars().count();

    let highlight_ranges = highlight
        .and_then(|(matcher, pattern)| matcher.fuzzy_indices(&job.title, pattern))
        .map(|(_score, indices)| coalesce(&indices))
        .unwrap_or_default()
        .into_iter()
        .filter(|&(start, _)| start < title_len)
        .map(|(start, end)| (start, end.min(title_len)))
        .collect();

    let meta = [
        job.department.as_ref().map(|d| d.title.as_str()),
        job.location.as_ref().map(|l| l.title.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" · ");

    DisplayItem {
        title,
        highlight_ranges,
        meta,
        tag: job.type_tag(),
        posted: job.posted_ago(Utc::now()),
        is_selected,
    }
}

/// Coalesces sorted character indices into `(start, end)` runs, end exclusive.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Visible `[start, end)` of `len` lines keeping `selected` near the middle.
fn window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);
    if end - start < available && len >= available {
        start = end - available;
    }
    (start, end)
}

/// Shortens `text` to `width` characters, marking the cut with "...".
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, ApiRequest, ApiResponse};
    use crate::app::Action;
    use crate::routing::Location;
    use crate::ui::theme::Theme;

    fn started(address: &str) -> (AppState, Vec<ApiRequest>) {
        let client = ApiClient::new("https://board.example/api/v1").unwrap();
        let mut state = AppState::new(Location::parse(address), client, Theme::default());
        let requests = state
            .start()
            .into_iter()
            .filter_map(|action| match action {
                Action::Fetch(request) => Some(request),
                _ => None,
            })
            .collect();
        (state, requests)
    }

    fn reply(state: &mut AppState, request: &ApiRequest, body: &str) {
        state.handle_response(&ApiResponse::new(request.context, 200, body.as_bytes()));
    }

    fn listing_view(state: &AppState, rows: usize) -> ListingView {
        match state.compute_viewmodel(rows, 100).body {
            Body::Listing(view) => view,
            Body::Detail(_) => panic!("expected listing"),
        }
    }

    #[test]
    fn listing_shows_loader_until_jobs_arrive() {
        let (state, _) = started("/");
        let view = listing_view(&state, 40);

        assert_eq!(view.content, ListingContent::Status(status(StatusKind::Loading, LOADING_JOBS, "")));
    }

    #[test]
    fn grouped_cards_and_chips_are_built() {
        let (mut state, requests) = started("/?q=eng&departmentId=d1");
        reply(&mut state, &requests[0], r#"[{"id":"d1","title":"Engineering"}]"#);
        reply(&mut state, &requests[1], "[]");
        reply(&mut state, &requests[2], "[]");
        reply(
            &mut state,
            &requests[3],
            r#"[{"id":1,"title":"Engineer","type":"full-time","department":{"id":"d1","title":"Engineering"},"location":{"id":"l1","title":"Pune"}}]"#,
        );

        let view = listing_view(&state, 40);

        let chips: Vec<_> = view.chips.iter().map(|c| (c.number, c.label.as_str())).collect();
        assert_eq!(chips, [(1, "Search: \"eng\""), (2, "Department: Engineering")]);
        assert_eq!(view.dropdowns[0].value, "Engineering");
        assert_eq!(view.dropdowns[1].value, "All");

        let ListingContent::Lines(lines) = view.content else {
            panic!("expected lines");
        };
        assert_eq!(lines[0], ListingLine::Heading { title: "Engineering".to_string(), count: 1 });
        let ListingLine::Card(card) = &lines[1] else {
            panic!("expected card");
        };
        assert!(card.is_selected);
        assert_eq!(card.meta, "Engineering · Pune");
        assert_eq!(card.tag.as_deref(), Some("FULL-TIME"));
        assert_eq!(card.highlight_ranges, vec![(0, 3)]);
    }

    #[test]
    fn failed_job_list_shows_refresh_message() {
        let (mut state, requests) = started("/");
        state.handle_response(&ApiResponse::new(requests[3].context, 500, ""));

        let view = listing_view(&state, 40);
        assert_eq!(
            view.content,
            ListingContent::Status(status(
                StatusKind::Error,
                JOBS_FAILED,
                "Request failed with status code 500"
            ))
        );
    }

    #[test]
    fn empty_result_suggests_clearing_filters() {
        let (mut state, requests) = started("/?locationId=l1");
        reply(&mut state, &requests[3], "[]");

        let view = listing_view(&state, 40);
        assert_eq!(
            view.content,
            ListingContent::Status(status(StatusKind::Empty, NO_JOBS, "Press C to clear all filters"))
        );
    }

    #[test]
    fn missing_job_id_renders_error_panel() {
        let (state, requests) = started("/jobs/");
        assert!(requests.is_empty());

        let vm = state.compute_viewmodel(30, 80);
        let Body::Detail(DetailView::Status(message)) = vm.body else {
            panic!("expected detail status");
        };
        assert_eq!(message.message, "Job ID not provided in URL.");
        assert_eq!(vm.footer.keybindings, "b/Esc: back  q: quit");
    }

    #[test]
    fn loaded_detail_lists_facts_and_shares() {
        let (mut state, requests) = started("/jobs/7");
        reply(
            &mut state,
            &requests[0],
            r#"{"id":7,"title":"PM","experience":"3-5 years","applyUrl":"https://apply","description":"<p>Lead</p>"}"#,
        );

        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.header.title, " PM ");
        assert_eq!(vm.header.address, "/jobs/7");
        let Body::Detail(DetailView::Job(panel)) = vm.body else {
            panic!("expected job panel");
        };
        assert_eq!(panel.facts, vec![("Experience".to_string(), "3-5 years".to_string())]);
        assert!(panel.can_apply);
        assert_eq!(panel.shares.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(), ["Facebook", "LinkedIn", "Twitter"]);
        assert_eq!(panel.page_url, "http://localhost:3000/jobs/7");
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(window(0, 3, 10), (0, 3));
        assert_eq!(window(10, 20, 6), (7, 13));
        assert_eq!(window(19, 20, 6), (14, 20));
    }

    #[test]
    fn coalesce_merges_adjacent_indices() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce(&[]).is_empty());
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Senior Engineer", 20), "Senior Engineer");
        assert_eq!(truncate("Senior Engineer", 9), "Senior...");
    }
}
