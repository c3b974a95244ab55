//! End-to-end detail view behavior: loading, apply, share and back.

use zjobs::api::{ApiClient, ApiRequest, ApiResponse};
use zjobs::app::detail::DetailStatus;
use zjobs::domain::ShareTarget;
use zjobs::routing::Location;
use zjobs::ui::markup::BlockKind;
use zjobs::{handle_event, Action, AppState, Event, Theme};

const JOB: &str = r#"{
    "id": 42,
    "title": "Rust Engineer",
    "type": "full-time",
    "applyUrl": "https://apply.example/42",
    "department": {"id": "d1", "title": "Engineering"},
    "description": "<h2>About</h2><p>Build the board.</p><ul><li>Rust</li><li>WASM</li></ul>"
}"#;

fn started(address: &str) -> (AppState, Vec<ApiRequest>) {
    let client = ApiClient::new("https://board.example/api/v1").unwrap();
    let mut state = AppState::new(Location::parse(address), client, Theme::default());
    state.site_url = "https://careers.example".to_string();

    let (_, actions) = handle_event(&mut state, &Event::Start).unwrap();
    let requests = actions
        .into_iter()
        .filter_map(|action| match action {
            Action::Fetch(request) => Some(request),
            _ => None,
        })
        .collect();
    (state, requests)
}

fn respond(state: &mut AppState, request: &ApiRequest, status: u16, body: &str) -> bool {
    let event = Event::WebResponse(ApiResponse::new(request.context, status, body));
    handle_event(state, &event).unwrap().0
}

fn actions(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

#[test]
fn loaded_job_parses_description_and_applies() {
    let (mut state, requests) = started("/jobs/42");
    assert_eq!(requests.len(), 1);
    assert!(respond(&mut state, &requests[0], 200, JOB));

    let detail = state.detail().unwrap();
    let kinds: Vec<_> = detail.description.iter().map(|block| block.kind).collect();
    assert_eq!(
        kinds,
        [BlockKind::Heading, BlockKind::Paragraph, BlockKind::Bullet, BlockKind::Bullet]
    );

    assert_eq!(
        actions(&mut state, Event::Apply),
        vec![Action::OpenUrl("https://apply.example/42".to_string())]
    );
}

#[test]
fn share_links_carry_the_page_address() {
    let (mut state, requests) = started("/jobs/42");
    respond(&mut state, &requests[0], 200, JOB);

    let twitter = actions(&mut state, Event::Share(ShareTarget::Twitter));
    assert_eq!(
        twitter,
        vec![Action::OpenUrl(
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fcareers.example%2Fjobs%2F42\
             &text=Check%20out%20this%20job%20opening%3A%20Rust%20Engineer%20at%20Teknorix"
                .to_string()
        )]
    );

    let Action::OpenUrl(linkedin) = &actions(&mut state, Event::Share(ShareTarget::LinkedIn))[0] else {
        panic!("expected a url");
    };
    assert!(linkedin.starts_with("https://www.linkedin.com/shareArticle?mini=true&url=https%3A%2F%2Fcareers.example%2Fjobs%2F42"));
    assert!(linkedin.contains("&summary="));
}

#[test]
fn sharing_before_the_job_loads_does_nothing() {
    let (mut state, _) = started("/jobs/42");

    assert!(actions(&mut state, Event::Share(ShareTarget::Facebook)).is_empty());
    assert!(actions(&mut state, Event::Apply).is_empty());
}

#[test]
fn missing_record_and_failures_are_distinguished() {
    let (mut missing, requests) = started("/jobs/404");
    respond(&mut missing, &requests[0], 200, "null");
    assert_eq!(missing.detail().unwrap().status, DetailStatus::Missing);

    let (mut failed, requests) = started("/jobs/500");
    respond(&mut failed, &requests[0], 500, "oops");
    assert_eq!(
        failed.detail().unwrap().status,
        DetailStatus::Failed("Request failed with status code 500".to_string())
    );
}

#[test]
fn missing_id_fails_without_a_request() {
    let (state, requests) = started("/jobs/");

    assert!(requests.is_empty());
    assert_eq!(
        state.detail().unwrap().status,
        DetailStatus::Failed("Job ID not provided in URL.".to_string())
    );
}

#[test]
fn back_from_a_deep_link_lands_on_the_listing_root() {
    let (mut state, _) = started("/jobs/42");

    let back = actions(&mut state, Event::Back);
    assert_eq!(state.location, Location::root());
    assert!(state.listing().is_some());
    assert!(back.contains(&Action::SetTitle("zjobs /".to_string())));
}
