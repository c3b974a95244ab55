//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel` and consumed
//! by the renderer. They hold display-ready data only: labels are formatted,
//! lists are windowed to the terminal height and selection is resolved.

use crate::ui::markup::Block;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Title bar plus the current address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Shareable address of the current view, e.g. `/?departmentId=3`.
    pub address: String,
}

/// Keybinding hints for the bottom line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Listing(ListingView),
    Detail(DetailView),
}

/// Listing page: filter controls above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub search_bar: SearchBarInfo,
    pub dropdowns: Vec<DropdownInfo>,
    /// Applied-filter chips; empty hides the row.
    pub chips: Vec<ChipInfo>,
    pub content: ListingContent,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Shadow text, which may run ahead of the committed `q`.
    pub query: String,
    /// Keystrokes go to the box.
    pub focused: bool,
    /// A commit is armed but has not fired yet.
    pub pending: bool,
}

/// One filter dropdown, shown as `Department: Engineering`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownInfo {
    pub label: String,
    pub value: String,
    /// Key that cycles it forward.
    pub hotkey: char,
}

/// One applied-filter chip, removable with its number key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipInfo {
    pub number: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingContent {
    Status(StatusMessage),
    /// Department headings and job cards, already windowed.
    Lines(Vec<ListingLine>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingLine {
    Heading { title: String, count: usize },
    Card(DisplayItem),
}

/// One job card row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    /// Character ranges of the title matching the committed search.
    pub highlight_ranges: Vec<(usize, usize)>,
    /// `department · location`, either part omitted when absent.
    pub meta: String,
    pub tag: Option<String>,
    pub posted: Option<String>,
    pub is_selected: bool,
}

/// Loader, error and empty-result states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
    pub subtitle: String,
}

/// Detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Status(StatusMessage),
    Job(JobPanel),
}

/// A loaded job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPanel {
    pub title: String,
    /// Label/value rows: department, location, type, experience, posted.
    pub facts: Vec<(String, String)>,
    pub can_apply: bool,
    /// Description blocks from the scroll offset on.
    pub description: Vec<Block>,
    /// Blocks hidden above the viewport.
    pub scrolled: usize,
    pub shares: Vec<ShareInfo>,
    /// Full page address used in share links.
    pub page_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareInfo {
    pub number: usize,
    pub label: String,
}
