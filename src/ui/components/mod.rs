//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar and current address
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search box, filter dropdowns and applied-filter chips
//! - [`listing`]: Department headings and job cards
//! - [`detail`]: Job detail panel
//! - [`status`]: Loader, error and empty-result messages
//!
//! # Layouts
//!
//! - [`render_listing_layout`]: Header + Filters + Results + Footer
//! - [`render_detail_layout`]: Header + Job panel (or status) + Footer

mod detail;
mod footer;
mod header;
mod listing;
mod search;
mod status;

pub use detail::description_lines;
pub use listing::card_title_width;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, FooterInfo, HeaderInfo, ListingContent, ListingView};

use detail::render_job_panel;
use footer::render_footer;
use header::render_header;
use listing::render_listing_lines;
use search::{render_chips, render_dropdowns, render_search_bar};
use status::render_status;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Header, border above the body; border and footer pinned to the bottom.
///
/// Returns the first body row.
fn render_frame(header: &HeaderInfo, footer: &FooterInfo, theme: &Theme, cols: usize, rows: usize) -> usize {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows;
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, footer, theme, cols);
    current_row
}

/// Renders the listing page.
///
/// ```text
/// [blank line]
/// [Header]
/// [Address]
/// [Border]
/// [Search Bar - 3 lines]
/// [Dropdowns]
/// [Chips]
/// [Headings and cards, or a status message]
/// [Border]
/// [Footer]
/// ```
pub fn render_listing_layout(
    header: &HeaderInfo,
    listing: &ListingView,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = render_frame(header, footer, theme, cols, rows);

    current_row = render_search_bar(current_row, &listing.search_bar, theme, cols);
    current_row = render_dropdowns(current_row, &listing.dropdowns, theme, cols);
    current_row = render_chips(current_row, &listing.chips, theme, cols);

    match &listing.content {
        ListingContent::Status(status) => {
            render_status(current_row, status, theme, cols);
        }
        ListingContent::Lines(lines) => {
            render_listing_lines(current_row, lines, theme, cols);
        }
    }
}

/// Renders the detail page between the header and the footer.
pub fn render_detail_layout(
    header: &HeaderInfo,
    detail: &DetailView,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let current_row = render_frame(header, footer, theme, cols, rows);

    match detail {
        DetailView::Status(status) => {
            render_status(current_row, status, theme, cols);
        }
        DetailView::Job(panel) => {
            render_job_panel(current_row, panel, theme, cols, rows.saturating_sub(2));
        }
    }
}
