//! Job detail panel renderer.
//!
//! ```text
//!  Senior Rust Engineer
//!    Department  Engineering
//!    Location    Pune
//!  [a] Apply now
//!
//!  About the role
//!  We are looking for ...
//!    • Ship the job board
//!  [a] Apply for this job
//!  Share: [1] Facebook  [2] LinkedIn  [3] Twitter
//!  https://careers.example/jobs/42
//! ```

use crate::ui::helpers::{position_cursor, print_padded, wrap_text};
use crate::ui::markup::{Block, BlockKind};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::JobPanel;

/// Rows kept below the description: apply again, share row, page address.
const BOTTOM_ROWS: usize = 3;
const FACT_LABEL_WIDTH: usize = 12;

/// Renders the panel between `row` and `last_row` (inclusive).
pub fn render_job_panel(row: usize, panel: &JobPanel, theme: &Theme, cols: usize, last_row: usize) {
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!(" ");
    print_padded(&panel.title, cols.saturating_sub(1));
    print!("{}", Theme::reset());
    current_row += 1;

    for (label, value) in &panel.facts {
        position_cursor(current_row, 1);
        print!("{}   ", Theme::fg(&theme.colors.text_dim));
        print_padded(label, FACT_LABEL_WIDTH);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_padded(value, cols.saturating_sub(FACT_LABEL_WIDTH + 3));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row, 1);
    if panel.can_apply {
        print!("{}{} [a] Apply now", Theme::bold(), Theme::fg(&theme.colors.link_fg));
    } else {
        print!("{} Applications are closed", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", Theme::reset());
    current_row += 2;

    let bottom_row = last_row.saturating_sub(BOTTOM_ROWS - 1);
    let available = bottom_row.saturating_sub(current_row + 1);
    let lines = description_lines(&panel.description, cols.saturating_sub(2));
    let more_below = lines.len() > available;

    if panel.scrolled > 0 {
        position_cursor(current_row.saturating_sub(1), 1);
        print!("{}   ↑ {} more{}", Theme::fg(&theme.colors.text_dim), panel.scrolled, Theme::reset());
    }

    for (kind, line) in lines.iter().take(available) {
        position_cursor(current_row, 1);
        match kind {
            BlockKind::Heading => print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg)),
            BlockKind::Paragraph | BlockKind::Bullet => print!("{}", Theme::fg(&theme.colors.text_normal)),
        }
        print!(" ");
        print_padded(line, cols.saturating_sub(1));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if more_below {
        position_cursor(current_row, 1);
        print!("{}   ↓ j to scroll{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }

    position_cursor(bottom_row, 1);
    if panel.can_apply {
        print!("{}{} [a] Apply for this job{}", Theme::bold(), Theme::fg(&theme.colors.link_fg), Theme::reset());
    }

    let share_row = bottom_row + 1;
    position_cursor(share_row, 1);
    print!("{} Share:", Theme::fg(&theme.colors.text_dim));
    for share in &panel.shares {
        print!("{}  [{}] {}", Theme::fg(&theme.colors.link_fg), share.number, share.label);
    }
    print!("{}", Theme::reset());

    position_cursor(share_row + 1, 1);
    print!("{}{} ", Theme::underline(), Theme::fg(&theme.colors.link_fg));
    print_padded(&panel.page_url, cols.saturating_sub(1));
    print!("{}", Theme::reset());
}

/// Lays out description blocks as wrapped lines.
///
/// Bullets get a `• ` marker with hanging indent; a blank line separates a
/// heading or paragraph from what precedes it.
#[must_use]
pub fn description_lines(blocks: &[Block], width: usize) -> Vec<(BlockKind, String)> {
    let mut lines = Vec::new();

    for block in blocks {
        let separated = matches!(block.kind, BlockKind::Heading | BlockKind::Paragraph);
        if separated && !lines.is_empty() {
            lines.push((BlockKind::Paragraph, String::new()));
        }

        match block.kind {
            BlockKind::Bullet => {
                for (i, line) in wrap_text(&block.text, width.saturating_sub(4)).into_iter().enumerate() {
                    let marker = if i == 0 { "  • " } else { "    " };
                    lines.push((BlockKind::Bullet, format!("{marker}{line}")));
                }
            }
            kind => {
                for line in wrap_text(&block.text, width) {
                    lines.push((kind, line));
                }
            }
        }
    }
    lines
}
