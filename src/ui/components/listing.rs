//! Grouped job list renderer.
//!
//! Department headings followed by one card row per job:
//!
//! ```text
//!  Engineering (2)
//!    Senior Rust Engineer        Engineering · Pune      Full-time   3 days ago
//! ```

use crate::ui::helpers::{self, position_cursor, print_padded, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListingLine};

/// Columns reserved for the type tag.
const TAG_WIDTH: usize = 12;
/// Columns reserved for the posted-ago text.
const POSTED_WIDTH: usize = 14;
/// Left indent of a card under its heading.
const CARD_INDENT: usize = 3;
/// Cards never shrink below this many title columns.
const MIN_TITLE_WIDTH: usize = 20;

/// Title column width of a card in a `cols` wide pane.
#[must_use]
pub const fn card_title_width(cols: usize) -> usize {
    let flexible = cols.saturating_sub(CARD_INDENT + TAG_WIDTH + POSTED_WIDTH);
    let width = flexible * 3 / 5;
    if width < MIN_TITLE_WIDTH {
        MIN_TITLE_WIDTH
    } else {
        width
    }
}

/// Renders the windowed listing lines starting at `row`.
///
/// Returns the next available row.
pub fn render_listing_lines(row: usize, lines: &[ListingLine], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for line in lines {
        current_row = match line {
            ListingLine::Heading { title, count } => render_heading(current_row, title, *count, theme, cols),
            ListingLine::Card(item) => render_card(current_row, item, theme, cols),
        };
    }
    current_row
}

fn render_heading(row: usize, title: &str, count: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.heading_fg));
    print_padded(&format!(" {title} ({count})"), cols);
    print!("{}", Theme::reset());
    row + 1
}

/// Title and meta share what the tag and posted columns leave.
fn render_card(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let selected_style = || {
        if item.is_selected {
            format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    print!("{}", selected_style());
    let marker = if item.is_selected { " ▸ " } else { "   " };
    print!("{marker}");

    let title_width = card_title_width(cols);
    let meta_width = cols.saturating_sub(CARD_INDENT + title_width + TAG_WIDTH + POSTED_WIDTH);

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", selected_style());
    print!("{}", " ".repeat(title_width.saturating_sub(visual_len(&item.title))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print_padded(&item.meta, meta_width);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.tag_fg));
    }
    print_padded(item.tag.as_deref().unwrap_or(""), TAG_WIDTH);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print_padded(item.posted.as_deref().unwrap_or(""), POSTED_WIDTH);

    let used = CARD_INDENT + title_width.max(visual_len(&item.title)) + meta_width + TAG_WIDTH + POSTED_WIDTH;
    // Narrow panes overflow; the host clips the line.
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_column_has_a_floor() {
        assert_eq!(card_title_width(30), MIN_TITLE_WIDTH);
        assert_eq!(card_title_width(129), 60);
    }
}
