//! Filter controls: search box, dropdown row and applied-filter chips.

use crate::ui::helpers::{position_cursor, print_padded, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ChipInfo, DropdownInfo, SearchBarInfo};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search input box at `row`.
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ Search: rust engineer█ … │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// A block cursor follows the text while the box is focused; a trailing
/// ellipsis marks a commit that has not fired yet.
///
/// Returns the next available row (`row + 3`).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.selection_bg
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.focused { "█" } else { "" };
    let pending = if search.pending { " …" } else { "" };
    let search_text = if search.query.is_empty() && !search.focused {
        " Search job titles (press /)".to_string()
    } else {
        format!(" Search: {}{cursor}{pending}", search.query)
    };

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    if search.query.is_empty() && !search.focused {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print_padded(&search_text, inner_width);
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the dropdowns on one row as `[d] Department: All`.
///
/// Returns the next available row position (row + 1).
pub fn render_dropdowns(row: usize, dropdowns: &[DropdownInfo], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 0;

    for dropdown in dropdowns {
        let hotkey = format!(" [{}] ", dropdown.hotkey);
        let label = format!("{}: ", dropdown.label);
        let width = visual_len(&hotkey) + visual_len(&label) + visual_len(&dropdown.value) + 1;
        if used + width > cols {
            break;
        }

        print!("{}{hotkey}", Theme::fg(&theme.colors.text_dim));
        print!("{}{label}", Theme::fg(&theme.colors.text_normal));
        print!("{}{}{} ", Theme::bold(), Theme::fg(&theme.colors.tag_fg), dropdown.value);
        print!("{}", Theme::reset());
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

/// Renders applied-filter chips as `1 Department: Engineering ×`.
///
/// The row stays blank when no filter is applied.
///
/// Returns the next available row position (row + 1).
pub fn render_chips(row: usize, chips: &[ChipInfo], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 0;

    if !chips.is_empty() {
        let lead = " Filters: ";
        print!("{}{lead}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        used += visual_len(lead);
    }

    for chip in chips {
        let text = format!(" {} {} × ", chip.number, chip.label);
        let width = visual_len(&text) + 1;
        if used + width > cols {
            break;
        }

        print!("{}", Theme::fg(&theme.colors.chip_fg));
        print!("{}", Theme::bg(&theme.colors.chip_bg));
        print!("{text}");
        print!("{} ", Theme::reset());
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
