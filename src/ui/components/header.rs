//! Header component renderer.
//!
//! Two lines: the centered title bar, then the current address so the view
//! can be shared or bookmarked.

use crate::ui::helpers::{position_cursor, print_padded, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar and the address line starting at `row`.
///
/// Returns the next available row (`row + 2`).
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = visual_len(&header.title).min(cols);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print_padded(&header.title, cols.saturating_sub(padding));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.link_fg));
    print!(" ");
    print_padded(&header.address, cols.saturating_sub(1));
    print!("{}", Theme::reset());

    row + 2
}
