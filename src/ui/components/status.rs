//! Loader, error and empty-result messages.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusMessage};

/// Renders a centered two-line status message, one blank line below `row`.
///
/// Loading and empty messages use `empty_state_fg`; errors use `error_fg`.
/// The subtitle is dimmed and omitted when blank.
pub fn render_status(row: usize, status: &StatusMessage, theme: &Theme, cols: usize) -> usize {
    let color = match status.kind {
        StatusKind::Loading | StatusKind::Empty => &theme.colors.empty_state_fg,
        StatusKind::Error => &theme.colors.error_fg,
    };

    let message_row = row + 1;
    print_centered(message_row, &status.message, cols, &Theme::fg(color));

    if status.subtitle.is_empty() {
        return message_row + 1;
    }

    let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(message_row + 1, &status.subtitle, cols, &style);
    message_row + 2
}

fn print_centered(row: usize, text: &str, cols: usize, style: &str) {
    let len = visual_len(text);
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
