//! Input mode state.
//!
//! The listing has two input modes:
//! - **Normal**: single-key commands (navigate, filter, open)
//! - **Search**: printable keys edit the search box
//!
//! The detail view is always in normal mode.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Available keybindings: j/k (move), enter (open), a (apply), / (search),
    /// d/l/f (cycle filters), 1-4 (remove filter), C (clear all), q (quit).
    #[default]
    Normal,

    /// Characters and backspace edit the search text; esc or enter return to
    /// normal mode without discarding it.
    Search,
}
