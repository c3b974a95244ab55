//! Key bindings.
//!
//! Maps a Zellij key press to an [`Event`] for the mounted view and input mode.
//!
//! Listing, normal mode:
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: move selection
//! - `Enter`: view job, `a`: apply
//! - `/`: search, `x`: clear the search box
//! - `d`/`D`, `l`/`L`, `f`/`F`: cycle department, location, function
//! - `1`-`4`: remove an applied filter, `C`: clear all
//! - `q`: close
//!
//! Listing, search mode: printable keys edit the text, `Esc`/`Enter` finish.
//!
//! Detail: `j`/`k` scroll, `a` apply, `1`/`2`/`3` share on Facebook, LinkedIn,
//! Twitter, `b`/`Esc` back, `q` close.

use crate::app::modes::InputMode;
use crate::app::state::{AppState, View};
use crate::app::Event;
use crate::domain::ShareTarget;
use crate::routing::FilterKey;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps `key` to an event, or `None` when the key is unbound here.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::KeyDown),
            BareKey::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    match (&state.view, state.input_mode) {
        (View::Listing(_), InputMode::Search) => map_search_key(key),
        (View::Listing(_), InputMode::Normal) => map_listing_key(key),
        (View::Detail(_), _) => map_detail_key(key),
    }
}

fn map_search_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Esc | BareKey::Enter => Event::LeaveSearch,
        BareKey::Backspace => Event::Backspace,
        BareKey::Down => Event::KeyDown,
        BareKey::Up => Event::KeyUp,
        BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Alt]) => Event::Char(c),
        _ => return None,
    })
}

fn map_listing_key(key: &KeyWithModifier) -> Option<Event> {
    let cycle = |key: FilterKey, forward: bool| Event::CycleFilter { key, forward };

    Some(match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Enter => Event::OpenSelected,
        BareKey::Char('a') => Event::Apply,
        BareKey::Char('/') => Event::FocusSearch,
        BareKey::Char('x') => Event::ClearSearchText,
        BareKey::Char('d') => cycle(FilterKey::Department, true),
        BareKey::Char('D') => cycle(FilterKey::Department, false),
        BareKey::Char('l') => cycle(FilterKey::Location, true),
        BareKey::Char('L') => cycle(FilterKey::Location, false),
        BareKey::Char('f') => cycle(FilterKey::Function, true),
        BareKey::Char('F') => cycle(FilterKey::Function, false),
        BareKey::Char(c @ '1'..='4') => Event::RemoveFilter(digit(c)),
        BareKey::Char('C') => Event::ClearAllFilters,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Char('a') | BareKey::Enter => Event::Apply,
        BareKey::Char(c @ '1'..='3') => Event::Share(ShareTarget::ALL[digit(c) - 1]),
        BareKey::Char('b') | BareKey::Esc | BareKey::Backspace => Event::Back,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn digit(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::routing::Location;
    use crate::ui::theme::Theme;

    fn state(address: &str) -> AppState {
        let client = ApiClient::new("https://board.example/api/v1").unwrap();
        AppState::new(Location::parse(address), client, Theme::default())
    }

    fn key(c: char) -> KeyWithModifier {
        KeyWithModifier::new(BareKey::Char(c))
    }

    #[test]
    fn listing_normal_mode_bindings() {
        let state = state("/");

        assert_eq!(map_key(&state, &key('j')), Some(Event::KeyDown));
        assert_eq!(map_key(&state, &key('/')), Some(Event::FocusSearch));
        assert_eq!(
            map_key(&state, &key('L')),
            Some(Event::CycleFilter { key: FilterKey::Location, forward: false })
        );
        assert_eq!(map_key(&state, &key('3')), Some(Event::RemoveFilter(3)));
        assert_eq!(map_key(&state, &key('9')), None);
        assert_eq!(map_key(&state, &KeyWithModifier::new(BareKey::Enter)), Some(Event::OpenSelected));
    }

    #[test]
    fn search_mode_types_every_printable_key() {
        let mut state = state("/");
        state.input_mode = InputMode::Search;

        assert_eq!(map_key(&state, &key('q')), Some(Event::Char('q')));
        assert_eq!(map_key(&state, &key('j')), Some(Event::Char('j')));
        assert_eq!(map_key(&state, &KeyWithModifier::new(BareKey::Esc)), Some(Event::LeaveSearch));
        assert_eq!(map_key(&state, &key('n').with_ctrl_modifier()), Some(Event::KeyDown));
    }

    #[test]
    fn detail_bindings() {
        let state = state("/jobs/1");

        assert_eq!(map_key(&state, &key('2')), Some(Event::Share(ShareTarget::LinkedIn)));
        assert_eq!(map_key(&state, &key('b')), Some(Event::Back));
        assert_eq!(map_key(&state, &KeyWithModifier::new(BareKey::Esc)), Some(Event::Back));
        assert_eq!(map_key(&state, &key('d')), None);
    }
}
