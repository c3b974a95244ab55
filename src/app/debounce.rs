//! Quiescence-delayed commit of the search text.
//!
//! Zellij timers cannot be cancelled, so a keystroke never stops an older
//! timer. Instead every keystroke bumps a generation number and arms a new
//! timer tagged with it; when a timer fires, only the one carrying the latest
//! generation commits. All timers share one duration, so they fire in the
//! order they were armed.

/// Shadow text of the search box plus its debounce bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Debouncer {
    text: String,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    /// Starts with `text` already committed.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            generation: 0,
            pending: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `true` while a commit is armed and not yet fired.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replaces the shadow text and returns the generation of the new timer.
    pub fn update(&mut self, text: impl Into<String>) -> u64 {
        self.text = text.into();
        self.generation += 1;
        self.pending = true;
        self.generation
    }

    /// A timer armed at `generation` fired. Returns the text to commit when
    /// it is the latest armed timer.
    pub fn fire(&mut self, generation: u64) -> Option<&str> {
        if !self.pending || generation != self.generation {
            return None;
        }
        self.pending = false;
        Some(&self.text)
    }

    /// Resets the shadow text and drops any armed commit.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.generation += 1;
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_timer_commits() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.update("r");
        let second = debouncer.update("ru");

        assert_eq!(debouncer.fire(first), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(second), Some("ru"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn a_timer_commits_once() {
        let mut debouncer = Debouncer::new("rust");
        let generation = debouncer.update("rus");

        assert_eq!(debouncer.fire(generation), Some("rus"));
        assert_eq!(debouncer.fire(generation), None);
    }

    #[test]
    fn reset_cancels_the_armed_commit() {
        let mut debouncer = Debouncer::default();
        let generation = debouncer.update("go");
        debouncer.reset("");

        assert_eq!(debouncer.fire(generation), None);
        assert_eq!(debouncer.text(), "");
    }
}
