//! # Card Navigation
//!
//! Tracks which card the browser is showing, whether its details are
//! revealed, and whether the reader has gone past the last card.
//!
//! ```text
//!              next (i+1 < len)          next (i+1 == len)
//!   Empty ──▶ Browsing(i, d) ───────▶ Browsing(i+1, false) ──▶ Finished
//!   (len=0)      ▲    │ toggle flips d                            │
//!                │    └─ prev (i > 0) ─▶ Browsing(i-1, false)     │
//!                └──────────────── prev ──────────────────────────┘
//!                              (back to Browsing(len-1, false))
//! ```
//!
//! The deck length is passed to every transition rather than stored, so the
//! state never goes stale if it is re-mounted over a freshly loaded deck.
//!
//! `index` is never touched while `finished` is set. Leaving `Finished`
//! through `prev()` relies on that: the stored index is still `len - 1`.

/// Navigation state owned by the browser view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    index: usize,
    show_details: bool,
    finished: bool,
}

/// Observable phase of the navigation state for a given deck length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Browsing { index: usize, show_details: bool },
    Finished,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn phase(&self, len: usize) -> Phase {
        if len == 0 {
            Phase::Empty
        } else if self.finished {
            Phase::Finished
        } else {
            Phase::Browsing {
                index: self.index,
                show_details: self.show_details,
            }
        }
    }

    /// Flip detail visibility. Only meaningful while browsing.
    pub fn toggle_details(&mut self, len: usize) {
        if matches!(self.phase(len), Phase::Browsing { .. }) {
            self.show_details = !self.show_details;
        }
    }

    pub fn next(&mut self, len: usize) {
        if let Phase::Browsing { index, .. } = self.phase(len) {
            if index + 1 < len {
                self.index = index + 1;
            } else {
                self.finished = true;
            }
            self.show_details = false;
        }
    }

    pub fn prev(&mut self, len: usize) {
        match self.phase(len) {
            Phase::Browsing { index, .. } if index > 0 => {
                self.index = index - 1;
                self.show_details = false;
            }
            Phase::Finished => {
                debug_assert_eq!(self.index, len - 1, "index moved while finished");
                self.finished = false;
                self.show_details = false;
            }
            _ => {}
        }
    }

    /// Whether the "previous" control is enabled.
    ///
    /// Disabled at the first card even when finished, so a finished
    /// one-card deck stays finished.
    pub fn can_prev(&self, len: usize) -> bool {
        len > 0 && self.index > 0
    }

    /// Whether the "next" control is enabled.
    pub fn can_next(&self, len: usize) -> bool {
        matches!(self.phase(len), Phase::Browsing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browsing(index: usize, show_details: bool) -> Phase {
        Phase::Browsing {
            index,
            show_details,
        }
    }

    #[test]
    fn test_initial_phase() {
        let nav = Navigation::new();
        assert_eq!(nav.phase(0), Phase::Empty);
        assert_eq!(nav.phase(3), browsing(0, false));
    }

    #[test]
    fn test_empty_deck_ignores_everything() {
        let mut nav = Navigation::new();
        nav.next(0);
        nav.prev(0);
        nav.toggle_details(0);
        assert_eq!(nav, Navigation::new());
        assert!(!nav.can_next(0));
        assert!(!nav.can_prev(0));
    }

    #[test]
    fn test_cat_dog_scenario() {
        let len = 2;
        let mut nav = Navigation::new();

        nav.next(len);
        assert_eq!(nav.phase(len), browsing(1, false));

        nav.next(len);
        assert_eq!(nav.phase(len), Phase::Finished);

        nav.prev(len);
        assert_eq!(nav.phase(len), browsing(1, false));
        assert!(!nav.is_finished());
    }

    #[test]
    fn test_next_len_times_finishes_exactly_once() {
        for len in 1..=6 {
            let mut nav = Navigation::new();
            for call in 1..=len {
                nav.next(len);
                let finished = nav.phase(len) == Phase::Finished;
                assert_eq!(finished, call == len, "len={len} call={call}");
            }
        }
    }

    #[test]
    fn test_next_when_finished_is_noop() {
        let mut nav = Navigation::new();
        nav.next(1);
        let before = nav;
        nav.next(1);
        assert_eq!(nav, before);
        assert!(!nav.can_next(1));
    }

    #[test]
    fn test_prev_from_finished_returns_to_last_card() {
        for len in 1..=5 {
            let mut nav = Navigation::new();
            for _ in 0..len {
                nav.next(len);
            }
            assert_eq!(nav.phase(len), Phase::Finished);
            nav.prev(len);
            assert_eq!(nav.phase(len), browsing(len - 1, false));
        }
    }

    #[test]
    fn test_prev_at_first_card_is_noop() {
        let mut nav = Navigation::new();
        nav.toggle_details(3);
        nav.prev(3);
        // Nothing moved, so details stay as they were
        assert_eq!(nav.phase(3), browsing(0, true));
        assert!(!nav.can_prev(3));
    }

    #[test]
    fn test_moving_hides_details() {
        let mut nav = Navigation::new();
        nav.toggle_details(3);
        nav.next(3);
        assert_eq!(nav.phase(3), browsing(1, false));

        nav.toggle_details(3);
        nav.prev(3);
        assert_eq!(nav.phase(3), browsing(0, false));
    }

    #[test]
    fn test_finishing_hides_details() {
        let mut nav = Navigation::new();
        nav.toggle_details(1);
        assert!(nav.show_details());
        nav.next(1);
        assert_eq!(nav.phase(1), Phase::Finished);
        assert!(!nav.show_details());
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut nav = Navigation::new();
        nav.next(4);
        let before = nav.phase(4);
        nav.toggle_details(4);
        assert_ne!(nav.phase(4), before);
        nav.toggle_details(4);
        assert_eq!(nav.phase(4), before);
    }

    #[test]
    fn test_toggle_ignored_when_finished() {
        let mut nav = Navigation::new();
        nav.next(1);
        nav.toggle_details(1);
        assert!(!nav.show_details());
        nav.prev(1);
        assert_eq!(nav.phase(1), browsing(0, false));
    }

    #[test]
    fn test_index_stays_in_bounds_for_any_walk() {
        // Every next/prev sequence up to length 8 over a 3-card deck
        let len = 3;
        for steps in 0..=8u32 {
            for mask in 0..(1u32 << steps) {
                let mut nav = Navigation::new();
                for bit in 0..steps {
                    if mask & (1 << bit) != 0 {
                        nav.next(len);
                    } else {
                        nav.prev(len);
                    }
                    assert!(nav.index() < len);
                    if nav.is_finished() {
                        assert_eq!(nav.index(), len - 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_one_card_deck_finished_keeps_prev_disabled() {
        let mut nav = Navigation::new();
        nav.next(1);
        assert_eq!(nav.phase(1), Phase::Finished);
        assert_eq!(nav.index(), 0);
        assert!(!nav.can_prev(1));
        assert!(!nav.can_next(1));
    }

    #[test]
    fn test_controls_follow_phase() {
        let len = 2;
        let mut nav = Navigation::new();
        assert!(!nav.can_prev(len));
        assert!(nav.can_next(len));

        nav.next(len);
        assert!(nav.can_prev(len));
        assert!(nav.can_next(len));

        nav.next(len);
        assert!(nav.can_prev(len));
        assert!(!nav.can_next(len));
    }
}
