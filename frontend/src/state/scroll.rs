use std::rc::Rc;

use yew::Reducible;

use crate::config;

/// Latest vertical scroll offset and the flags derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
}

impl ScrollState {
    pub fn at(offset: f64) -> Self {
        Self { offset }
    }

    #[cfg(test)]
    fn offset(&self) -> f64 {
        self.offset
    }

    /// Shows the scroll-to-top button.
    pub fn past_threshold(&self) -> bool {
        self.offset > config::SCROLL_TOP_THRESHOLD
    }

    /// Gives the fixed nav its solid background.
    pub fn nav_background_active(&self) -> bool {
        self.offset > config::NAV_BACKGROUND_THRESHOLD
    }

    pub fn parallax_offset(&self) -> f64 {
        self.offset * config::PARALLAX_FACTOR
    }
}

pub enum ScrollAction {
    Scrolled(f64),
}

impl Reducible for ScrollState {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let ScrollAction::Scrolled(offset) = action;
        if offset == self.offset {
            return self;
        }
        Rc::new(ScrollState::at(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_top_threshold() {
        for offset in [0.0, 1.0, 150.0, 299.9, 300.0] {
            assert!(!ScrollState::at(offset).past_threshold(), "{offset}");
        }
        for offset in [300.1, 301.0, 5000.0] {
            assert!(ScrollState::at(offset).past_threshold(), "{offset}");
        }
    }

    #[test]
    fn nav_background_threshold() {
        for offset in [0.0, 49.0, 50.0] {
            assert!(!ScrollState::at(offset).nav_background_active(), "{offset}");
        }
        for offset in [50.5, 51.0, 300.0] {
            assert!(ScrollState::at(offset).nav_background_active(), "{offset}");
        }
    }

    #[test]
    fn flags_follow_latest_offset() {
        let state = Rc::new(ScrollState::default())
            .reduce(ScrollAction::Scrolled(800.0))
            .reduce(ScrollAction::Scrolled(20.0));
        assert_eq!(state.offset(), 20.0);
        assert!(!state.past_threshold());
        assert!(!state.nav_background_active());
    }

    #[test]
    fn parallax_is_a_tenth() {
        assert_eq!(ScrollState::at(250.0).parallax_offset(), 25.0);
        assert_eq!(ScrollState::default().parallax_offset(), 0.0);
    }
}
