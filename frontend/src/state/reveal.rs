use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

/// Regions that have played their entrance animation. Grows only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealState {
    revealed: HashSet<String>,
    everything: bool,
}

impl RevealState {
    /// Marks `region` revealed. Returns false if it already was.
    pub fn reveal(&mut self, region: impl Into<String>) -> bool {
        let region = region.into();
        if self.is_revealed(&region) {
            return false;
        }
        self.revealed.insert(region)
    }

    /// Treats every region, known or not, as revealed. Used when regions
    /// cannot be observed so nothing stays hidden.
    pub fn reveal_all(&mut self) {
        self.everything = true;
    }

    pub fn is_revealed(&self, region: &str) -> bool {
        self.everything || self.revealed.contains(region)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.revealed.len()
    }
}

pub enum RevealAction {
    Reveal(String),
    RevealAll,
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = match &action {
            RevealAction::Reveal(region) if self.is_revealed(region) => return self,
            RevealAction::RevealAll if self.everything => return self,
            _ => (*self).clone(),
        };
        match action {
            RevealAction::Reveal(region) => {
                next.reveal(region);
            }
            RevealAction::RevealAll => next.reveal_all(),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unrevealed() {
        let state = RevealState::default();
        assert!(!state.is_revealed("about"));
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn reveal_is_once_per_region() {
        let mut state = RevealState::default();
        assert!(state.reveal("about"));
        assert!(!state.reveal("about"));
        assert!(state.reveal("faq"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn revealed_regions_stay_revealed() {
        let mut state = Rc::new(RevealState::default());
        for _ in 0..5 {
            state = state.reduce(RevealAction::Reveal("services".into()));
            assert!(state.is_revealed("services"));
        }
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn repeat_reveal_keeps_the_same_state() {
        let state = Rc::new(RevealState::default()).reduce(RevealAction::Reveal("hero".into()));
        let again = Rc::clone(&state).reduce(RevealAction::Reveal("hero".into()));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn reveal_all_shows_every_region() {
        let state = Rc::new(RevealState::default())
            .reduce(RevealAction::Reveal("about".into()))
            .reduce(RevealAction::RevealAll);
        for region in ["about", "hero", "contact-form", "service-2"] {
            assert!(state.is_revealed(region), "{region}");
        }

        let again = Rc::clone(&state).reduce(RevealAction::RevealAll);
        assert!(Rc::ptr_eq(&state, &again));
        let after = Rc::clone(&state).reduce(RevealAction::Reveal("faq".into()));
        assert!(Rc::ptr_eq(&state, &after));
    }
}
