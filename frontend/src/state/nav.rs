use std::rc::Rc;

use yew::Reducible;

/// Mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    expanded: bool,
}

impl NavMenu {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }
}

pub enum NavAction {
    Toggle,
    Close,
}

impl Reducible for NavMenu {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::Toggle => next.toggle(),
            NavAction::Close => next.close(),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        let mut nav = NavMenu::default();
        nav.toggle();
        assert!(nav.expanded());
        nav.toggle();
        assert!(!nav.expanded());
    }

    #[test]
    fn close_from_either_state() {
        let mut nav = NavMenu::default();
        nav.close();
        assert!(!nav.expanded());

        nav.toggle();
        nav.close();
        assert!(!nav.expanded());
        nav.close();
        assert!(!nav.expanded());
    }

    #[test]
    fn reducer() {
        let nav = Rc::new(NavMenu::default()).reduce(NavAction::Toggle);
        assert!(nav.expanded());
        assert!(!nav.reduce(NavAction::Close).expanded());
    }
}
