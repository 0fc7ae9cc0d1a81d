/// Single-open, collapsible accordion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }

    /// Opens `item` and closes whatever was open. Toggling the open item collapses it.
    pub fn toggle(self, item: usize) -> Self {
        if self.is_open(item) {
            Self { open: None }
        } else {
            Self { open: Some(item) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_open() {
        let state = AccordionState::default().toggle(0).toggle(2);
        assert!(state.is_open(2));
        assert!(!state.is_open(0));
    }

    #[test]
    fn open_item_collapses() {
        let state = AccordionState::default().toggle(1).toggle(1);
        assert_eq!(state, AccordionState::default());
    }
}
