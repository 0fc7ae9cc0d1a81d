use log::warn;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::state::scroll::{ScrollAction, ScrollState};

/// Tracks the window's scroll offset. The listener is removed on unmount.
#[hook]
pub fn use_viewport() -> UseReducerHandle<ScrollState> {
    let viewport = use_reducer(ScrollState::default);

    // Pick up the offset a reload restored before any scroll event fires.
    {
        let dispatcher = viewport.dispatcher();
        use_effect_with_deps(
            move |_| {
                match dom::scroll_offset() {
                    Ok(offset) => dispatcher.dispatch(ScrollAction::Scrolled(offset)),
                    Err(e) => warn!("Could not read scroll offset: {}", e),
                }
                || ()
            },
            (),
        );
    }

    {
        let dispatcher = viewport.dispatcher();
        use_event_with_window("scroll", move |_: Event| {
            match dom::scroll_offset() {
                Ok(offset) => dispatcher.dispatch(ScrollAction::Scrolled(offset)),
                Err(e) => warn!("Could not read scroll offset: {}", e),
            }
        });
    }

    viewport
}

pub fn scroll_to_top() {
    if let Err(e) = dom::scroll_to_top() {
        warn!("Scroll to top failed: {}", e);
    }
}
