use log::{debug, warn};
use yew::prelude::*;

use crate::dom::RevealObserver;
use crate::state::reveal::{RevealAction, RevealState};

/// Reveals marked regions as they scroll into view. Observation starts after
/// the first render and is torn down when the component unmounts.
#[hook]
pub fn use_reveal() -> UseReducerHandle<RevealState> {
    let reveal = use_reducer(RevealState::default);

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_reveal = dispatcher.clone();
                let observer = RevealObserver::attach(move |region| {
                    debug!("Revealing region {}", region);
                    on_reveal.dispatch(RevealAction::Reveal(region));
                });
                let observer = match observer {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("Reveal animations disabled: {}", e);
                        dispatcher.dispatch(RevealAction::RevealAll);
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    reveal
}
