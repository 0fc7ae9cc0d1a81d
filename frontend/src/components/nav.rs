use yew::prelude::*;

use crate::config::PRACTICE;
use crate::state::nav::{NavAction, NavMenu};

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub background_active: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_reducer(NavMenu::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Toggle))
    };

    // No prevent_default here: the anchor still has to jump to its section.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Close))
    };

    html! {
        <nav class={classes!("top-nav", props.background_active.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">{PRACTICE.name}</div>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </div>

                <button
                    class="burger-menu"
                    aria-label="Toggle navigation"
                    aria-expanded={menu.expanded().to_string()}
                    onclick={toggle_menu}
                >
                    { if menu.expanded() { "✕" } else { "☰" } }
                </button>
            </div>

            if menu.expanded() {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="mobile-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            }
        </nav>
    }
}
