use yew::prelude::*;

use crate::hooks::viewport::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub visible: bool,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button class="scroll-top" aria-label="Scroll to top" {onclick}>
            {"↑"}
        </button>
    }
}
