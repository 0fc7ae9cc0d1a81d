use yew::prelude::*;

use crate::state::accordion::AccordionState;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: [FaqEntry; 3] = [
    FaqEntry {
        question: "Do you accept insurance?",
        answer: "No, I do not accept insurance directly. However, I provide a detailed superbill after each session that you can submit to your insurance company for potential reimbursement. Many clients find they can recover a significant portion of their therapy costs this way.",
    },
    FaqEntry {
        question: "Are online sessions available?",
        answer: "Yes! I offer virtual therapy sessions via Zoom on Mondays, Wednesdays, and Fridays from 1:00 PM to 5:00 PM. Online sessions are just as effective as in-person therapy and provide the convenience of receiving support from your own space.",
    },
    FaqEntry {
        question: "What is your cancellation policy?",
        answer: "I require 24-hour advance notice for cancellations or rescheduling. Cancellations made with less than 24 hours notice will be charged the full session fee. Emergency situations are handled on a case-by-case basis.",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(AccordionState::default);

    html! {
        <div class="faq-list">
            { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: ()| accordion.set((*accordion).toggle(index)))
                };
                html! {
                    <FaqItem
                        question={entry.question}
                        is_open={accordion.is_open(index)}
                        {on_toggle}
                    >
                        <p>{entry.answer}</p>
                    </FaqItem>
                }
            }) }
        </div>
    }
}
