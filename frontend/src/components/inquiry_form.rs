use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::PRACTICE;
use crate::state::form::{FieldUpdate, FormAction, FormField, InquiryForm, SubmissionStatus};

fn error_line(form: &InquiryForm, field: FormField) -> Html {
    match form.errors().get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

fn input_class(form: &InquiryForm, field: FormField) -> Classes {
    classes!("form-input", form.errors().has(field).then(|| "input-error"))
}

#[function_component(InquiryFormView)]
pub fn inquiry_form_view() -> Html {
    let form = use_reducer(InquiryForm::default);

    {
        use_effect_with_deps(
            move |(status, fields)| {
                if *status == SubmissionStatus::Submitted {
                    info!("Inquiry submitted");
                    match serde_json::to_string(fields) {
                        Ok(snapshot) => debug!("Form submitted: {}", snapshot),
                        Err(e) => debug!("Could not serialize form snapshot: {}", e),
                    }
                }
                || ()
            },
            (form.status(), form.fields().clone()),
        );
    }

    let text_input = |make: fn(String) -> FieldUpdate| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Update(make(input.value())));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Update(FieldUpdate::Message(input.value())));
        })
    };

    let on_agree = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Update(FieldUpdate::AgreeToContact(input.checked())));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pending = form.validate();
            if !pending.is_empty() {
                let failing: Vec<_> = pending.fields().map(|field| field.to_string()).collect();
                debug!("Inquiry rejected, failing fields: {}", failing.join(", "));
            }
            form.dispatch(FormAction::Submit);
        })
    };

    if form.is_submitted() {
        return html! {
            <div class="form-success">
                <div class="success-icon">{"✓"}</div>
                <h4>{"Thank You!"}</h4>
                <p>
                    {"Your message has been sent successfully. I'll get back to you within 24 hours to schedule your free consultation."}
                </p>
            </div>
        };
    }

    let fields = form.fields();

    html! {
        <form class="inquiry-form" {onsubmit} novalidate=true>
            <div class="form-group">
                <label for={FormField::Name.key()}>{"Full Name *"}</label>
                <input
                    id={FormField::Name.key()}
                    class={input_class(&form, FormField::Name)}
                    value={fields.name.clone()}
                    oninput={text_input(FieldUpdate::Name)}
                    placeholder="Your full name"
                />
                { error_line(&form, FormField::Name) }
            </div>

            <div class="form-group">
                <label for={FormField::Phone.key()}>{"Phone Number *"}</label>
                <input
                    id={FormField::Phone.key()}
                    type="tel"
                    class={input_class(&form, FormField::Phone)}
                    value={fields.phone.clone()}
                    oninput={text_input(FieldUpdate::Phone)}
                    placeholder="Your phone number"
                />
                { error_line(&form, FormField::Phone) }
            </div>

            <div class="form-group">
                <label for={FormField::Email.key()}>{"Email Address *"}</label>
                <input
                    id={FormField::Email.key()}
                    type="email"
                    class={input_class(&form, FormField::Email)}
                    value={fields.email.clone()}
                    oninput={text_input(FieldUpdate::Email)}
                    placeholder="your.email@example.com"
                />
                { error_line(&form, FormField::Email) }
            </div>

            <div class="form-group">
                <label for={FormField::Message.key()}>{"What brings you here? *"}</label>
                <textarea
                    id={FormField::Message.key()}
                    class={input_class(&form, FormField::Message)}
                    value={fields.message.clone()}
                    oninput={on_message}
                    placeholder="Tell me a bit about what you'd like to work on..."
                    rows="4"
                />
                { error_line(&form, FormField::Message) }
            </div>

            <div class="form-group">
                <label for={FormField::PreferredTime.key()}>{"Preferred Contact Method *"}</label>
                <input
                    id={FormField::PreferredTime.key()}
                    class={input_class(&form, FormField::PreferredTime)}
                    value={fields.preferred_time.clone()}
                    oninput={text_input(FieldUpdate::PreferredTime)}
                    placeholder="e.g., Weekday mornings, evenings after 6pm"
                />
                { error_line(&form, FormField::PreferredTime) }
            </div>

            <div class="form-group consent">
                <input
                    id={FormField::AgreeToContact.key()}
                    type="checkbox"
                    class={classes!(form.errors().has(FormField::AgreeToContact).then(|| "input-error"))}
                    checked={fields.agree_to_contact}
                    onchange={on_agree}
                />
                <label for={FormField::AgreeToContact.key()}>
                    {format!(
                        "I agree to be contacted by {} regarding my inquiry and understand that this form is not secure for sharing sensitive information. *",
                        PRACTICE.name
                    )}
                </label>
            </div>
            { error_line(&form, FormField::AgreeToContact) }

            <button type="submit" class="submit-button">{"Send Message"}</button>
        </form>
    }
}
