use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use yew::Reducible;

// Structural check only: something, "@", something, ".", something.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern compiles"));

/// The six slots of the inquiry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Message,
    PreferredTime,
    AgreeToContact,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::Message,
        FormField::PreferredTime,
        FormField::AgreeToContact,
    ];

    /// Stable key, also used as the DOM id of the matching input.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Message => "message",
            FormField::PreferredTime => "preferredTime",
            FormField::AgreeToContact => "agreeToContact",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single-field edit. The variant fixes both the field and its value type.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Phone(String),
    Email(String),
    Message(String),
    PreferredTime(String),
    AgreeToContact(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> FormField {
        match self {
            FieldUpdate::Name(_) => FormField::Name,
            FieldUpdate::Phone(_) => FormField::Phone,
            FieldUpdate::Email(_) => FormField::Email,
            FieldUpdate::Message(_) => FormField::Message,
            FieldUpdate::PreferredTime(_) => FormField::PreferredTime,
            FieldUpdate::AgreeToContact(_) => FormField::AgreeToContact,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub preferred_time: String,
    pub agree_to_contact: bool,
}

impl FormFields {
    /// Replaces exactly the entry named by `update`.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(value) => self.name = value,
            FieldUpdate::Phone(value) => self.phone = value,
            FieldUpdate::Email(value) => self.email = value,
            FieldUpdate::Message(value) => self.message = value,
            FieldUpdate::PreferredTime(value) => self.preferred_time = value,
            FieldUpdate::AgreeToContact(value) => self.agree_to_contact = value,
        }
    }

    /// Runs every rule and collects all failures. Pure.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required");
        }
        if self.phone.trim().is_empty() {
            errors.insert(FormField::Phone, "Phone is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, "Email is required");
        } else if !EMAIL_SHAPE.is_match(&self.email) {
            errors.insert(FormField::Email, "Please enter a valid email");
        }
        if self.message.trim().is_empty() {
            errors.insert(FormField::Message, "Please tell us what brings you here");
        }
        if self.preferred_time.trim().is_empty() {
            errors.insert(FormField::PreferredTime, "Preferred time is required");
        }
        if !self.agree_to_contact {
            errors.insert(FormField::AgreeToContact, "You must agree to be contacted");
        }

        errors
    }
}

/// Failing fields and their messages. Absent means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn has(&self, field: FormField) -> bool {
        self.get(field).is_some()
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|message| message.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    NotSubmitted,
    Submitted,
}

pub enum FormAction {
    Update(FieldUpdate),
    Submit,
}

/// Inquiry form: field values, visible errors and the one-way submission flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryForm {
    fields: FormFields,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

impl InquiryForm {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    /// Stores the new value and drops any error shown for that field.
    /// Other fields are not re-validated.
    pub fn update_field(&mut self, update: FieldUpdate) {
        let field = update.field();
        self.fields.apply(update);
        self.errors.clear(field);
    }

    pub fn validate(&self) -> ValidationErrors {
        self.fields.validate()
    }

    /// Validates, publishes the errors and moves to `Submitted` when there are none.
    /// Once submitted this is a no-op.
    pub fn submit(&mut self) -> SubmissionStatus {
        if self.is_submitted() {
            return self.status;
        }

        self.errors = self.fields.validate();
        if self.errors.is_empty() {
            self.status = SubmissionStatus::Submitted;
        }
        self.status
    }
}

impl Reducible for InquiryForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Update(update) => next.update_field(update),
            FormAction::Submit => {
                next.submit();
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> InquiryForm {
        let mut form = InquiryForm::default();
        form.update_field(FieldUpdate::Name("Jane Doe".into()));
        form.update_field(FieldUpdate::Phone("555-1212".into()));
        form.update_field(FieldUpdate::Email("jane@example.com".into()));
        form.update_field(FieldUpdate::Message("Need help with anxiety".into()));
        form.update_field(FieldUpdate::PreferredTime("Weekday mornings".into()));
        form.update_field(FieldUpdate::AgreeToContact(true));
        form
    }

    #[test]
    fn each_default_field_fails_on_its_own() {
        for field in FormField::ALL {
            let mut form = filled();
            let reset = match field {
                FormField::Name => FieldUpdate::Name(String::new()),
                FormField::Phone => FieldUpdate::Phone(String::new()),
                FormField::Email => FieldUpdate::Email(String::new()),
                FormField::Message => FieldUpdate::Message(String::new()),
                FormField::PreferredTime => FieldUpdate::PreferredTime(String::new()),
                FormField::AgreeToContact => FieldUpdate::AgreeToContact(false),
            };
            form.update_field(reset);

            let errors = form.validate();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn defaults_report_every_message() {
        let mut form = InquiryForm::default();
        assert_eq!(form.submit(), SubmissionStatus::NotSubmitted);

        let errors = form.errors();
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.get(FormField::Phone), Some("Phone is required"));
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(
            errors.get(FormField::Message),
            Some("Please tell us what brings you here")
        );
        assert_eq!(
            errors.get(FormField::PreferredTime),
            Some("Preferred time is required")
        );
        assert_eq!(
            errors.get(FormField::AgreeToContact),
            Some("You must agree to be contacted")
        );
        assert_eq!(errors.fields().count(), 6);
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        let mut form = filled();
        form.update_field(FieldUpdate::Name("   \t".into()));
        form.update_field(FieldUpdate::Message("\n".into()));

        let errors = form.validate();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![FormField::Name, FormField::Message]
        );
    }

    #[test]
    fn email_messages() {
        let mut form = filled();
        form.update_field(FieldUpdate::Email("not-an-email".into()));
        assert_eq!(
            form.validate().get(FormField::Email),
            Some("Please enter a valid email")
        );

        form.update_field(FieldUpdate::Email(String::new()));
        assert_eq!(form.validate().get(FormField::Email), Some("Email is required"));

        form.update_field(FieldUpdate::Email("a@b".into()));
        assert!(form.validate().has(FormField::Email));

        form.update_field(FieldUpdate::Email("a@b.co".into()));
        assert!(!form.validate().has(FormField::Email));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut form = filled();
        form.update_field(FieldUpdate::Email("nope".into()));
        form.update_field(FieldUpdate::AgreeToContact(false));

        assert_eq!(form.validate(), form.validate());
    }

    #[test]
    fn update_clears_only_that_field() {
        let mut form = InquiryForm::default();
        form.submit();
        assert!(form.errors().has(FormField::Email));

        // still invalid, but the error goes away until the next submit
        form.update_field(FieldUpdate::Email("x".into()));
        assert_eq!(form.errors().get(FormField::Email), None);
        assert!(form.errors().has(FormField::Name));
        assert_eq!(form.errors().fields().count(), 5);
    }

    #[test]
    fn update_replaces_one_entry() {
        let mut fields = FormFields::default();
        fields.apply(FieldUpdate::PreferredTime("Evenings".into()));

        assert_eq!(
            fields,
            FormFields {
                preferred_time: "Evenings".into(),
                ..FormFields::default()
            }
        );
    }

    #[test]
    fn valid_submission() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmissionStatus::Submitted);
        assert!(form.errors().is_empty());
        assert!(form.is_submitted());
    }

    #[test]
    fn submitted_only_when_validate_is_clean() {
        let mut form = filled();
        form.update_field(FieldUpdate::AgreeToContact(false));
        let expected = form.validate().is_empty();
        form.submit();
        assert_eq!(form.is_submitted(), expected);

        form.update_field(FieldUpdate::AgreeToContact(true));
        let expected = form.validate().is_empty();
        form.submit();
        assert_eq!(form.is_submitted(), expected);
    }

    #[test]
    fn submitted_is_terminal() {
        let mut form = filled();
        form.submit();
        form.update_field(FieldUpdate::Name(String::new()));

        assert_eq!(form.submit(), SubmissionStatus::Submitted);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn reducer_routes_actions() {
        let form = Rc::new(InquiryForm::default());
        let form = form.reduce(FormAction::Submit);
        assert_eq!(form.errors().fields().count(), 6);

        let form = form.reduce(FormAction::Update(FieldUpdate::Phone("555".into())));
        assert!(!form.errors().has(FormField::Phone));
        assert_eq!(form.fields().phone, "555");
        assert_eq!(form.status(), SubmissionStatus::NotSubmitted);
    }

    #[test]
    fn snapshot_uses_field_keys() {
        let json = serde_json::to_value(filled().fields()).unwrap();
        for field in FormField::ALL {
            assert!(json.get(field.key()).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn field_display_matches_key() {
        let failing: Vec<_> = InquiryForm::default()
            .validate()
            .fields()
            .map(|field| field.to_string())
            .collect();
        assert_eq!(failing.join(", "), "name, phone, email, message, preferredTime, agreeToContact");
    }
}
