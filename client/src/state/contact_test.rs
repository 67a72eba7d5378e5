use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Ada");
    form.set(ContactField::Email, "ada@example.com");
    form.set(ContactField::Message, "Hello there");
    form
}

#[test]
fn default_form_is_empty() {
    assert!(ContactForm::default().is_empty());
}

#[test]
fn set_writes_only_the_named_field() {
    let mut form = ContactForm::default();
    form.set(ContactField::Email, "ada@example.com");
    assert_eq!(form.get(ContactField::Email), "ada@example.com");
    assert_eq!(form.get(ContactField::Name), "");
    assert_eq!(form.get(ContactField::Message), "");
}

#[test]
fn set_replaces_previous_value() {
    let mut form = filled();
    form.set(ContactField::Name, "Grace");
    assert_eq!(form.name, "Grace");
}

#[test]
fn submit_returns_values_and_clears() {
    let mut form = filled();
    let sent = form.submit();
    assert_eq!(sent.name, "Ada");
    assert_eq!(sent.email, "ada@example.com");
    assert_eq!(sent.message, "Hello there");
    assert!(form.is_empty());
}

#[test]
fn submitting_twice_yields_empty_second_submission() {
    let mut form = filled();
    form.submit();
    let second = form.submit();
    assert_eq!(second.lengths(), (0, 0, 0));
}

#[test]
fn lengths_count_characters() {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Zoë");
    assert_eq!(form.submit().lengths(), (3, 0, 0));
}

#[test]
fn field_parses_from_input_name() {
    for field in ContactField::ALL {
        assert_eq!(field.name().parse::<ContactField>(), Ok(field));
        assert_eq!(field.to_string(), field.name());
    }
    assert_eq!("phone".parse::<ContactField>(), Err(UnknownField("phone".into())));
}

#[test]
fn placeholders_match_the_form_copy() {
    assert_eq!(ContactField::Name.placeholder(), "Your Name");
    assert_eq!(ContactField::Email.placeholder(), "Your Email");
    assert_eq!(ContactField::Message.placeholder(), "Your Message");
}
