use leptos::prelude::*;

use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Ada");
    form.set(ContactField::Email, "ada@example.com");
    form.set(ContactField::Message, "Hello there");
    form
}

#[test]
fn submit_clears_fields_and_shows_one_toast() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(filled());
        let toasts = RwSignal::new(ToastState::default());

        let id = handle_submit(form, toasts);

        assert!(form.with_untracked(ContactForm::is_empty));
        toasts.with_untracked(|t| {
            assert_eq!(t.toasts.len(), 1);
            assert_eq!(t.toasts[0].id, id);
            assert_eq!(t.toasts[0].title, SENT_TITLE);
            assert_eq!(t.toasts[0].description, SENT_DESCRIPTION);
        });
    });
}

#[test]
fn repeated_submits_keep_a_single_toast() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(filled());
        let toasts = RwSignal::new(ToastState::default());

        handle_submit(form, toasts);
        form.set(filled());
        let second = handle_submit(form, toasts);

        toasts.with_untracked(|t| {
            assert_eq!(t.toasts.len(), 1);
            assert_eq!(t.toasts[0].id, second);
        });
    });
}

#[test]
fn toast_copy_matches_confirmation_text() {
    assert_eq!(SENT_TITLE, "Message Sent!");
    assert_eq!(SENT_DESCRIPTION, "Thanks for reaching out. I'll get back to you soon!");
}
