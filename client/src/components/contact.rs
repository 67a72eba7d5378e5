//! `#contact`: the contact form, direct channels, social cards and the
//! closing call to action.
//!
//! The form never leaves the page. Submitting logs field lengths, raises the
//! "Message Sent!" toast and clears the inputs.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use scene::preset::SceneKind;

use crate::components::icon::IconGlyph;
use crate::components::link_out::LinkOut;
use crate::components::reveal::Reveal;
use crate::components::scene_host::SceneHost;
use crate::components::section_heading::SectionHeading;
use crate::components::toaster::notify;
use crate::content::contact::{CONTACT_CHANNELS, ContactChannel, EMAIL_HREF, SOCIAL_LINKS};
use crate::content::{Accent, Icon, Section, is_placeholder};
use crate::state::contact::{ContactField, ContactForm};
use crate::state::toast::ToastState;
use crate::util::reveal::{Direction, stagger};

pub(crate) const SENT_TITLE: &str = "Message Sent!";
pub(crate) const SENT_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon!";

/// Submit the form: clear it and raise the confirmation toast.
pub(crate) fn handle_submit(form: RwSignal<ContactForm>, toasts: RwSignal<ToastState>) -> u64 {
    if let Some(sent) = form.try_update(ContactForm::submit) {
        let (name_len, email_len, message_len) = sent.lengths();
        #[cfg(feature = "hydrate")]
        log::info!("contact form submitted: name={name_len} email={email_len} message={message_len} chars");
        #[cfg(not(feature = "hydrate"))]
        let _ = (name_len, email_len, message_len);
    }
    notify(toasts, SENT_TITLE, SENT_DESCRIPTION)
}

/// Which field an input event came from, read from the element's `name`.
fn input_field(ev: &leptos::ev::Event) -> Option<ContactField> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let name = ev.target()?.dyn_into::<web_sys::Element>().ok()?.get_attribute("name")?;
        match name.parse() {
            Ok(field) => Some(field),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Name | ContactField::Message => "text",
    }
}

#[component]
fn ContactInput(form: RwSignal<ContactForm>, field: ContactField) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        if let Some(field) = input_field(&ev) {
            form.update(|f| f.set(field, event_target_value(&ev)));
        }
    };
    match field {
        ContactField::Message => view! {
            <textarea
                class="input input--area"
                name=field.name()
                placeholder=field.placeholder()
                rows="5"
                required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        ContactField::Name | ContactField::Email => view! {
            <input
                class="input"
                name=field.name()
                type=input_type(field)
                placeholder=field.placeholder()
                required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    }
}

#[component]
fn ChannelCard(channel: ContactChannel, index: usize) -> impl IntoView {
    view! {
        <Reveal delay_ms=stagger(0, 100, index) class="card channel">
            <span class=channel.accent.chip_class()>
                <IconGlyph icon=channel.icon/>
            </span>
            <div class="channel__body">
                <h4 class="channel__label">{channel.label}</h4>
                <Show
                    when=move || !is_placeholder(channel.href)
                    fallback=move || view! { <p class="muted">{channel.value}</p> }
                >
                    <a href=channel.href class=channel.accent.text_class()>
                        {channel.value}
                    </a>
                </Show>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        handle_submit(form, toasts);
    };

    view! {
        <section id=Section::Contact.id() class="section section--contact">
            <div class="container">
                <SectionHeading
                    lead="Let's"
                    highlight="Connect"
                    accent=Accent::Purple
                    summary="I'm always open to discussing new opportunities, interesting projects, or just \
                             having a chat about technology and programming."
                />

                <div class="contact__grid">
                    <Reveal direction=Direction::Left class="card contact__form-card">
                        <h3 class="card__title">"Send me a message"</h3>
                        <form class="contact-form" on:submit=on_submit>
                            {ContactField::ALL
                                .into_iter()
                                .map(|field| view! { <ContactInput form=form field=field/> })
                                .collect_view()}
                            <button type="submit" class="button button--primary button--block">
                                <IconGlyph icon=Icon::Send/>
                                "Send Message"
                            </button>
                        </form>
                    </Reveal>

                    <Reveal direction=Direction::Right class="contact__aside">
                        <SceneHost kind=SceneKind::Contact class="contact__scene"/>

                        <div class="contact__channels">
                            {CONTACT_CHANNELS
                                .iter()
                                .enumerate()
                                .map(|(index, channel)| view! { <ChannelCard channel=*channel index=index/> })
                                .collect_view()}
                        </div>

                        <div class="contact__social">
                            <h3 class="subsection-title">"Connect with me"</h3>
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <LinkOut href=link.href class="card social-card">
                                            <span class=link.accent.chip_class()>
                                                <IconGlyph icon=link.icon/>
                                            </span>
                                            <span class="social-card__body">
                                                <span class="social-card__label">{link.label}</span>
                                                <span class="muted">{link.handle}</span>
                                            </span>
                                            <IconGlyph icon=Icon::ExternalLink class="social-card__arrow"/>
                                        </LinkOut>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>

                <Reveal duration_ms=600 class="card contact__cta">
                    <h3 class="card__title">"Ready to work together?"</h3>
                    <p class="muted">
                        "I'm currently open to new opportunities and exciting projects. Let's build something \
                         amazing together!"
                    </p>
                    <LinkOut href=EMAIL_HREF class="button button--primary">
                        <IconGlyph icon=Icon::Mail/>
                        "Get in Touch"
                    </LinkOut>
                </Reveal>
            </div>
        </section>
    }
}
