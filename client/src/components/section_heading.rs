use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Accent;

/// Centered section title, `lead` in the body colour and `highlight` in the
/// accent, with a short summary below.
#[component]
pub fn SectionHeading(
    lead: &'static str,
    highlight: &'static str,
    accent: Accent,
    summary: &'static str,
) -> impl IntoView {
    view! {
        <Reveal class="section-heading">
            <h2 class="section-heading__title">
                {lead} " " <span class=accent.text_class()>{highlight}</span>
            </h2>
            <p class="section-heading__summary">{summary}</p>
        </Reveal>
    }
}
