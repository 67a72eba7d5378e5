use leptos::prelude::*;

use crate::content::Section;

/// Router fallback for any path other than `/`.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"Page not found."</h1>
            <a href=format!("/{}", Section::Home.href()) class="button button--outline">
                "Back to the portfolio"
            </a>
        </main>
    }
}
