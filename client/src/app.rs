//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::content::profile::PROFILE;
use crate::pages::{home::HomePage, not_found::NotFoundPage};
use crate::state::toast::ToastState;
use crate::util::structured_data::person_script;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/ld+json" inner_html=person_script(&PROFILE)></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Page title: "Name | Headline".
#[must_use]
pub fn page_title() -> String {
    format!("{} | {}", PROFILE.name, PROFILE.headline)
}

/// Root application component.
///
/// Provides the shared toast queue and sets up routing for the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=page_title()/>
        <Meta name="description" content=PROFILE.summary/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
