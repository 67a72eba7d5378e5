//! The portfolio page.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::achievements::Achievements;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navigation::Navigation;
use crate::components::projects::Projects;

/// Sections in document order. Expects a `RwSignal<ToastState>` in context.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navigation/>
        <main class="page">
            <Hero/>
            <About/>
            <Projects/>
            <Achievements/>
            <Contact/>
        </main>
        <Footer/>
    }
}
