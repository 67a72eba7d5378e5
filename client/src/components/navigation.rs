//! Fixed navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a local `NavState`: the window scroll listener feeds
//! `observe_scroll` and only notifies subscribers when the style flips.
//! Nav links close the mobile menu whether or not their anchor exists.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::link_out::{AnchorLink, LinkOut};
use crate::content::profile::PROFILE;
use crate::content::{Icon, NAV_SECTIONS, Section};
use crate::state::nav::NavState;
use crate::util::scroll::scroll_to_anchor;

#[must_use]
pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled { "site-nav site-nav--scrolled" } else { "site-nav" }
}

#[component]
fn NavLink(nav: RwSignal<NavState>, section: Section, class: &'static str) -> impl IntoView {
    let href = section.href();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        nav.update(|n| {
            n.follow(href, scroll_to_anchor);
        });
    };
    view! {
        <a href=href class=class on:click=on_click>
            {section.label()}
        </a>
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::scroll_offset;

        // Pick up a restored scroll position after hydration.
        Effect::new(move || {
            nav.maybe_update(|n| n.observe_scroll(scroll_offset()));
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            nav.maybe_update(|n| n.observe_scroll(scroll_offset()));
        });
        on_cleanup(move || handle.remove());
    }

    let menu_open = move || nav.get().mobile_menu_open;

    view! {
        <nav class=move || nav_class(nav.get().scrolled)>
            <div class="site-nav__inner">
                <AnchorLink href=Section::Home.href() class="site-nav__brand">
                    {PROFILE.name}
                </AnchorLink>

                <div class="site-nav__links">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&section| view! { <NavLink nav=nav section=section class="site-nav__link"/> })
                        .collect_view()}
                </div>

                <div class="site-nav__social">
                    <LinkOut href=PROFILE.github_url class="site-nav__icon" label="GitHub">
                        <IconGlyph icon=Icon::Github/>
                    </LinkOut>
                    <LinkOut href=PROFILE.linkedin_url class="site-nav__icon" label="LinkedIn">
                        <IconGlyph icon=Icon::Linkedin/>
                    </LinkOut>
                </div>

                <button
                    class="site-nav__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    <Show when=menu_open fallback=|| view! { <IconGlyph icon=Icon::Menu/> }>
                        <IconGlyph icon=Icon::Close/>
                    </Show>
                </button>
            </div>

            <Show when=menu_open>
                <div class="site-nav__mobile">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&section| view! { <NavLink nav=nav section=section class="site-nav__mobile-link"/> })
                        .collect_view()}
                    <div class="site-nav__mobile-social">
                        <LinkOut href=PROFILE.github_url class="site-nav__mobile-link">
                            <IconGlyph icon=Icon::Github/>
                            <span>"GitHub"</span>
                        </LinkOut>
                        <LinkOut href=PROFILE.linkedin_url class="site-nav__mobile-link">
                            <IconGlyph icon=Icon::Linkedin/>
                            <span>"LinkedIn"</span>
                        </LinkOut>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
