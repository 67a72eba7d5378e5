//! Links: anchors that smooth-scroll, external links that open a new tab.

#[cfg(test)]
#[path = "link_out_test.rs"]
mod link_out_test;

use leptos::prelude::*;

use crate::content::LinkKind;
use crate::util::scroll::scroll_to_anchor;

/// `(target, rel)` attributes for `href`.
#[must_use]
pub fn link_attrs(href: &str) -> (Option<&'static str>, Option<&'static str>) {
    match LinkKind::of(href) {
        LinkKind::External => (Some("_blank"), Some("noopener noreferrer")),
        LinkKind::Placeholder | LinkKind::Anchor | LinkKind::Handler => (None, None),
    }
}

/// A link to another site or an OS handler (`mailto:`, `tel:`).
#[component]
pub fn LinkOut(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let (target, rel) = link_attrs(href);
    view! {
        <a href=href class=class target=target rel=rel aria-label=label>
            {children()}
        </a>
    }
}

/// In-page link to `#section`.
///
/// Clicks are intercepted and smooth-scrolled; a missing anchor leaves the
/// page where it is. Without JavaScript the browser jumps natively.
#[component]
pub fn AnchorLink(href: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        scroll_to_anchor(href);
    };
    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
