//! In-page anchor navigation and scroll offset.
//!
//! Missing anchors are not an error: the call reports `false` and the page
//! stays where it is.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id targeted by `href`. Accepts `#id` or a bare `id`.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#').unwrap_or(href).trim();
    (!id.is_empty()).then_some(id)
}

/// Smooth-scroll the element named by `href` into view.
///
/// Returns `true` when an element was found.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_id(href) else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("scroll: no element with id {id}");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Current vertical scroll offset in CSS pixels; `0.0` outside the browser.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
