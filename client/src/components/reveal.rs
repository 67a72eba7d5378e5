//! Wrapper that fades its children in the first time they scroll into view.

use leptos::prelude::*;

use crate::util::reveal::{Direction, REVEAL_DURATION_MS, RevealSpec};

#[component]
pub fn Reveal(
    #[prop(optional)] direction: Direction,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] duration_ms: Option<u32>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let spec = RevealSpec::new(direction)
        .delay(delay_ms)
        .duration(duration_ms.unwrap_or(REVEAL_DURATION_MS));
    let visible = RwSignal::new(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(el) = node_ref.get() else {
            return;
        };
        if visible.get_untracked() {
            return;
        }
        if crate::util::motion::prefers_reduced_motion() {
            visible.set(true);
            return;
        }
        if let Err(err) = crate::util::reveal::observe_once(&el, move || visible.set(true)) {
            log::warn!("reveal: observer unavailable: {err:?}");
            visible.set(true);
        }
    });

    let class_name = move || {
        let base = spec.class(visible.get());
        if class.is_empty() { base } else { format!("{base} {class}") }
    };

    view! {
        <div node_ref=node_ref class=class_name style=spec.style()>
            {children()}
        </div>
    }
}
