//! Notification surface.
//!
//! `notify` is the only way in: it pushes onto the shared `ToastState` and,
//! in the browser, schedules the dismissal.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::Icon;
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION_MS;
use crate::state::toast::ToastState;

/// Show a toast and return its id.
pub fn notify(toasts: RwSignal<ToastState>, title: &str, description: &str) -> u64 {
    let id = toasts.try_update(|t| t.push(title, description)).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
        toasts.maybe_update(|t| t.dismiss(id));
    })
    .forget();
    id
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="region" aria-label="Notifications" aria-live="polite">
            <Show when=move || !toasts.with(ToastState::is_empty)>
                {move || {
                    toasts
                        .get()
                        .toasts
                        .into_iter()
                        .map(|toast| {
                            let id = toast.id;
                            view! {
                                <div class="toast" role="status">
                                    <div class="toast__body">
                                        <p class="toast__title">{toast.title}</p>
                                        <p class="toast__description">{toast.description}</p>
                                    </div>
                                    <button
                                        class="toast__close"
                                        aria-label="Dismiss notification"
                                        on:click=move |_| {
                                            toasts.maybe_update(|t| t.dismiss(id));
                                        }
                                    >
                                        <IconGlyph icon=Icon::Close/>
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </Show>
        </div>
    }
}
