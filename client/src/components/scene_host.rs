//! Canvas host for the decorative 3D scenes.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydration the host mounts a `scene::engine::SceneCanvas` on its
//! `<canvas>` and drives it from `requestAnimationFrame` until the component
//! is cleaned up. Server rendering emits the empty canvas only.
//!
//! TRADE-OFFS
//! ==========
//! Visitors asking for reduced motion get a single still frame. A failing
//! render is logged once and stops the loop; the page itself is unaffected.

use leptos::prelude::*;
use scene::preset::{Scene, SceneKind};

#[cfg(test)]
#[path = "scene_host_test.rs"]
mod scene_host_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use scene::engine::SceneCanvas;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::HtmlCanvasElement;

#[cfg(feature = "hydrate")]
fn fit(scene: &mut SceneCanvas, canvas: &HtmlCanvasElement) {
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    scene.set_viewport(f64::from(canvas.client_width()), f64::from(canvas.client_height()), dpr);
}

#[cfg(feature = "hydrate")]
fn start(canvas: HtmlCanvasElement, kind: SceneKind, preset: Scene, alive: Arc<AtomicBool>) {
    let shapes: Vec<_> = preset.actors.iter().map(|a| a.primitive.shape_name()).collect();
    log::debug!("scene {kind:?}: mounting {}", shapes.join(", "));
    let mut scene = match SceneCanvas::new(canvas.clone(), preset) {
        Ok(scene) => scene,
        Err(err) => {
            log::warn!("scene {kind:?}: no 2d context: {err:?}");
            return;
        }
    };
    fit(&mut scene, &canvas);

    if crate::util::motion::prefers_reduced_motion() {
        if let Err(err) = scene.render(0.0) {
            log::warn!("scene {kind:?}: render failed: {err:?}");
        }
        return;
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let mut first_ts = None::<f64>;
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let origin = *first_ts.get_or_insert(ts);
        fit(&mut scene, &canvas);
        if let Err(err) = scene.render((ts - origin) / 1000.0) {
            log::warn!("scene {kind:?}: render failed, stopping: {err:?}");
            holder_for_cb.borrow_mut().take();
            return;
        }
        let scheduled = holder_for_cb
            .borrow()
            .as_ref()
            .map(|next| window_for_cb.request_animation_frame(next.as_ref().unchecked_ref()));
        if let Some(Err(err)) = scheduled {
            log::warn!("scene {kind:?}: requestAnimationFrame failed: {err:?}");
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => *holder.borrow_mut() = Some(cb),
        Err(err) => log::warn!("scene {kind:?}: requestAnimationFrame failed: {err:?}"),
    }
}

/// Preset for `kind`, with `caption` replacing the preset caption when given.
#[must_use]
pub fn host_scene(kind: SceneKind, caption: Option<&str>) -> Scene {
    let preset = kind.scene();
    match caption {
        Some(text) => preset.with_caption(text),
        None => preset,
    }
}

/// Decorative scene canvas. Hidden from assistive technology.
#[component]
pub fn SceneHost(
    kind: SceneKind,
    #[prop(optional)] caption: Option<&'static str>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_for_cleanup = Arc::clone(&alive);
        on_cleanup(move || alive_for_cleanup.store(false, Ordering::Relaxed));

        let started = Rc::new(std::cell::Cell::new(false));
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.replace(true) {
                return;
            }
            start(canvas, kind, host_scene(kind, caption), Arc::clone(&alive));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = caption;

    let class_name = if class.is_empty() { "scene-host".to_owned() } else { format!("scene-host {class}") };
    view! {
        <div class=class_name aria-hidden="true" data-scene=scene_tag(kind)>
            <canvas node_ref=canvas_ref class="scene-host__canvas"></canvas>
        </div>
    }
}

/// `data-scene` value: `hero`, `contact`, or the project category tag.
#[must_use]
pub fn scene_tag(kind: SceneKind) -> &'static str {
    match kind {
        SceneKind::Hero => "hero",
        SceneKind::Contact => "contact",
        SceneKind::Project(category) => category.tag(),
    }
}
