//! Entrance animations.
//!
//! An element starts in its hidden `reveal-*` state and gains `is-visible`
//! the first time it intersects the viewport. The CSS transition does the
//! rest; this module only computes classes and timings and, in the browser,
//! watches for the first intersection.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Default transition length.
pub const REVEAL_DURATION_MS: u32 = 800;
/// Fraction of the element that must be on screen to trigger.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Side the element slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "reveal-up",
            Self::Left => "reveal-left",
            Self::Right => "reveal-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSpec {
    pub direction: Direction,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self { direction: Direction::Up, duration_ms: REVEAL_DURATION_MS, delay_ms: 0 }
    }
}

impl RevealSpec {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self { direction, ..Self::default() }
    }

    #[must_use]
    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn class(self, visible: bool) -> String {
        if visible {
            format!("reveal {} is-visible", self.direction.class())
        } else {
            format!("reveal {}", self.direction.class())
        }
    }

    #[must_use]
    pub fn style(self) -> String {
        format!("transition-duration: {}ms; transition-delay: {}ms;", self.duration_ms, self.delay_ms)
    }
}

/// Delay for the `index`-th card of a list: `base + index * step`.
#[must_use]
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

/// Call `on_visible` once, the first time `target` intersects the viewport.
///
/// The observer disconnects itself after the first hit. The callback lives as
/// long as the page.
///
/// # Errors
///
/// Returns `Err` if the browser rejects the observer; callers should show the
/// element immediately.
#[cfg(feature = "hydrate")]
pub fn observe_once(
    target: &web_sys::Element,
    on_visible: impl FnOnce() + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let hit = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !hit {
                return;
            }
            observer.disconnect();
            if let Some(f) = on_visible.take() {
                f();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    callback.forget();
    Ok(())
}
