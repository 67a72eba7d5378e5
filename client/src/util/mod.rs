//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Browser calls sit behind the `hydrate` feature; SSR and native test
//! builds get deterministic fallbacks.

pub mod motion;
pub mod reveal;
pub mod scroll;
pub mod structured_data;
pub mod year;
