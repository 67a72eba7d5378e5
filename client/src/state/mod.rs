//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Each model is a plain struct with pure transitions; components wrap them
//! in `RwSignal`s and feed browser events in. Nothing here touches the DOM,
//! so every transition is unit-tested natively.

pub mod contact;
pub mod nav;
pub mod toast;
