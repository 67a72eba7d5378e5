//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is one scrollable page; `home` composes every section in
//! document order and delegates rendering details to `components`.

pub mod home;
pub mod not_found;
