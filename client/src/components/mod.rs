//! Page sections and the small pieces they share.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render the static `content` tables; only the navigation bar,
//! contact form and toaster hold state. Browser-only behaviour (scroll
//! listener, scene loop, reveal observer) is compiled in with `hydrate`.

pub mod about;
pub mod achievements;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod link_out;
pub mod navigation;
pub mod projects;
pub mod reveal;
pub mod scene_host;
pub mod section_heading;
pub mod stat_grid;
pub mod toaster;
