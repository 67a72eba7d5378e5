//! Decorative 3D scene engine for the portfolio page.
//!
//! This crate is compiled to WebAssembly alongside the Leptos client. It owns
//! everything needed to animate a handful of wireframe primitives on a 2D
//! canvas: vector math and perspective projection, primitive meshes, float and
//! orbit motion, per-scene presets, and the Canvas2D renderer. Scenes never
//! read input and never write application state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`math`] | `Vec3`, Euler rotation, viewport and perspective camera |
//! | [`mesh`] | Sphere / cuboid / torus wireframe geometry |
//! | [`motion`] | Float bobbing, sphere distortion, camera auto-rotate |
//! | [`preset`] | Scene kinds, project categories, colours and actor layouts |
//! | [`engine`] | Pure frame builder [`engine::SceneCore`] and the canvas-backed [`engine::SceneCanvas`] |
//! | [`render`] | Draws a frame onto a `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants and the palette |

pub mod consts;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod motion;
pub mod preset;
pub mod render;
