//! Shared numeric constants for the scene crate.

use crate::preset::Color;

// ── Palette ─────────────────────────────────────────────────────

/// `#8b5cf6`
pub const PURPLE: Color = Color::rgb(0x8b, 0x5c, 0xf6);

/// `#00ffff`
pub const CYAN: Color = Color::rgb(0x00, 0xff, 0xff);

/// `#3b82f6`
pub const BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);

// ── Geometry ────────────────────────────────────────────────────

/// Fewest segments a curved primitive may be tessellated with.
pub const MIN_SEGMENTS: u32 = 3;

/// Most segments a curved primitive may be tessellated with. Wireframes get
/// visually noisy well before the counts a shaded renderer would use.
pub const MAX_SEGMENTS: u32 = 32;

// ── Projection ──────────────────────────────────────────────────

/// Distance in front of the camera below which points are discarded.
pub const NEAR_PLANE: f64 = 0.1;

/// Lowest depth-fade multiplier applied to far-away edges.
pub const MIN_DEPTH_FADE: f64 = 0.35;

// ── Motion ──────────────────────────────────────────────────────

/// Seconds per orbit revolution at auto-rotate speed 1.0.
pub const ORBIT_PERIOD_SECS: f64 = 60.0;

/// Phase spacing between actors so their float cycles do not line up.
pub const ACTOR_PHASE_STEP: f64 = 1.7;

// ── Captions ────────────────────────────────────────────────────

/// Caption font family used by the renderer.
pub const CAPTION_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

/// Hero caption height in world units.
pub const CAPTION_WORLD_SIZE: f64 = 0.5;

/// Default caption floating in the middle of the hero scene.
pub const HERO_CAPTION: &str = "SAURABH";
