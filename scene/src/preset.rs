//! Scene presets: which primitives appear, where, in what colour, and how
//! they move.
//!
//! DESIGN
//! ======
//! A scene is chosen by [`SceneKind`]; project cards pick theirs by a
//! [`ProjectCategory`] tag. Presets are plain data so the page can build a
//! scene on the server for layout decisions without touching the canvas.

#[cfg(test)]
#[path = "preset_test.rs"]
mod preset_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{ACTOR_PHASE_STEP, BLUE, CAPTION_WORLD_SIZE, CYAN, HERO_CAPTION, PURPLE};
use crate::math::{Camera, Euler, Vec3};
use crate::mesh::Primitive;
use crate::motion::{AutoRotate, Distort, Float};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba()` string with `alpha` clamped to `[0, 1]`.
    #[must_use]
    pub fn css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }

    /// `#rrggbb` hex string.
    #[cfg(test)]
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Category tag attached to each project; selects the project card's scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Algo,
    Video,
    #[default]
    General,
}

impl ProjectCategory {
    pub const ALL: [Self; 3] = [Self::Algo, Self::Video, Self::General];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Algo => "algo",
            Self::Video => "video",
            Self::General => "general",
        }
    }

    /// Parse a category tag. Unknown tags fall back to [`ProjectCategory::General`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "algo" => Ok(Self::Algo),
            "video" => Ok(Self::Video),
            "general" => Ok(Self::General),
            _ => Err(UnknownCategory(s.to_owned())),
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned by [`ProjectCategory::from_str`] for an unrecognised tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown project category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// Which decorative scene to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Hero,
    Project(ProjectCategory),
    Contact,
}

/// One animated primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub primitive: Primitive,
    pub color: Color,
    pub opacity: f64,
    pub position: Vec3,
    pub rotation: Euler,
    pub float: Float,
    pub distort: Option<Distort>,
    /// Seconds added to the scene clock for this actor's motion.
    pub phase: f64,
}

impl Actor {
    #[must_use]
    pub fn new(primitive: Primitive, color: Color, float: Float) -> Self {
        Self {
            primitive,
            color,
            opacity: 1.0,
            position: Vec3::ZERO,
            rotation: Euler::default(),
            float,
            distort: None,
            phase: 0.0,
        }
    }

    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn rotated(mut self, rotation: Euler) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn distorted(mut self, distort: Distort) -> Self {
        self.distort = Some(distort);
        self
    }
}

/// Text drawn at the scene origin, facing the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub color: Color,
    /// Glyph height in world units.
    pub size: f64,
}

/// A complete scene description.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub auto_rotate: Option<AutoRotate>,
    pub actors: Vec<Actor>,
    pub caption: Option<Caption>,
}

impl Scene {
    fn new(camera: Camera, auto_rotate: Option<AutoRotate>, actors: Vec<Actor>) -> Self {
        let actors = actors
            .into_iter()
            .zip(0_u32..)
            .map(|(mut actor, i)| {
                actor.phase = f64::from(i) * ACTOR_PHASE_STEP;
                actor
            })
            .collect();
        Self { camera, auto_rotate, actors, caption: None }
    }

    /// Attach a centred caption in the accent purple, replacing any preset one.
    #[must_use]
    pub fn with_caption(mut self, text: impl Into<String>) -> Self {
        self.caption = Some(Caption { text: text.into(), color: PURPLE, size: CAPTION_WORLD_SIZE });
        self
    }
}

impl SceneKind {
    #[must_use]
    pub fn scene(self) -> Scene {
        match self {
            Self::Hero => hero(),
            Self::Project(category) => project(category),
            Self::Contact => contact(),
        }
    }
}

fn hero() -> Scene {
    Scene::new(
        Camera::new(5.0, 75.0),
        None,
        vec![
            Actor::new(Primitive::cube(0.8), PURPLE, Float::new(1.5, 1.0, 2.0))
                .at(Vec3::new(2.0, 0.0, 0.0))
                .opacity(0.7),
            Actor::new(Primitive::sphere(0.6, 32), CYAN, Float::new(2.0, 0.5, 1.5))
                .at(Vec3::new(-2.0, 1.0, -1.0))
                .opacity(0.6),
            Actor::new(Primitive::torus(0.8, 0.3, 16, 100), BLUE, Float::new(1.0, 2.0, 1.0))
                .at(Vec3::new(0.0, -1.5, 1.0))
                .rotated(Euler::new(0.5, 0.0, 0.0))
                .opacity(0.5),
        ],
    )
    .with_caption(HERO_CAPTION)
}

fn project(category: ProjectCategory) -> Scene {
    let actor = match category {
        ProjectCategory::Algo => Actor::new(Primitive::cube(1.5), PURPLE, Float::new(2.0, 1.0, 2.0))
            .rotated(Euler::new(0.4, 0.4, 0.0)),
        ProjectCategory::Video => Actor::new(Primitive::sphere(1.0, 32), BLUE, Float::new(1.5, 0.5, 1.5)),
        ProjectCategory::General => Actor::new(Primitive::torus(1.0, 0.4, 16, 100), CYAN, Float::new(1.0, 2.0, 1.0))
            .rotated(Euler::new(0.5, 0.0, 0.0)),
    };
    Scene::new(Camera::new(4.0, 50.0), Some(AutoRotate::new(2.0)), vec![actor.opacity(0.8)])
}

fn contact() -> Scene {
    Scene::new(
        Camera::new(5.0, 50.0),
        Some(AutoRotate::new(1.0)),
        vec![
            Actor::new(Primitive::sphere(1.5, 64), PURPLE, Float::new(2.0, 1.0, 2.0)).distorted(Distort::new(0.3, 2.0)),
            Actor::new(Primitive::sphere(0.8, 32), CYAN, Float::new(1.5, 0.5, 1.5))
                .at(Vec3::new(3.0, 1.0, -2.0))
                .distorted(Distort::new(0.5, 1.5)),
            Actor::new(Primitive::sphere(0.6, 32), BLUE, Float::new(1.0, 1.5, 1.0))
                .at(Vec3::new(-2.5, -1.0, 1.0))
                .distorted(Distort::new(0.4, 3.0)),
        ],
    )
}
