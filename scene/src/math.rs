#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;

use std::ops::{Add, Mul, Sub};

use crate::consts::NEAR_PLANE;

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rotate about the Y axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: self.x * cos + self.z * sin, y: self.y, z: -self.x * sin + self.z * cos }
    }

    /// Rotate about the X axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: self.x, y: self.y * cos - self.z * sin, z: self.y * sin + self.z * cos }
    }

    /// Rotate about the Z axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_z(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: self.x * cos - self.y * sin, y: self.x * sin + self.y * cos, z: self.z }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

/// Euler angles in radians, applied in XYZ order (Z first, then Y, then X),
/// matching the convention of the scene descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        v.rotate_z(self.z).rotate_y(self.y).rotate_x(self.x)
    }
}

/// A point in screen space (CSS pixels, origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawable area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A projected point with its distance in front of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub point: Point,
    pub depth: f64,
}

/// Perspective camera on the +Z axis looking at the world origin.
///
/// `distance` is the camera's z position; `fov_deg` is the vertical field
/// of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub fov_deg: f64,
}

impl Camera {
    #[must_use]
    pub const fn new(distance: f64, fov_deg: f64) -> Self {
        Self { distance, fov_deg }
    }

    /// Pixels per world unit at depth 1.0 for the given viewport.
    #[must_use]
    pub fn focal_length(&self, viewport: Viewport) -> f64 {
        (viewport.height * 0.5) / (self.fov_deg.to_radians() * 0.5).tan()
    }

    /// Project a world-space point to the viewport.
    ///
    /// Returns `None` for points at or behind the near plane.
    #[must_use]
    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Projected> {
        let depth = self.distance - world.z;
        if depth <= NEAR_PLANE {
            return None;
        }
        let scale = self.focal_length(viewport) / depth;
        let center = viewport.center();
        Some(Projected { point: Point::new(center.x + world.x * scale, center.y - world.y * scale), depth })
    }
}
