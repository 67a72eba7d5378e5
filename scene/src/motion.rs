//! Time-driven motion applied to actors and the camera.
//!
//! All functions are pure in `t` (seconds since the scene started), so a frame
//! can be rebuilt for any instant without carrying state between frames.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use std::f64::consts::TAU;

use crate::consts::ORBIT_PERIOD_SECS;
use crate::math::{Euler, Vec3};

/// Gentle bob-and-wobble around an actor's resting pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

impl Float {
    #[must_use]
    pub const fn new(speed: f64, rotation_intensity: f64, float_intensity: f64) -> Self {
        Self { speed, rotation_intensity, float_intensity }
    }

    #[must_use]
    pub fn pose(&self, t: f64) -> Pose {
        let phase = t / 4.0 * self.speed;
        let (sin, cos) = phase.sin_cos();
        Pose {
            rotation: Euler::new(
                cos / 8.0 * self.rotation_intensity,
                sin / 8.0 * self.rotation_intensity,
                sin / 20.0 * self.rotation_intensity,
            ),
            offset: Vec3::new(0.0, sin / 10.0 * self.float_intensity, 0.0),
        }
    }

    /// Largest vertical displacement this float can produce.
    #[cfg(test)]
    #[must_use]
    pub fn max_lift(&self) -> f64 {
        self.float_intensity.abs() / 10.0
    }
}

/// Rotation and translation layered over an actor's resting transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub rotation: Euler,
    pub offset: Vec3,
}

/// Radial vertex wobble that makes a sphere look liquid.
///
/// `amount` is the peak radial displacement as a fraction of the vertex's
/// distance from the actor origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distort {
    pub amount: f64,
    pub speed: f64,
}

impl Distort {
    #[must_use]
    pub const fn new(amount: f64, speed: f64) -> Self {
        Self { amount, speed }
    }

    #[must_use]
    pub fn displace(&self, v: Vec3, t: f64) -> Vec3 {
        let phase = t * self.speed;
        let wave = (v.x * 3.0 + phase).sin() * (v.y * 2.5 + phase * 0.7).cos() * (v.z * 2.0 + phase * 1.3).sin();
        v * (1.0 + self.amount * wave)
    }
}

/// Camera orbit around the Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoRotate {
    pub speed: f64,
}

impl AutoRotate {
    #[must_use]
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Orbit angle in radians at time `t`; one revolution every
    /// `ORBIT_PERIOD_SECS / speed` seconds.
    #[must_use]
    pub fn angle(&self, t: f64) -> f64 {
        (t * TAU / ORBIT_PERIOD_SECS * self.speed) % TAU
    }
}
