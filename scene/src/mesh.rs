//! Wireframe geometry for the three decorative primitives.
//!
//! Each primitive tessellates into a vertex list plus an edge list of index
//! pairs. Geometry is built once per actor and reused every frame; motion is
//! applied to the vertices at projection time.

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;

use std::f64::consts::{PI, TAU};

use crate::consts::{MAX_SEGMENTS, MIN_SEGMENTS};
use crate::math::Vec3;

/// A primitive shape, sized in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere { radius: f64, width_segments: u32, height_segments: u32 },
    Cuboid { width: f64, height: f64, depth: f64 },
    Torus { radius: f64, tube: f64, radial_segments: u32, tubular_segments: u32 },
}

impl Primitive {
    #[must_use]
    pub fn sphere(radius: f64, segments: u32) -> Self {
        Self::Sphere { radius, width_segments: segments, height_segments: segments }
    }

    #[must_use]
    pub fn cube(size: f64) -> Self {
        Self::Cuboid { width: size, height: size, depth: size }
    }

    #[must_use]
    pub fn torus(radius: f64, tube: f64, radial_segments: u32, tubular_segments: u32) -> Self {
        Self::Torus { radius, tube, radial_segments, tubular_segments }
    }

    /// Short lowercase name, used in logs and tests.
    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Cuboid { .. } => "box",
            Self::Torus { .. } => "torus",
        }
    }

    #[must_use]
    pub fn wireframe(&self) -> Wireframe {
        match *self {
            Self::Sphere { radius, width_segments, height_segments } => {
                sphere(radius, clamp_segments(width_segments), clamp_segments(height_segments))
            }
            Self::Cuboid { width, height, depth } => cuboid(width, height, depth),
            Self::Torus { radius, tube, radial_segments, tubular_segments } => {
                torus(radius, tube, clamp_segments(radial_segments), clamp_segments(tubular_segments))
            }
        }
    }
}

/// Vertices plus the index pairs joining them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
}

#[must_use]
pub fn clamp_segments(segments: u32) -> u32 {
    segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

#[allow(clippy::cast_possible_truncation)]
fn index(value: u32) -> usize {
    value as usize
}

/// Latitude/longitude sphere with single pole vertices.
///
/// Layout: vertex 0 is the north pole, then `height - 1` rings of `width`
/// vertices each, then the south pole.
fn sphere(radius: f64, width: u32, height: u32) -> Wireframe {
    let w = index(width);
    let rings = index(height) - 1;
    let mut vertices = Vec::with_capacity(rings * w + 2);
    let mut edges = Vec::with_capacity(rings * w + index(height) * w);

    vertices.push(Vec3::new(0.0, radius, 0.0));
    for iy in 1..height {
        let theta = f64::from(iy) / f64::from(height) * PI;
        for ix in 0..width {
            let phi = f64::from(ix) / f64::from(width) * TAU;
            vertices.push(Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }
    vertices.push(Vec3::new(0.0, -radius, 0.0));
    let south = vertices.len() - 1;

    let ring_start = |ring: usize| 1 + ring * w;
    for ring in 0..rings {
        let start = ring_start(ring);
        for ix in 0..w {
            // Parallel.
            edges.push((start + ix, start + (ix + 1) % w));
            // Meridian to the next ring down (or the south pole).
            if ring + 1 < rings {
                edges.push((start + ix, ring_start(ring + 1) + ix));
            } else {
                edges.push((start + ix, south));
            }
        }
    }
    for ix in 0..w {
        edges.push((0, ring_start(0) + ix));
    }

    Wireframe { vertices, edges }
}

fn cuboid(width: f64, height: f64, depth: f64) -> Wireframe {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    let vertices = vec![
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];
    #[rustfmt::skip]
    let edges = vec![
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
    Wireframe { vertices, edges }
}

/// Torus lying in the XY plane, ring radius `radius`, tube radius `tube`.
fn torus(radius: f64, tube: f64, radial: u32, tubular: u32) -> Wireframe {
    let (r, t) = (index(radial), index(tubular));
    let mut vertices = Vec::with_capacity(r * t);
    let mut edges = Vec::with_capacity(2 * r * t);

    for j in 0..radial {
        let v = f64::from(j) / f64::from(radial) * TAU;
        for i in 0..tubular {
            let u = f64::from(i) / f64::from(tubular) * TAU;
            let ring = radius + tube * v.cos();
            vertices.push(Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin()));
        }
    }

    let at = |j: usize, i: usize| (j % r) * t + (i % t);
    for j in 0..r {
        for i in 0..t {
            edges.push((at(j, i), at(j, i + 1)));
            edges.push((at(j, i), at(j + 1, i)));
        }
    }

    Wireframe { vertices, edges }
}
