//! Frame building and the canvas-backed scene surface.
//!
//! [`SceneCore`] is pure: given the scene clock and a viewport it returns the
//! coloured line segments and captions to draw, so tests can inspect a frame
//! without a browser. [`SceneCanvas`] pairs a core with an
//! `HtmlCanvasElement` and hands frames to [`crate::render`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::MIN_DEPTH_FADE;
use crate::math::{Point, Projected, Vec3, Viewport};
use crate::mesh::Wireframe;
use crate::preset::{Actor, Color, Scene};
use crate::render;

/// One projected wireframe edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Mean distance of the two endpoints in front of the camera.
    pub depth: f64,
    pub color: Color,
    pub alpha: f64,
}

/// Caption text placed in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point,
    pub size_px: f64,
    pub color: Color,
}

/// Everything needed to paint one instant of a scene.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Sorted far-to-near so nearer edges paint over farther ones.
    pub segments: Vec<Segment>,
    pub labels: Vec<Label>,
}

/// Scene plus its tessellated geometry.
#[derive(Debug, Clone)]
pub struct SceneCore {
    pub scene: Scene,
    meshes: Vec<Wireframe>,
}

impl SceneCore {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        let meshes = scene.actors.iter().map(|actor| actor.primitive.wireframe()).collect();
        Self { scene, meshes }
    }

    /// Build the frame for `elapsed_secs` into the scene.
    #[must_use]
    pub fn frame(&self, elapsed_secs: f64, viewport: Viewport) -> Frame {
        let mut frame = Frame::default();
        if viewport.is_empty() {
            return frame;
        }

        let orbit = self.scene.auto_rotate.map_or(0.0, |rotate| rotate.angle(elapsed_secs));
        let camera = self.scene.camera;

        for (actor, mesh) in self.scene.actors.iter().zip(&self.meshes) {
            let t = elapsed_secs + actor.phase;
            let projected: Vec<Option<Projected>> = mesh
                .vertices
                .iter()
                .map(|&v| camera.project(world_position(actor, v, t).rotate_y(-orbit), viewport))
                .collect();

            for &(a, b) in &mesh.edges {
                let (Some(pa), Some(pb)) = (projected[a], projected[b]) else {
                    continue;
                };
                let depth = (pa.depth + pb.depth) * 0.5;
                frame.segments.push(Segment {
                    from: pa.point,
                    to: pb.point,
                    depth,
                    color: actor.color,
                    alpha: actor.opacity * depth_fade(camera.distance, depth),
                });
            }
        }
        frame.segments.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        if let Some(caption) = &self.scene.caption {
            let anchor = Vec3::ZERO.rotate_y(-orbit);
            if let Some(p) = camera.project(anchor, viewport) {
                frame.labels.push(Label {
                    text: caption.text.clone(),
                    at: p.point,
                    size_px: caption.size * camera.focal_length(viewport) / p.depth,
                    color: caption.color,
                });
            }
        }

        frame
    }
}

/// Local vertex → world space: distortion, resting rotation and position,
/// then the float pose layered on top.
fn world_position(actor: &Actor, local: Vec3, t: f64) -> Vec3 {
    let shaped = actor.distort.map_or(local, |distort| distort.displace(local, t));
    let placed = actor.rotation.apply(shaped) + actor.position;
    let pose = actor.float.pose(t);
    pose.rotation.apply(placed) + pose.offset
}

/// Edges at the camera's focus distance draw at full strength; farther edges
/// fade down to `MIN_DEPTH_FADE`.
fn depth_fade(focus: f64, depth: f64) -> f64 {
    (focus / depth).clamp(MIN_DEPTH_FADE, 1.0)
}

/// Scene drawing onto a browser canvas.
pub struct SceneCanvas {
    pub core: SceneCore,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
    dpr: f64,
}

impl SceneCanvas {
    /// Acquire the canvas' 2D context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser refuses a 2D context for this canvas.
    pub fn new(canvas: HtmlCanvasElement, scene: Scene) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { core: SceneCore::new(scene), canvas, ctx, viewport: Viewport::new(0.0, 0.0), dpr: 1.0 })
    }

    /// Resize the backing store to match the CSS size and device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        let viewport = Viewport::new(width_css.max(0.0), height_css.max(0.0));
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        if viewport == self.viewport && dpr == self.dpr {
            return;
        }
        self.viewport = viewport;
        self.dpr = dpr;
        self.canvas.set_width((viewport.width * dpr).round() as u32);
        self.canvas.set_height((viewport.height * dpr).round() as u32);
    }

    /// Draw the frame for `elapsed_secs`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self, elapsed_secs: f64) -> Result<(), JsValue> {
        let frame = self.core.frame(elapsed_secs, self.viewport);
        render::draw(&self.ctx, &frame, self.viewport, self.dpr)
    }
}
