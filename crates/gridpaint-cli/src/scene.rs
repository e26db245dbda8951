//! JSON scene description.
//!
//! ```json
//! {
//!   "width": 64,
//!   "height": 64,
//!   "background": { "r": 0, "g": 0, "b": 0, "a": 255 },
//!   "ops": [
//!     { "op": "fill_rect", "x": 8, "y": 8, "width": 16, "height": 16,
//!       "color": { "r": 255, "g": 0, "b": 0, "a": 255 } },
//!     { "op": "circle", "x": 32, "y": 32, "radius": 10,
//!       "color": { "r": 255, "g": 255, "b": 255, "a": 255 } },
//!     { "op": "flip", "axis": "vertical" }
//!   ]
//! }
//! ```
//!
//! Ops run in order against a single RGBA8 canvas.

use anyhow::{Context, Result};
use gridpaint_core::{PixelBuffer, Rect, Rgba8};
use gridpaint_ops::{TintMode, blend, blit, shapes, tint, transform};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, trace};

#[derive(Debug, Deserialize)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub background: Rgba8,
    #[serde(default)]
    pub ops: Vec<Op>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Replace,
    Keep,
    Alpha,
    Multiply,
    Additive,
}

impl BlendMode {
    fn func(self) -> fn(Rgba8, Rgba8) -> Rgba8 {
        match self {
            Self::Replace => blend::replace::<Rgba8>,
            Self::Keep => blend::keep::<Rgba8>,
            Self::Alpha => blend::alpha,
            Self::Multiply => blend::multiply,
            Self::Additive => blend::additive,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8 },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgba8,
        #[serde(default)]
        blend: BlendMode,
    },
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgba8,
        #[serde(default)]
        blend: Option<BlendMode>,
    },
    Circle { x: i32, y: i32, radius: i32, color: Rgba8 },
    FillCircle { x: i32, y: i32, radius: i32, color: Rgba8 },
    Ellipse { x: i32, y: i32, width: i32, height: i32, color: Rgba8 },
    FillEllipse { x: i32, y: i32, width: i32, height: i32, color: Rgba8 },
    Checkerboard {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        a: Rgba8,
        b: Rgba8,
        size: i32,
    },
    /// Copy a region of the canvas onto itself, scaling to fit `dest`.
    Blit {
        src: Rect,
        dest: Rect,
        #[serde(default)]
        blend: BlendMode,
    },
    Scale { x: f64, y: f64 },
    Flip { axis: Axis },
    Rotate {
        angle: f64,
        #[serde(default)]
        center: Option<[f64; 2]>,
    },
    Tint {
        color: Rgba8,
        #[serde(default)]
        mode: Option<String>,
    },
    Clear { color: Rgba8 },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Line { .. } => "line",
            Op::Rect { .. } => "rect",
            Op::FillRect { .. } => "fill_rect",
            Op::Circle { .. } => "circle",
            Op::FillCircle { .. } => "fill_circle",
            Op::Ellipse { .. } => "ellipse",
            Op::FillEllipse { .. } => "fill_ellipse",
            Op::Checkerboard { .. } => "checkerboard",
            Op::Blit { .. } => "blit",
            Op::Scale { .. } => "scale",
            Op::Flip { .. } => "flip",
            Op::Rotate { .. } => "rotate",
            Op::Tint { .. } => "tint",
            Op::Clear { .. } => "clear",
        }
    }

    /// Applies the op to `canvas`. Scale replaces the canvas.
    pub fn apply(&self, canvas: &mut PixelBuffer<Rgba8>) -> Result<()> {
        match *self {
            Op::Line { x1, y1, x2, y2, color } => shapes::draw_line(canvas, x1, y1, x2, y2, color),
            Op::Rect { x, y, width, height, color, blend } => {
                shapes::draw_rectangle(canvas, x, y, width, height, color, blend.func())
            }
            Op::FillRect { x, y, width, height, color, blend: None } => {
                shapes::fill_rectangle(canvas, x, y, width, height, color)
            }
            Op::FillRect { x, y, width, height, color, blend: Some(mode) } => {
                shapes::fill_rectangle_blend(canvas, x, y, width, height, color, mode.func())
            }
            Op::Circle { x, y, radius, color } => shapes::draw_circle(canvas, x, y, radius, color)?,
            Op::FillCircle { x, y, radius, color } => shapes::fill_circle(canvas, x, y, radius, color)?,
            Op::Ellipse { x, y, width, height, color } => shapes::draw_ellipse(canvas, x, y, width, height, color)?,
            Op::FillEllipse { x, y, width, height, color } => {
                shapes::fill_ellipse(canvas, x, y, width, height, color)?
            }
            Op::Checkerboard { x, y, width, height, a, b, size } => {
                shapes::checkerboard(canvas, x, y, width, height, a, b, size)?
            }
            Op::Blit { src, dest, blend } => {
                let source = canvas.clone();
                blit::draw_region(canvas, &source, dest, src, blend.func())?
            }
            Op::Scale { x, y } => *canvas = blit::scale(canvas, x, y)?,
            Op::Flip { axis: Axis::Horizontal } => transform::flip_horizontally(canvas),
            Op::Flip { axis: Axis::Vertical } => transform::flip_vertically(canvas),
            Op::Rotate { angle, center: None } => *canvas = transform::rotate(canvas, angle),
            Op::Rotate { angle, center: Some([cx, cy]) } => *canvas = transform::rotate_about(canvas, cx, cy, angle),
            Op::Tint { color, ref mode } => {
                let mode = match mode {
                    Some(m) => m.parse::<TintMode>()?,
                    None => TintMode::default(),
                };
                tint::tint(canvas, color, mode)
            }
            Op::Clear { color } => transform::clear(canvas, color),
        }
        Ok(())
    }
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid scene: {}", path.display()))
    }

    /// Builds the background canvas and runs every op.
    pub fn render(&self) -> Result<PixelBuffer<Rgba8>> {
        let mut canvas = PixelBuffer::filled(self.width, self.height, self.background)
            .with_context(|| format!("Invalid canvas size {}x{}", self.width, self.height))?;

        for (i, op) in self.ops.iter().enumerate() {
            trace!(index = i, op = op.name(), "scene::apply");
            op.apply(&mut canvas)
                .with_context(|| format!("Scene op #{i} ({}) failed", op.name()))?;
        }
        debug!(ops = self.ops.len(), w = canvas.width(), h = canvas.height(), "Scene rendered");
        Ok(canvas)
    }
}
