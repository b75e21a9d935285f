//! Drawable shapes: the tagged geometry union, per-shape fields, and the
//! wire format.
//!
//! Shapes flow into the engine from the board sync layer (JSON
//! deserialization) already positioned in world coordinates. The engine
//! never mutates them; it only resolves them to bounding boxes. Kinds the
//! engine does not recognize deserialize to [`Geometry::Unknown`] and
//! resolve to a fixed-size default box rather than failing — newer clients
//! may put kinds on a board that older clients still have to map.
//!
//! [`Shape::validate`] is the opt-in boundary check for structural
//! invariants (sample parity, finite numbers). The geometry functions
//! themselves are total and never return errors; feeding them unvalidated
//! non-finite input propagates visibly into the output boxes.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::ARROW_HEAD_SIZE;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Rotation and scale applied about the shape's bounding-box center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Clockwise rotation in degrees around the bounding-box center.
    #[serde(default)]
    pub rotation: f64,
    /// Horizontal scale factor (1.0 = unscaled).
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    /// Vertical scale factor (1.0 = unscaled).
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { rotation: 0.0, scale_x: 1.0, scale_y: 1.0 }
    }
}

impl Transform {
    /// True when applying this transform leaves geometry untouched.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0 && self.scale_x == 1.0 && self.scale_y == 1.0
    }
}

fn default_scale() -> f64 {
    1.0
}

/// The style fields that participate in geometry.
///
/// Stroke width pads a free-form stroke's box (the samples are its
/// centerline); it does not affect solid shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Stroke width in world units.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self { stroke_width: 1.0 }
    }
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_head_size() -> f64 {
    ARROW_HEAD_SIZE
}

/// Variant-specific geometry for a shape.
///
/// Coordinates inside a variant (line endpoints, triangle vertices, stroke
/// samples) are absolute world positions; only `Rect`, `Circle`, `Ellipse`,
/// `Text`, and `Unknown` hang off the shape's anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    /// Axis-aligned rectangle; the anchor is the top-left corner.
    Rect { width: f64, height: f64 },
    /// Circle; the anchor is the center.
    Circle { radius: f64 },
    /// Ellipse; the anchor is the center.
    Ellipse { radius_x: f64, radius_y: f64 },
    /// Straight segment between two absolute endpoints.
    Line { start: Point, end: Point },
    /// Directed segment; `head_size` pads the box to cover the arrowhead.
    Arrow {
        start: Point,
        end: Point,
        #[serde(default = "default_head_size")]
        head_size: f64,
    },
    /// Three ordered vertices at absolute positions.
    Triangle { points: [Point; 3] },
    /// Free-form stroke: interleaved x,y world samples, even length.
    Stroke { samples: Vec<f64> },
    /// Text block; box dimensions are estimated from character count and
    /// font size, not measured glyph metrics.
    Text { content: String, font_size: f64 },
    /// Any kind this build does not recognize; resolves to a default box.
    #[serde(other)]
    Unknown,
}

/// A drawable shape as stored on the board and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Anchor position in world coordinates.
    pub position: Point,
    /// Rotation and scale about the bounding-box center.
    #[serde(default)]
    pub transform: Transform,
    /// Style fields that participate in box math.
    #[serde(default)]
    pub style: Style,
    /// Stacking order; lower values are drawn beneath higher values.
    #[serde(default)]
    pub z_index: i64,
    /// Hidden shapes are skipped when computing the world extent.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Variant-specific geometry.
    #[serde(flatten)]
    pub geometry: Geometry,
}

fn default_visible() -> bool {
    true
}

impl Shape {
    /// Whether this shape contributes bounds to aggregation.
    ///
    /// A free-form stroke needs at least two sample pairs to have extent;
    /// everything else always contributes.
    #[must_use]
    pub fn contributes_bounds(&self) -> bool {
        match &self.geometry {
            Geometry::Stroke { samples } => samples.len() >= 4,
            _ => true,
        }
    }

    /// Check the structural invariants the box math assumes.
    ///
    /// The geometry functions are total and tolerate malformed input by
    /// propagating it; this is the opt-in check for callers that want to
    /// reject bad data at the deserialization boundary instead.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::OddStrokeSamples`] when a stroke's sample
    /// buffer does not interleave complete x,y pairs, and
    /// [`ShapeError::NonFinite`] when any coordinate, dimension, or factor
    /// is NaN or infinite.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if let Geometry::Stroke { samples } = &self.geometry {
            if samples.len() % 2 != 0 {
                return Err(ShapeError::OddStrokeSamples { id: self.id, len: samples.len() });
            }
        }
        if !self.all_finite() {
            return Err(ShapeError::NonFinite { id: self.id });
        }
        Ok(())
    }

    fn all_finite(&self) -> bool {
        let common = self.position.x.is_finite()
            && self.position.y.is_finite()
            && self.transform.rotation.is_finite()
            && self.transform.scale_x.is_finite()
            && self.transform.scale_y.is_finite()
            && self.style.stroke_width.is_finite();
        if !common {
            return false;
        }
        match &self.geometry {
            Geometry::Rect { width, height } => width.is_finite() && height.is_finite(),
            Geometry::Circle { radius } => radius.is_finite(),
            Geometry::Ellipse { radius_x, radius_y } => radius_x.is_finite() && radius_y.is_finite(),
            Geometry::Line { start, end } => point_finite(*start) && point_finite(*end),
            Geometry::Arrow { start, end, head_size } => {
                point_finite(*start) && point_finite(*end) && head_size.is_finite()
            }
            Geometry::Triangle { points } => points.iter().all(|p| point_finite(*p)),
            Geometry::Stroke { samples } => samples.iter().all(|v| v.is_finite()),
            Geometry::Text { font_size, .. } => font_size.is_finite(),
            Geometry::Unknown => true,
        }
    }
}

fn point_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Validate every shape in a snapshot, failing on the first bad one.
///
/// # Errors
///
/// Propagates the first [`ShapeError`] encountered.
pub fn validate_all(shapes: &[Shape]) -> Result<(), ShapeError> {
    for shape in shapes {
        shape.validate()?;
    }
    Ok(())
}

/// Visible shapes sorted by `(z_index, id)` for draw order.
#[must_use]
pub fn draw_order(shapes: &[Shape]) -> Vec<&Shape> {
    let mut out: Vec<&Shape> = shapes.iter().filter(|s| s.visible).collect();
    out.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
    out
}

/// Error returned by [`Shape::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// Stroke samples must interleave complete x,y pairs.
    #[error("stroke {id} has an odd sample count: {len}")]
    OddStrokeSamples { id: ShapeId, len: usize },
    /// A coordinate, dimension, or factor is NaN or infinite.
    #[error("shape {id} contains a non-finite value")]
    NonFinite { id: ShapeId },
}
