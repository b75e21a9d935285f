//! Bounding boxes: the `BoundingBox` type and the per-shape calculators.
//!
//! [`bounding_box_of`] maps every shape variant to its minimal enclosing
//! axis-aligned rectangle; [`transformed_bounding_box_of`] additionally
//! applies the shape's rotation and scale about the box's own center. Both
//! are total: they never fail, and unrecognized kinds degrade to a
//! fixed-size default box. Non-finite input is not sanitized here — it
//! propagates into the output so a contract violation upstream surfaces as
//! an obviously broken extent rather than being silently swallowed.

#[cfg(test)]
#[path = "bbox_test.rs"]
mod bbox_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{
    DEFAULT_SHAPE_HEIGHT, DEFAULT_SHAPE_WIDTH, TEXT_CHAR_WIDTH_FACTOR, TEXT_LINE_HEIGHT_FACTOR,
};
use crate::shape::{Geometry, Shape};

/// An axis-aligned rectangle in world or surface coordinates.
///
/// Width, height, and center are derived accessors, never stored, so
/// `width() == max_x - min_x` holds by construction. Degenerate boxes
/// (zero width or height) are legal; a zero-length line produces one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Box spanning two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Degenerate box containing a single point.
    #[must_use]
    pub fn at_point(p: Point) -> Self {
        Self { min_x: p.x, min_y: p.y, max_x: p.x, max_y: p.y }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Smallest box containing this box and the given point.
    #[must_use]
    pub fn include(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Box grown by `margin` on all four sides.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Whether the point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Minimal enclosing axis-aligned box for a shape, ignoring its transform.
///
/// Total over every variant: unknown kinds resolve to a fixed-size default
/// box anchored at the shape's position rather than an error. A free-form
/// stroke's box covers its centerline samples padded by half the stroke
/// width; with no samples at all it degenerates to the anchor.
#[must_use]
pub fn bounding_box_of(shape: &Shape) -> BoundingBox {
    let pos = shape.position;
    match &shape.geometry {
        Geometry::Rect { width, height } => {
            BoundingBox::new(pos.x, pos.y, pos.x + width, pos.y + height)
        }
        Geometry::Circle { radius } => {
            BoundingBox::new(pos.x - radius, pos.y - radius, pos.x + radius, pos.y + radius)
        }
        Geometry::Ellipse { radius_x, radius_y } => {
            BoundingBox::new(pos.x - radius_x, pos.y - radius_y, pos.x + radius_x, pos.y + radius_y)
        }
        Geometry::Line { start, end } => BoundingBox::from_corners(*start, *end),
        Geometry::Arrow { start, end, head_size } => {
            BoundingBox::from_corners(*start, *end).expand(*head_size)
        }
        Geometry::Triangle { points } => {
            points[1..]
                .iter()
                .fold(BoundingBox::at_point(points[0]), |b, p| b.include(*p))
        }
        Geometry::Stroke { samples } => stroke_box(pos, samples, shape.style.stroke_width),
        Geometry::Text { content, font_size } => {
            let chars = content.chars().count() as f64;
            BoundingBox::new(
                pos.x,
                pos.y,
                pos.x + chars * font_size * TEXT_CHAR_WIDTH_FACTOR,
                pos.y + font_size * TEXT_LINE_HEIGHT_FACTOR,
            )
        }
        Geometry::Unknown => {
            BoundingBox::new(pos.x, pos.y, pos.x + DEFAULT_SHAPE_WIDTH, pos.y + DEFAULT_SHAPE_HEIGHT)
        }
    }
}

/// Axis-aligned box of the shape after applying its transform.
///
/// The transform scales and rotates the untransformed box's corners about
/// that box's own center (rotation is clockwise-positive degrees in the
/// y-down screen convention). The result is the minimal AABB of the
/// transformed box: exact for rectangles, a conservative bound for other
/// silhouettes. An identity transform returns the untransformed box
/// unchanged.
#[must_use]
pub fn transformed_bounding_box_of(shape: &Shape) -> BoundingBox {
    let base = bounding_box_of(shape);
    if shape.transform.is_identity() {
        return base;
    }

    let center = base.center();
    let (sin, cos) = shape.transform.rotation.to_radians().sin_cos();
    let transformed = |corner: Point| -> Point {
        let dx = (corner.x - center.x) * shape.transform.scale_x;
        let dy = (corner.y - center.y) * shape.transform.scale_y;
        Point::new(center.x + dx * cos - dy * sin, center.y + dx * sin + dy * cos)
    };

    let corners = [
        Point::new(base.min_x, base.min_y),
        Point::new(base.max_x, base.min_y),
        Point::new(base.max_x, base.max_y),
        Point::new(base.min_x, base.max_y),
    ];
    corners[1..]
        .iter()
        .fold(BoundingBox::at_point(transformed(corners[0])), |b, c| b.include(transformed(*c)))
}

/// Centerline min/max over interleaved x,y samples, padded by half the
/// stroke width. No samples at all degenerates to the anchor position;
/// an odd trailing sample is ignored.
fn stroke_box(anchor: Point, samples: &[f64], stroke_width: f64) -> BoundingBox {
    let mut pairs = samples.chunks_exact(2);
    let Some(first) = pairs.next() else {
        return BoundingBox::at_point(anchor);
    };
    pairs
        .fold(BoundingBox::at_point(Point::new(first[0], first[1])), |b, pair| {
            b.include(Point::new(pair[0], pair[1]))
        })
        .expand(stroke_width / 2.0)
}
