//! World/overview coordinate mapping and the per-frame overview model.
//!
//! [`OverviewMapping`] is the bidirectional affine transform between world
//! space and the fixed-size overview surface; [`overview_model`] bundles
//! everything the host draws in one pass — projected shapes in draw order
//! and the camera viewport indicator — plus the mapping itself so pointer
//! events can be routed back through [`crate::input`]. All of it is derived
//! per frame from the caller's snapshot and never cached.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use serde::{Deserialize, Serialize};

use crate::bbox::{BoundingBox, transformed_bounding_box_of};
use crate::camera::{Camera, Point, Size};
use crate::consts::{MIN_EXTENT_SIZE, OVERVIEW_HEIGHT_PX, OVERVIEW_WIDTH_PX};
use crate::extent::world_extent;
use crate::shape::{Shape, ShapeId, draw_order};

/// The overview surface size the host allocates by default.
#[must_use]
pub fn default_overview_surface() -> Size {
    Size::new(OVERVIEW_WIDTH_PX, OVERVIEW_HEIGHT_PX)
}

/// Uniform world-to-surface transform derived from a world extent.
///
/// The scale preserves aspect ratio — whichever axis is the tighter fit
/// determines it — and the scaled extent is centered within the surface on
/// the slack axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewMapping {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    min_x: f64,
    min_y: f64,
}

impl OverviewMapping {
    /// Build the mapping that fits `extent` inside `surface`.
    ///
    /// A degenerate extent axis is clamped to a minimum size so the scale
    /// is always finite.
    #[must_use]
    pub fn new(extent: &BoundingBox, surface: Size) -> Self {
        let extent_w = extent.width().max(MIN_EXTENT_SIZE);
        let extent_h = extent.height().max(MIN_EXTENT_SIZE);
        let scale = (surface.width / extent_w).min(surface.height / extent_h);
        Self {
            scale,
            offset_x: (surface.width - extent_w * scale) / 2.0,
            offset_y: (surface.height - extent_h * scale) / 2.0,
            min_x: extent.min_x,
            min_y: extent.min_y,
        }
    }

    /// The uniform world-to-surface scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Convert a world point to overview-surface pixels.
    #[must_use]
    pub fn world_to_surface(&self, world: Point) -> Point {
        Point::new(
            self.offset_x + (world.x - self.min_x) * self.scale,
            self.offset_y + (world.y - self.min_y) * self.scale,
        )
    }

    /// Convert an overview-surface pixel position to world coordinates.
    #[must_use]
    pub fn surface_to_world(&self, surface: Point) -> Point {
        Point::new(
            (surface.x - self.offset_x) / self.scale + self.min_x,
            (surface.y - self.offset_y) / self.scale + self.min_y,
        )
    }

    /// Project a world-space box to surface pixels. The scale is positive,
    /// so corner order is preserved.
    #[must_use]
    pub fn project_box(&self, b: &BoundingBox) -> BoundingBox {
        let min = self.world_to_surface(Point::new(b.min_x, b.min_y));
        let max = self.world_to_surface(Point::new(b.max_x, b.max_y));
        BoundingBox::new(min.x, min.y, max.x, max.y)
    }
}

/// One shape's projected footprint on the overview surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSprite {
    /// Id of the shape this sprite was projected from.
    pub id: ShapeId,
    /// Transformed bounding box in overview-surface pixels.
    pub rect: BoundingBox,
}

/// Everything the host needs to draw the overview and route its pointer
/// events for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewModel {
    /// The world/surface transform the rest of the model was derived from.
    pub mapping: OverviewMapping,
    /// Visible shapes in draw order (ascending z-index, ties by id).
    pub sprites: Vec<ShapeSprite>,
    /// Camera viewport rectangle in overview-surface pixels.
    pub indicator: BoundingBox,
    /// Camera viewport rectangle in world units.
    pub viewport_world: BoundingBox,
}

/// Build the per-frame overview model from a consistent snapshot of the
/// board and camera.
#[must_use]
pub fn overview_model(
    shapes: &[Shape],
    camera: &Camera,
    render_surface: Size,
    overview_surface: Size,
) -> OverviewModel {
    let extent = world_extent(shapes, camera, render_surface);
    let mapping = OverviewMapping::new(&extent, overview_surface);

    let sprites = draw_order(shapes)
        .into_iter()
        .filter(|s| s.contributes_bounds())
        .map(|s| ShapeSprite { id: s.id, rect: mapping.project_box(&transformed_bounding_box_of(s)) })
        .collect();

    let viewport_world = camera.visible_world_bounds(render_surface);
    let indicator = mapping.project_box(&viewport_world);

    OverviewModel { mapping, sprites, indicator, viewport_world }
}
