//! Aggregation: multi-selection bounds and the padded world extent.
//!
//! Both entry points are order-independent reductions over caller-supplied
//! snapshots. The extent feeding the overview must always be renderable, so
//! an empty board falls back to a fixed region around the world origin
//! instead of a degenerate box.

#[cfg(test)]
#[path = "extent_test.rs"]
mod extent_test;

use tracing::debug;

use crate::bbox::{BoundingBox, transformed_bounding_box_of};
use crate::camera::{Camera, Size};
use crate::consts::{FALLBACK_EXTENT_HEIGHT, FALLBACK_EXTENT_WIDTH, WORLD_PADDING};
use crate::shape::Shape;

/// Smallest box enclosing every shape in the selection.
///
/// `None` for an empty selection; callers branch on this to hide the
/// selection outline rather than drawing a zero-size box at the origin.
/// Rotated shapes contribute their transformed boxes. Shapes without
/// extent (a stroke with fewer than two sample pairs) are skipped.
#[must_use]
pub fn combined_bounding_box<'a, I>(shapes: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes
        .into_iter()
        .filter(|s| s.contributes_bounds())
        .map(transformed_bounding_box_of)
        .reduce(|acc, b| acc.union(&b))
}

/// The padded world region the overview must cover: every visible shape
/// plus the camera's visible rectangle, grown by [`WORLD_PADDING`].
///
/// With no visible content the extent falls back to a fixed region
/// centered on the world origin, padded the same way, so the overview
/// always has something to render.
#[must_use]
pub fn world_extent(shapes: &[Shape], camera: &Camera, render_surface: Size) -> BoundingBox {
    match combined_bounding_box(shapes.iter().filter(|s| s.visible)) {
        Some(content) => content
            .union(&camera.visible_world_bounds(render_surface))
            .expand(WORLD_PADDING),
        None => {
            debug!("no visible content; falling back to the default extent");
            BoundingBox::new(
                -FALLBACK_EXTENT_WIDTH / 2.0,
                -FALLBACK_EXTENT_HEIGHT / 2.0,
                FALLBACK_EXTENT_WIDTH / 2.0,
                FALLBACK_EXTENT_HEIGHT / 2.0,
            )
            .expand(WORLD_PADDING)
        }
    }
}
