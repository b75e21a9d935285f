#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::bbox::bounding_box_of;
use crate::camera::Point;
use crate::shape::{Geometry, Style, Transform};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape {
        id: Uuid::new_v4(),
        position: Point::new(x, y),
        transform: Transform::default(),
        style: Style::default(),
        z_index: 0,
        visible: true,
        geometry: Geometry::Rect { width: w, height: h },
    }
}

// --- combined_bounding_box ---

#[test]
fn combined_of_nothing_is_none() {
    assert!(combined_bounding_box(std::iter::empty::<&Shape>()).is_none());
}

#[test]
fn combined_of_one_equals_its_own_box() {
    let s = rect(10.0, 20.0, 30.0, 40.0);
    let combined = combined_bounding_box([&s]).unwrap();
    assert_eq!(combined, bounding_box_of(&s));
}

#[test]
fn combined_of_two_rects_scenario() {
    let a = rect(0.0, 0.0, 50.0, 50.0);
    let b = rect(100.0, 100.0, 50.0, 50.0);
    let combined = combined_bounding_box([&a, &b]).unwrap();
    assert_eq!(combined, BoundingBox::new(0.0, 0.0, 150.0, 150.0));
}

#[test]
fn combined_is_order_independent() {
    let a = rect(-10.0, 4.0, 5.0, 5.0);
    let b = rect(100.0, -100.0, 50.0, 2.0);
    let c = rect(3.0, 3.0, 1.0, 1.0);
    let forward = combined_bounding_box([&a, &b, &c]);
    let backward = combined_bounding_box([&c, &b, &a]);
    assert_eq!(forward, backward);
}

#[test]
fn combined_is_idempotent() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);
    let once = combined_bounding_box([&a, &b]).unwrap();
    let again = combined_bounding_box([&a, &b]).unwrap();
    assert_eq!(once, again);
    assert_eq!(once.union(&again), once);
}

#[test]
fn combined_uses_transformed_boxes() {
    let mut s = rect(0.0, 0.0, 100.0, 50.0);
    s.transform.rotation = 90.0;
    let combined = combined_bounding_box([&s]).unwrap();
    assert!(approx_eq(combined.width(), 50.0));
    assert!(approx_eq(combined.height(), 100.0));
}

#[test]
fn combined_skips_strokes_without_extent() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let mut empty = rect(0.0, 0.0, 0.0, 0.0);
    empty.geometry = Geometry::Stroke { samples: vec![999.0, 999.0] };
    let combined = combined_bounding_box([&a, &empty]).unwrap();
    assert_eq!(combined, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn combined_of_only_empty_strokes_is_none() {
    let mut s = rect(0.0, 0.0, 0.0, 0.0);
    s.geometry = Geometry::Stroke { samples: vec![] };
    assert!(combined_bounding_box([&s]).is_none());
}

// --- world_extent ---

#[test]
fn world_extent_unions_content_and_viewport_then_pads() {
    let shapes = vec![rect(0.0, 0.0, 100.0, 50.0)];
    let extent = world_extent(&shapes, &Camera::default(), Size::new(800.0, 600.0));
    // content {0,0,100,50} ∪ viewport {0,0,800,600}, padded by 40
    assert_eq!(extent, BoundingBox::new(-40.0, -40.0, 840.0, 640.0));
}

#[test]
fn world_extent_content_outside_viewport_extends_extent() {
    let shapes = vec![rect(-500.0, -200.0, 50.0, 50.0)];
    let extent = world_extent(&shapes, &Camera::default(), Size::new(800.0, 600.0));
    assert_eq!(extent, BoundingBox::new(-540.0, -240.0, 840.0, 640.0));
}

#[test]
fn world_extent_tracks_panned_zoomed_camera() {
    let shapes = vec![rect(0.0, 0.0, 10.0, 10.0)];
    let camera = Camera { pan_x: -100.0, pan_y: -100.0, zoom: 2.0 };
    // viewport: min (50,50), size (400,300)
    let extent = world_extent(&shapes, &camera, Size::new(800.0, 600.0));
    assert_eq!(extent, BoundingBox::new(-40.0, -40.0, 490.0, 390.0));
}

#[test]
fn world_extent_empty_board_falls_back() {
    let extent = world_extent(&[], &Camera::default(), Size::new(800.0, 600.0));
    // fallback region 1000x700 on the origin, padded by 40
    assert_eq!(extent, BoundingBox::new(-540.0, -390.0, 540.0, 390.0));
    assert!(extent.min_x.is_finite() && extent.max_y.is_finite());
}

#[test]
fn world_extent_ignores_hidden_shapes() {
    let mut hidden = rect(5000.0, 5000.0, 10.0, 10.0);
    hidden.visible = false;
    let extent = world_extent(&[hidden], &Camera::default(), Size::new(800.0, 600.0));
    assert_eq!(extent, BoundingBox::new(-540.0, -390.0, 540.0, 390.0));
}

#[test]
fn world_extent_includes_rotated_shape_extents() {
    let mut s = rect(300.0, 300.0, 200.0, 0.0);
    s.transform.rotation = 90.0;
    // The degenerate horizontal bar becomes vertical: x 400, y 200..400.
    let extent = world_extent(&[s], &Camera::default(), Size::new(100.0, 100.0));
    assert!(approx_eq(extent.max_y, 400.0 + 40.0));
}
