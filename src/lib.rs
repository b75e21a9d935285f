//! Pure geometry engine for the whiteboard canvas and its overview mini-map.
//!
//! This crate owns the math the rest of the application calls into:
//! computing axis-aligned bounding boxes for drawable shapes (including
//! rotated ones), aggregating them into selection bounds and the padded
//! world extent, mapping between the unbounded world space and the
//! fixed-size overview surface, and turning pointer gestures on that
//! surface into world-space navigation intents. Every entry point is a pure
//! computation over a caller-supplied snapshot of shapes and camera state:
//! no internal mutable state, no I/O, no rendering. The host layer owns the
//! event loop, the camera, and the actual pixels.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`shape`] | Drawable shape types, wire format, and boundary validation |
//! | [`bbox`] | Bounding-box type and per-shape box calculators |
//! | [`extent`] | Selection bounds and the padded world extent |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`overview`] | World/overview mapping and the overview render model |
//! | [`input`] | Pointer gesture state machine for overview navigation |
//! | [`consts`] | Shared numeric constants (padding, fallbacks, heuristics) |

pub mod bbox;
pub mod camera;
pub mod consts;
pub mod extent;
pub mod input;
pub mod overview;
pub mod shape;
