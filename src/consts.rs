//! Shared numeric constants for the geometry engine.

// ── Overview surface ────────────────────────────────────────────

/// Default overview (mini-map) surface width in pixels.
pub const OVERVIEW_WIDTH_PX: f64 = 200.0;

/// Default overview (mini-map) surface height in pixels.
pub const OVERVIEW_HEIGHT_PX: f64 = 140.0;

// ── World extent ────────────────────────────────────────────────

/// World-space padding added to every side of the world extent so content
/// never touches the overview's edge.
pub const WORLD_PADDING: f64 = 40.0;

/// Width of the fallback extent region used when the board has no content.
pub const FALLBACK_EXTENT_WIDTH: f64 = 1000.0;

/// Height of the fallback extent region used when the board has no content.
pub const FALLBACK_EXTENT_HEIGHT: f64 = 700.0;

/// Minimum extent dimension used when deriving the overview scale; guards
/// against dividing by a degenerate (zero-size) extent axis.
pub const MIN_EXTENT_SIZE: f64 = 1.0;

// ── Shape defaults ──────────────────────────────────────────────

/// Default arrowhead size in world units.
pub const ARROW_HEAD_SIZE: f64 = 10.0;

/// Width of the fallback box for unrecognized shape kinds.
pub const DEFAULT_SHAPE_WIDTH: f64 = 100.0;

/// Height of the fallback box for unrecognized shape kinds.
pub const DEFAULT_SHAPE_HEIGHT: f64 = 100.0;

// ── Text estimation ─────────────────────────────────────────────

/// Estimated glyph advance as a fraction of font size. Text boxes are
/// estimated from character count, not measured glyph metrics.
pub const TEXT_CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Estimated line height as a fraction of font size.
pub const TEXT_LINE_HEIGHT_FACTOR: f64 = 1.2;
