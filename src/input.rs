//! Pointer gesture state machine for overview navigation.
//!
//! The host forwards raw pointer events in overview-surface pixels together
//! with the current frame's [`OverviewModel`]; navigation intents come back
//! in world coordinates for the camera controller to consume. The machine
//! has three states: idle, a pressed click candidate, and an active
//! viewport drag. Dragging wins over clicking — any movement between
//! pointer-down and pointer-up suppresses click-to-navigate.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use tracing::trace;

use crate::camera::Point;
use crate::overview::OverviewModel;

/// Navigation intent emitted for the host camera controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavIntent {
    /// Nothing to do.
    None,
    /// Center the camera on this world point (click-to-navigate).
    JumpTo(Point),
    /// Center the camera on this world point (viewport drag in progress).
    Recenter(Point),
}

/// Active pointer gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Gesture {
    /// No gesture; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer went down outside the viewport indicator; a candidate click
    /// until the pointer moves.
    Pressed {
        /// Set on any movement; suppresses the click on release.
        moved: bool,
    },
    /// Pointer went down inside the viewport indicator and is dragging it.
    DraggingIndicator {
        /// Surface-pixel offset from the pointer to the indicator's
        /// top-left corner, captured at pointer-down so the indicator does
        /// not jump to center under the cursor.
        grab_offset: Point,
    },
}

/// Pointer state machine for the overview surface.
#[derive(Debug, Default)]
pub struct OverviewInput {
    gesture: Gesture,
}

impl OverviewInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a viewport drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::DraggingIndicator { .. })
    }

    /// Pointer pressed at `pt` (overview-surface pixels).
    pub fn on_pointer_down(&mut self, pt: Point, model: &OverviewModel) -> NavIntent {
        self.gesture = if model.indicator.contains(pt) {
            let grab_offset =
                Point::new(pt.x - model.indicator.min_x, pt.y - model.indicator.min_y);
            trace!(dx = grab_offset.x, dy = grab_offset.y, "viewport drag started");
            Gesture::DraggingIndicator { grab_offset }
        } else {
            Gesture::Pressed { moved: false }
        };
        NavIntent::None
    }

    /// Pointer moved to `pt` while over the overview surface.
    pub fn on_pointer_move(&mut self, pt: Point, model: &OverviewModel) -> NavIntent {
        match &mut self.gesture {
            Gesture::Idle => NavIntent::None,
            Gesture::Pressed { moved } => {
                *moved = true;
                NavIntent::None
            }
            Gesture::DraggingIndicator { grab_offset } => {
                let top_left = model
                    .mapping
                    .surface_to_world(Point::new(pt.x - grab_offset.x, pt.y - grab_offset.y));
                NavIntent::Recenter(Point::new(
                    top_left.x + model.viewport_world.width() / 2.0,
                    top_left.y + model.viewport_world.height() / 2.0,
                ))
            }
        }
    }

    /// Pointer released at `pt`. A clean click — down outside the
    /// indicator, no intervening move — navigates to the released point.
    pub fn on_pointer_up(&mut self, pt: Point, model: &OverviewModel) -> NavIntent {
        match std::mem::take(&mut self.gesture) {
            Gesture::Pressed { moved: false } => {
                let target = model.mapping.surface_to_world(pt);
                trace!(x = target.x, y = target.y, "jump to point");
                NavIntent::JumpTo(target)
            }
            Gesture::Idle | Gesture::Pressed { .. } | Gesture::DraggingIndicator { .. } => {
                NavIntent::None
            }
        }
    }

    /// Pointer left the overview surface; any gesture in progress is
    /// abandoned.
    pub fn on_pointer_leave(&mut self) -> NavIntent {
        self.gesture = Gesture::Idle;
        NavIntent::None
    }
}
