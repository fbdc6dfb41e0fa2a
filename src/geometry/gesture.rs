//! Drag/resize gesture state machine.
//!
//! The UI layer feeds pointer events in screen pixels; the controller
//! corrects them by the render scale, runs them through the constraint
//! functions and emits [`GeometryIntent`]s for the scene model to apply.
//!
//! ```text
//!            begin_drag                 pointer_up
//!   Idle ───────────────► Dragging ──────────────► Idle
//!     │                                             ▲
//!     │      begin_resize                pointer_up │
//!     └────────────────► Resizing ──────────────────┘
//! ```
//!
//! Only one gesture is active at a time. `pointer_up` always returns the
//! controller to `Idle`, wherever the pointer is released.

use super::constrain::constrain_position;
use super::finite_or;
use super::resize::{ResizeLimits, resize_preserving_aspect};
use crate::canvas::{CanvasConfig, Point, Rect, Size};

/// Canvas-to-screen ratio for a canvas shown in a container of the given width.
///
/// Never upscales. Degenerate widths fall back to 1.
pub fn render_scale(container_width: f64, canvas_width_px: f64) -> f64 {
    let scale = container_width / canvas_width_px;
    if scale.is_finite() && scale > 0.0 {
        scale.min(1.0)
    } else {
        1.0
    }
}

/// Convert a screen-pixel pointer delta into canvas pixels.
pub fn canvas_delta(screen_delta: Point, scale: f64) -> Point {
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    Point::new(
        finite_or(screen_delta.x, 0.0) / scale,
        finite_or(screen_delta.y, 0.0) / scale,
    )
}

/// Current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        start_pointer: Point,
        start_position: Point,
        size: Size,
    },
    Resizing {
        start_pointer: Point,
        start_size: Size,
        aspect_ratio: f64,
        limits: ResizeLimits,
    },
}

/// A geometry update the scene model should apply to the gesture's element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryIntent {
    /// New top-left position in canvas pixels.
    Move(Point),
    /// New size in canvas pixels.
    Resize(Size),
}

/// Drives one gesture at a time.
#[derive(Debug, Clone)]
pub struct GestureController {
    config: CanvasConfig,
    scale: f64,
    state: GestureState,
}

impl GestureController {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            scale: 1.0,
            state: GestureState::Idle,
        }
    }

    /// Update the render scale (e.g. after the container was resized).
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != GestureState::Idle
    }

    /// Start dragging an element occupying `frame`. Ignored while another
    /// gesture is active; returns whether the gesture started.
    pub fn begin_drag(&mut self, pointer: Point, frame: Rect) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = GestureState::Dragging {
            start_pointer: pointer,
            start_position: frame.origin(),
            size: frame.size(),
        };
        true
    }

    /// Start resizing an image occupying `frame` with a fixed `aspect_ratio`.
    /// The image can grow only as far as the safe zone allows from its
    /// current top-left corner.
    pub fn begin_resize(&mut self, pointer: Point, frame: Rect, aspect_ratio: f64) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = GestureState::Resizing {
            start_pointer: pointer,
            start_size: frame.size(),
            aspect_ratio,
            limits: ResizeLimits::at_origin(&self.config, frame.origin()),
        };
        true
    }

    /// Translate a pointer move into a geometry update. `None` when idle.
    pub fn pointer_move(&self, pointer: Point) -> Option<GeometryIntent> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging {
                start_pointer,
                start_position,
                size,
            } => {
                let delta = self.delta(start_pointer, pointer);
                Some(GeometryIntent::Move(constrain_position(
                    &self.config,
                    start_position.x + delta.x,
                    start_position.y + delta.y,
                    size.width,
                    size.height,
                )))
            }
            GestureState::Resizing {
                start_pointer,
                start_size,
                aspect_ratio,
                limits,
            } => {
                let delta = self.delta(start_pointer, pointer);
                Some(GeometryIntent::Resize(resize_preserving_aspect(
                    &limits,
                    start_size,
                    delta.x,
                    aspect_ratio,
                )))
            }
        }
    }

    /// Release the gesture unconditionally. Returns whether one was active.
    pub fn pointer_up(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = GestureState::Idle;
        was_active
    }

    fn delta(&self, start: Point, pointer: Point) -> Point {
        canvas_delta(Point::new(pointer.x - start.x, pointer.y - start.y), self.scale)
    }
}
