//! # Geometry and Constraint Engine
//!
//! Keeps element geometry valid while the user drags, resizes and restyles.
//!
//! Everything here runs inside a live interactive loop, so nothing returns
//! an error: malformed numbers (NaN, infinities) are clamped to the nearest
//! valid value instead of aborting the gesture.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constrain`] | Safe-zone clamping of positions |
//! | [`resize`] | Aspect-preserving image resize and initial image fit |
//! | [`measure`] | Text metrics, word wrap and text-box auto-sizing |
//! | [`gesture`] | Drag/resize state machine and render-scale correction |

pub mod constrain;
pub mod gesture;
pub mod measure;
pub mod resize;

pub use constrain::constrain_position;
pub use gesture::{GeometryIntent, GestureController, GestureState, canvas_delta, render_scale};
pub use measure::{
    ApproxMetrics, GlyphMetrics, TEXT_MIN_HEIGHT, TEXT_MIN_WIDTH, TEXT_PADDING, TextMeasurement,
    TextMeasurer, available_width, measure_text, text_box_size, wrap_lines,
};
pub use resize::{IMAGE_MIN_SIZE, ResizeLimits, fit_new_image, resize_preserving_aspect};

/// `value` if it is a finite number, `fallback` otherwise.
#[inline]
pub(crate) fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
