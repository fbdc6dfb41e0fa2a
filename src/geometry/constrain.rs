//! Safe-zone clamping.

use super::finite_or;
use crate::canvas::{CanvasConfig, Point};

/// Clamp one axis so `[pos, pos + extent]` stays inside the safe zone.
///
/// An element larger than the usable span is pinned to the leading safe
/// edge and allowed to overflow the trailing one.
fn clamp_axis(pos: f64, extent: f64, total: f64, safe: f64) -> f64 {
    let extent = finite_or(extent, 0.0).max(0.0);
    let max = total - extent - safe;
    if max < safe || pos.is_nan() {
        return safe;
    }
    pos.clamp(safe, max)
}

/// Keep a `width` x `height` box at (`x`, `y`) inside the canvas safe zone.
pub fn constrain_position(config: &CanvasConfig, x: f64, y: f64, width: f64, height: f64) -> Point {
    let safe = config.safe_zone_px();
    Point::new(
        clamp_axis(x, width, config.width_px(), safe),
        clamp_axis(y, height, config.height_px(), safe),
    )
}
