//! Aspect-preserving resize for images.

use super::finite_or;
use crate::canvas::{CanvasConfig, Point, Size, round_half_up};

/// Smallest width or height an image can be resized to.
pub const IMAGE_MIN_SIZE: f64 = 50.0;

/// Bounds for interactive image resizing, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeLimits {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl ResizeLimits {
    /// Minimum 50px, maximum the usable area inside the safe zone.
    pub fn for_canvas(config: &CanvasConfig) -> Self {
        Self {
            min_width: IMAGE_MIN_SIZE,
            min_height: IMAGE_MIN_SIZE,
            max_width: config.usable_width_px(),
            max_height: config.usable_height_px(),
        }
    }

    /// Limits for an image whose top-left corner sits at `origin`.
    ///
    /// Resizing grows toward the bottom-right, so the maximum is the room
    /// left before the trailing safe edges.
    pub fn at_origin(config: &CanvasConfig, origin: Point) -> Self {
        let safe = config.safe_zone_px();
        let room = |total: f64, pos: f64| {
            let pos = finite_or(pos, safe).max(safe);
            (total - safe - pos).min(total - safe * 2.0).max(IMAGE_MIN_SIZE)
        };
        Self {
            max_width: room(config.width_px(), origin.x),
            max_height: room(config.height_px(), origin.y),
            ..Self::for_canvas(config)
        }
    }
}

fn sanitize_aspect(aspect_ratio: f64, fallback: Size) -> f64 {
    if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        return aspect_ratio;
    }
    let derived = fallback.width / fallback.height;
    if derived.is_finite() && derived > 0.0 { derived } else { 1.0 }
}

/// Cap a width/height pair at the height limit, keeping the aspect ratio.
fn cap_height(limits: &ResizeLimits, width: f64, aspect: f64) -> (f64, f64) {
    let height = width / aspect;
    if height > limits.max_height {
        (limits.max_height * aspect, limits.max_height)
    } else if height < limits.min_height {
        ((limits.min_height * aspect).min(limits.max_width), limits.min_height)
    } else {
        (width, height)
    }
}

/// Resize by a horizontal drag delta, keeping `aspect_ratio` (width / height).
///
/// Width is clamped first; when the derived height exceeds the cap, the
/// height becomes the binding constraint and width is recomputed from it.
/// Results are rounded to whole pixels.
pub fn resize_preserving_aspect(
    limits: &ResizeLimits,
    initial: Size,
    delta_x: f64,
    aspect_ratio: f64,
) -> Size {
    let aspect = sanitize_aspect(aspect_ratio, initial);
    let start = finite_or(initial.width, limits.min_width);
    let delta = finite_or(delta_x, 0.0);
    let max_width = limits.max_width.max(limits.min_width);

    let width = (start + delta).clamp(limits.min_width, max_width);
    let (width, height) = cap_height(limits, width, aspect);
    Size::new(round_half_up(width), round_half_up(height))
}

/// Initial size for a newly added image: at most half the usable width,
/// never upscaled past its natural width, height-capped.
pub fn fit_new_image(limits: &ResizeLimits, natural: Size) -> Size {
    let aspect = sanitize_aspect(natural.width / natural.height, natural);
    let natural_width = finite_or(natural.width, limits.min_width).max(limits.min_width);
    let width = (limits.max_width / 2.0).min(natural_width);
    let (width, height) = cap_height(limits, width, aspect);
    Size::new(round_half_up(width), round_half_up(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ResizeLimits {
        ResizeLimits::for_canvas(&CanvasConfig::SLIDE_16X9)
    }

    #[test]
    fn test_limits_for_canvas() {
        let l = limits();
        assert_eq!(l.max_width, 912.0);
        assert_eq!(l.max_height, 492.0);
        assert_eq!(l.min_width, 50.0);
    }

    #[test]
    fn test_limits_at_origin() {
        let config = CanvasConfig::SLIDE_16X9;
        let l = ResizeLimits::at_origin(&config, Point::new(480.0, 44.0));
        assert_eq!((l.max_width, l.max_height), (456.0, 472.0));
        // Corner of the safe zone gets the whole usable area
        assert_eq!(ResizeLimits::at_origin(&config, Point::new(24.0, 24.0)), limits());
        // Past the trailing edge: never below the minimum
        let l = ResizeLimits::at_origin(&config, Point::new(950.0, f64::NAN));
        assert_eq!((l.max_width, l.max_height), (IMAGE_MIN_SIZE, 492.0));
    }

    #[test]
    fn test_grow_stops_at_trailing_safe_edge() {
        let l = ResizeLimits::at_origin(&CanvasConfig::SLIDE_16X9, Point::new(480.0, 44.0));
        let size = resize_preserving_aspect(&l, Size::new(200.0, 100.0), 2000.0, 2.0);
        assert_eq!(size, Size::new(456.0, 228.0));
        assert!(480.0 + size.width <= 936.0);
    }

    #[test]
    fn test_grow_keeps_aspect() {
        let size = resize_preserving_aspect(&limits(), Size::new(300.0, 200.0), 100.0, 1.5);
        assert_eq!(size.width, 400.0);
        assert!((size.height - 400.0 / 1.5).abs() <= 1.0);
        assert_eq!(size.height, 267.0);
    }

    #[test]
    fn test_height_cap_binds() {
        let size = resize_preserving_aspect(&limits(), Size::new(800.0, 533.0), 100.0, 1.5);
        assert_eq!(size.height, 492.0);
        assert_eq!(size.width, 492.0 * 1.5);
    }

    #[test]
    fn test_never_below_minimum() {
        let size = resize_preserving_aspect(&limits(), Size::new(60.0, 40.0), -1000.0, 1.5);
        assert_eq!(size, Size::new(75.0, 50.0));
        assert!(size.width >= IMAGE_MIN_SIZE && size.height >= IMAGE_MIN_SIZE);
    }

    #[test]
    fn test_width_clamped_to_max() {
        // Wide panorama: height never binds
        let size = resize_preserving_aspect(&limits(), Size::new(800.0, 100.0), 500.0, 8.0);
        assert_eq!(size, Size::new(912.0, 114.0));
    }

    #[test]
    fn test_bad_numbers_fail_closed() {
        let size = resize_preserving_aspect(&limits(), Size::new(f64::NAN, 100.0), f64::NAN, f64::NAN);
        assert!(size.width.is_finite() && size.height.is_finite());
        assert!(size.width >= 50.0 && size.height >= 50.0);
    }

    #[test]
    fn test_fit_new_image() {
        assert_eq!(fit_new_image(&limits(), Size::new(1920.0, 1080.0)), Size::new(456.0, 257.0));
        assert_eq!(fit_new_image(&limits(), Size::new(200.0, 100.0)), Size::new(200.0, 100.0));
        // Tall portrait hits the height cap
        assert_eq!(fit_new_image(&limits(), Size::new(400.0, 2000.0)), Size::new(98.0, 492.0));
    }
}
