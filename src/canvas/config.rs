//! # Canvas Configuration
//!
//! Defines the physical slide the editor lays out against.
//!
//! ## Canonical Slide
//!
//! | Property | Value |
//! |----------|-------|
//! | Size | 10in x 5.625in (16:9) |
//! | Resolution | 96 DPI |
//! | Pixels | 960 x 540 |
//! | Safe zone | 0.25in (24px) on every edge |
//!
//! ## Rounding
//!
//! Conversions *into* pixel geometry (`in_to_px`, `percent_to_px`) round
//! half-up to whole pixels. Conversions out of pixels are exact. Font sizes
//! (`pt_to_px`, `px_to_pt`) stay fractional. Repeated round trips therefore
//! settle on the same pixel instead of drifting.
//!
//! ```
//! use slidewright::canvas::CanvasConfig;
//!
//! let config = CanvasConfig::SLIDE_16X9;
//! assert_eq!(config.width_px(), 960.0);
//! assert_eq!(config.height_px(), 540.0);
//! assert_eq!(config.safe_zone_px(), 24.0);
//! ```

use serde::{Deserialize, Serialize};

/// # Canvas Configuration
///
/// Passed explicitly to every geometry and export function so several
/// canvases (or tests) can run with independent settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Slide width in inches
    pub width_in: f64,

    /// Slide height in inches
    pub height_in: f64,

    /// Pixels per inch of the editing canvas
    pub dpi: f64,

    /// Inset kept clear of interactively placed elements, in inches
    pub safe_zone_in: f64,
}

impl CanvasConfig {
    /// 16:9 slide, 10in x 5.625in at 96 DPI with a quarter-inch safe zone.
    pub const SLIDE_16X9: Self = Self {
        width_in: 10.0,
        height_in: 5.625,
        dpi: 96.0,
        safe_zone_in: 0.25,
    };

    /// Canvas width in pixels
    #[inline]
    pub fn width_px(&self) -> f64 {
        self.in_to_px(self.width_in)
    }

    /// Canvas height in pixels
    #[inline]
    pub fn height_px(&self) -> f64 {
        self.in_to_px(self.height_in)
    }

    /// Safe-zone inset in pixels
    #[inline]
    pub fn safe_zone_px(&self) -> f64 {
        self.in_to_px(self.safe_zone_in)
    }

    /// Width left between the two horizontal safe-zone edges
    #[inline]
    pub fn usable_width_px(&self) -> f64 {
        self.width_px() - self.safe_zone_px() * 2.0
    }

    /// Height left between the two vertical safe-zone edges
    #[inline]
    pub fn usable_height_px(&self) -> f64 {
        self.height_px() - self.safe_zone_px() * 2.0
    }

    /// Convert pixels to inches (exact).
    #[inline]
    pub fn px_to_in(&self, px: f64) -> f64 {
        px / self.dpi
    }

    /// Convert inches to whole pixels (round half-up).
    #[inline]
    pub fn in_to_px(&self, inches: f64) -> f64 {
        round_half_up(inches * self.dpi)
    }

    /// Convert points to pixels (fractional).
    #[inline]
    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    /// Convert pixels to points (fractional).
    #[inline]
    pub fn px_to_pt(&self, px: f64) -> f64 {
        px * 72.0 / self.dpi
    }

    /// Resolve a percentage of `total_px` to whole pixels.
    #[inline]
    pub fn percent_to_px(&self, pct: f64, total_px: f64) -> f64 {
        round_half_up(pct / 100.0 * total_px)
    }

    /// Express `px` as a percentage of `total_px`. Zero-sized totals map to 0%.
    #[inline]
    pub fn px_to_percent(&self, px: f64, total_px: f64) -> f64 {
        if total_px == 0.0 {
            0.0
        } else {
            px / total_px * 100.0
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::SLIDE_16X9
    }
}

/// Resolve a percentage of a length given in inches.
#[inline]
pub fn percent_to_in(pct: f64, total_in: f64) -> f64 {
    pct / 100.0 * total_in
}

/// Round half-up (towards positive infinity on ties): `2.5 -> 3`, `-2.5 -> -2`.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to a fixed number of decimals, half-up.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_dimensions() {
        let config = CanvasConfig::SLIDE_16X9;
        assert_eq!(config.width_px(), 960.0);
        assert_eq!(config.height_px(), 540.0);
        assert_eq!(config.safe_zone_px(), 24.0);
        assert_eq!(config.usable_width_px(), 912.0);
        assert_eq!(config.usable_height_px(), 492.0);
    }

    #[test]
    fn test_px_inch_round_trip_within_one_pixel() {
        let config = CanvasConfig::SLIDE_16X9;
        let mut px = -200.0;
        while px <= 2000.0 {
            let back = config.in_to_px(config.px_to_in(px));
            assert!((back - px).abs() <= 1.0, "{} -> {}", px, back);
            px += 0.37;
        }
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let config = CanvasConfig::SLIDE_16X9;
        let once = config.in_to_px(config.px_to_in(123.4));
        let twice = config.in_to_px(config.px_to_in(once));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pt_px_round_trip() {
        let config = CanvasConfig::SLIDE_16X9;
        for pt in [8.0, 11.0, 12.0, 13.0, 25.0, 40.0, 72.0] {
            let back = config.px_to_pt(config.pt_to_px(pt));
            assert!((back - pt).abs() < 1e-9);
        }
        assert_eq!(config.px_to_pt(24.0), 18.0);
        assert_eq!(config.pt_to_px(12.0), 16.0);
    }

    #[test]
    fn test_percent_conversions() {
        let config = CanvasConfig::SLIDE_16X9;
        assert_eq!(percent_to_in(15.0, 10.0), 1.5);
        assert!((percent_to_in(25.0, 5.625) - 1.40625).abs() < 1e-12);
        assert_eq!(config.percent_to_px(50.0, 960.0), 480.0);
        assert_eq!(config.percent_to_px(5.5, 960.0), 53.0);
        assert_eq!(config.px_to_percent(480.0, 960.0), 50.0);
        assert_eq!(config.px_to_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_to(1.23456, 3), 1.235);
    }
}
