//! Coordinate spaces and conversions between them.
//!
//! Elements declare the space their geometry is expressed in. Template
//! layouts use percentages of the slide, the interactive editor works in
//! canvas pixels, and the writer wants inches.

use serde::{Deserialize, Serialize};

use super::config::{CanvasConfig, percent_to_in};

/// The coordinate space an element's position and size are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSpace {
    /// Canvas pixels at the configured DPI.
    #[default]
    Pixel,
    /// Inches from the slide's top-left corner.
    Inch,
    /// Percentage of the slide's width (x, width) or height (y, height).
    Percent,
}

/// Which slide dimension a scalar is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A position in some [`PositionSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in some [`PositionSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned box in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl CanvasConfig {
    /// Length of the given axis in pixels.
    pub fn axis_px(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width_px(),
            Axis::Vertical => self.height_px(),
        }
    }

    /// Length of the given axis in inches.
    pub fn axis_in(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width_in,
            Axis::Vertical => self.height_in,
        }
    }

    /// Convert a scalar from `space` into canvas pixels.
    pub fn to_px(&self, value: f64, space: PositionSpace, axis: Axis) -> f64 {
        match space {
            PositionSpace::Pixel => value,
            PositionSpace::Inch => self.in_to_px(value),
            PositionSpace::Percent => self.percent_to_px(value, self.axis_px(axis)),
        }
    }

    /// Convert a pixel scalar back into `space`.
    pub fn from_px(&self, px: f64, space: PositionSpace, axis: Axis) -> f64 {
        match space {
            PositionSpace::Pixel => px,
            PositionSpace::Inch => self.px_to_in(px),
            PositionSpace::Percent => self.px_to_percent(px, self.axis_px(axis)),
        }
    }

    /// Convert a scalar from `space` into inches without a pixel detour.
    pub fn to_in(&self, value: f64, space: PositionSpace, axis: Axis) -> f64 {
        match space {
            PositionSpace::Pixel => self.px_to_in(value),
            PositionSpace::Inch => value,
            PositionSpace::Percent => percent_to_in(value, self.axis_in(axis)),
        }
    }

    pub fn point_to_px(&self, point: Point, space: PositionSpace) -> Point {
        Point::new(
            self.to_px(point.x, space, Axis::Horizontal),
            self.to_px(point.y, space, Axis::Vertical),
        )
    }

    pub fn point_from_px(&self, point: Point, space: PositionSpace) -> Point {
        Point::new(
            self.from_px(point.x, space, Axis::Horizontal),
            self.from_px(point.y, space, Axis::Vertical),
        )
    }

    pub fn size_to_px(&self, size: Size, space: PositionSpace) -> Size {
        Size::new(
            self.to_px(size.width, space, Axis::Horizontal),
            self.to_px(size.height, space, Axis::Vertical),
        )
    }

    pub fn size_from_px(&self, size: Size, space: PositionSpace) -> Size {
        Size::new(
            self.from_px(size.width, space, Axis::Horizontal),
            self.from_px(size.height, space, Axis::Vertical),
        )
    }

    pub fn point_to_in(&self, point: Point, space: PositionSpace) -> Point {
        Point::new(
            self.to_in(point.x, space, Axis::Horizontal),
            self.to_in(point.y, space, Axis::Vertical),
        )
    }

    pub fn size_to_in(&self, size: Size, space: PositionSpace) -> Size {
        Size::new(
            self.to_in(size.width, space, Axis::Horizontal),
            self.to_in(size.height, space, Axis::Vertical),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_point_to_px() {
        let config = CanvasConfig::SLIDE_16X9;
        let p = config.point_to_px(Point::new(50.0, 50.0), PositionSpace::Percent);
        assert_eq!(p, Point::new(480.0, 270.0));
    }

    #[test]
    fn test_inch_point_to_px() {
        let config = CanvasConfig::SLIDE_16X9;
        let p = config.point_to_px(Point::new(1.0, 0.25), PositionSpace::Inch);
        assert_eq!(p, Point::new(96.0, 24.0));
    }

    #[test]
    fn test_percent_to_in_uses_axis() {
        let config = CanvasConfig::SLIDE_16X9;
        let s = config.size_to_in(Size::new(40.0, 22.0), PositionSpace::Percent);
        assert!((s.width - 4.0).abs() < 1e-12);
        assert!((s.height - 1.2375).abs() < 1e-12);
    }

    #[test]
    fn test_from_px_inverts_to_px() {
        let config = CanvasConfig::SLIDE_16X9;
        let px = Point::new(240.0, 135.0);
        let pct = config.point_from_px(px, PositionSpace::Percent);
        assert_eq!(pct, Point::new(25.0, 25.0));
        assert_eq!(config.point_to_px(pct, PositionSpace::Percent), px);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }
}
