//! # Canvas Module
//!
//! Slide dimensions and the unit conversions between pixels, inches, points
//! and percentage-of-slide.
//!
//! ## Modules
//!
//! - [`config`]: Slide geometry constants and scalar conversions
//! - [`space`]: Coordinate spaces and point/size conversions between them

pub mod config;
pub mod space;

pub use config::{CanvasConfig, percent_to_in, round_half_up, round_to};
pub use space::{Axis, Point, PositionSpace, Rect, Size};
