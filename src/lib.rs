//! # Slidewright - Slide Layout and Deck Export Library
//!
//! Slidewright is the core of a WYSIWYG slide editor. It provides:
//!
//! - **Unit conversion**: pixels, inches, points and percent of the slide
//! - **Scene model**: slides of positioned text, image and section elements
//! - **Geometry**: safe-zone clamping, aspect-preserving resize, text wrap
//! - **Template transform**: business data to a paginated deck
//! - **Export transform**: scene to inch-based slide-file writer records
//!
//! ## Quick Start
//!
//! ```
//! use slidewright::{
//!     canvas::CanvasConfig,
//!     clock::SystemClock,
//!     export::{ExportOptions, to_writer_records},
//!     template::{Presentation, Topic, build_slides},
//! };
//!
//! let presentation = Presentation::new("Q4 Review", "Board update")
//!     .topic(Topic::new("Financial Overview").section("Revenue", "Up 12%"));
//!
//! let slides = build_slides(&presentation, &CanvasConfig::SLIDE_16X9, &SystemClock);
//! let output = to_writer_records(&slides, &ExportOptions::default());
//!
//! assert_eq!(output.slides.len(), 3);
//! assert!(output.warnings.is_empty());
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canvas`] | Slide dimensions and unit conversion |
//! | [`scene`] | Slides, elements and the interactive editor |
//! | [`geometry`] | Constraints, text measurement, gestures |
//! | [`template`] | Presentation to slides |
//! | [`export`] | Slides to writer records |
//! | [`writer`] | Async writer and storage boundary |
//! | [`server`] | HTTP entry point for server-side generation |
//! | [`error`] | Error types |

pub mod canvas;
pub mod clock;
pub mod error;
pub mod export;
pub mod geometry;
pub mod scene;
pub mod server;
pub mod template;
pub mod writer;

// Re-exports for convenience
pub use canvas::CanvasConfig;
pub use error::SlideError;
pub use scene::{Slide, SlideEditor};
