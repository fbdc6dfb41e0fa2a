//! # Error Types
//!
//! This module defines error types used throughout the slidewright library.
//!
//! Geometry code never returns these: it clamps instead. The export
//! transform turns per-element problems into warnings, so only the writer
//! and storage boundaries surface a fatal error to the caller.

use thiserror::Error;

/// Main error type for slidewright operations
#[derive(Debug, Error)]
pub enum SlideError {
    /// An element id appears twice within one slide
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    /// No element with this id on the active slide
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// Template-laid-out elements are not editable
    #[error("Element {0} is part of the template and cannot be modified")]
    TemplateElement(String),

    /// The editor was configured without this capability
    #[error("Feature disabled: {0}")]
    FeatureDisabled(&'static str),

    /// Non-finite position or size reached the export boundary
    #[error("Invalid geometry: {0}")]
    Geometry(String),

    /// A color that is not `#RRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Missing or undecodable image data
    #[error("Image error: {0}")]
    Image(String),

    /// Font data that could not be parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Slide-file writer failure
    #[error("Writer error: {0}")]
    Writer(String),

    /// Artifact storage rejected the file
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
