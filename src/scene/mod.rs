//! # Scene Model
//!
//! The in-memory representation of a deck: slides holding ordered,
//! positioned elements. Collection order is z-order; template elements are
//! drawn first and custom (user-authored) elements always on top.
//!
//! ```
//! use slidewright::canvas::Point;
//! use slidewright::scene::*;
//!
//! let mut slide = Slide::new(SlideKind::Content);
//! slide
//!     .push_custom(Element::new(
//!         "note",
//!         Point::new(44.0, 44.0),
//!         ElementKind::Text(TextElement::editor_default()),
//!     ))
//!     .unwrap();
//! assert!(slide.contains_id("note"));
//! ```

pub mod editor;
pub mod types;

pub use editor::{EditorFeatures, IdGenerator, SlideEditor, StyleChange};
pub use types::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::canvas::{CanvasConfig, Rect, Size};
use crate::error::SlideError;
use crate::geometry::{TextMeasurer, text_box_size};

/// Slide role; selects the background and default grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Title,
    Toc,
    #[default]
    Content,
}

/// One slide of the scene model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Slide {
    #[serde(rename = "type")]
    pub kind: SlideKind,
    /// Topic title for content slides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Template-authored elements.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// User-authored elements, always draggable, drawn on top.
    #[serde(default)]
    pub custom_elements: Vec<Element>,
}

impl Slide {
    pub fn new(kind: SlideKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// All elements in z-order: template first, then custom.
    pub fn all_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().chain(self.custom_elements.iter())
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.all_elements().find(|el| el.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .chain(self.custom_elements.iter_mut())
            .find(|el| el.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Append a user-authored element. Fails if the id is already taken.
    pub fn push_custom(&mut self, element: Element) -> Result<(), SlideError> {
        if self.contains_id(&element.id) {
            return Err(SlideError::DuplicateId(element.id));
        }
        self.custom_elements.push(element);
        Ok(())
    }

    /// Remove and return a user-authored element.
    pub fn remove_custom(&mut self, id: &str) -> Result<Element, SlideError> {
        if let Some(idx) = self.custom_elements.iter().position(|el| el.id == id) {
            return Ok(self.custom_elements.remove(idx));
        }
        if self.elements.iter().any(|el| el.id == id) {
            return Err(SlideError::TemplateElement(id.to_string()));
        }
        Err(SlideError::UnknownElement(id.to_string()))
    }

    /// Check that ids are unique across template and custom elements.
    pub fn validate_unique_ids(&self) -> Result<(), SlideError> {
        let mut seen = HashSet::new();
        for el in self.all_elements() {
            if !seen.insert(el.id.as_str()) {
                return Err(SlideError::DuplicateId(el.id.clone()));
            }
        }
        Ok(())
    }

    /// Copy of this slide with every element expressed in canvas pixels.
    pub fn to_pixel_space(&self, config: &CanvasConfig) -> Slide {
        Slide {
            kind: self.kind,
            title: self.title.clone(),
            elements: self.elements.iter().map(|el| el.to_pixel_space(config)).collect(),
            custom_elements: self
                .custom_elements
                .iter()
                .map(|el| el.to_pixel_space(config))
                .collect(),
        }
    }
}

impl Element {
    /// Copy of this element with position and sizes converted to pixels.
    pub fn to_pixel_space(&self, config: &CanvasConfig) -> Element {
        let space = self.space;
        let mut out = self.clone();
        out.space = crate::canvas::PositionSpace::Pixel;
        out.position = config.point_to_px(self.position, space);
        match &mut out.kind {
            ElementKind::Text(text) => {
                text.size = text.size.map(|s| config.size_to_px(s, space));
            }
            ElementKind::Image(image) => {
                image.size = config.size_to_px(image.size, space);
            }
            ElementKind::Section(section) => {
                section.size = config.size_to_px(section.size, space);
            }
        }
        out
    }

    /// Bounding box in canvas pixels.
    ///
    /// Text without an explicit size is auto-sized from its content.
    pub fn frame_px(&self, config: &CanvasConfig, measurer: &dyn TextMeasurer) -> Rect {
        let origin = config.point_to_px(self.position, self.space);
        let size = match &self.kind {
            ElementKind::Text(text) => match text.size {
                Some(size) => config.size_to_px(size, self.space),
                None => text_box_size(config, measurer, text, origin.x),
            },
            ElementKind::Image(image) => config.size_to_px(image.size, self.space),
            ElementKind::Section(section) => config.size_to_px(section.size, self.space),
        };
        Rect::new(origin, size)
    }
}
