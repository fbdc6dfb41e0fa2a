//! The consolidated slide editor.
//!
//! One editor parameterized by [`EditorFeatures`] covers every variant of
//! the interactive editor: with or without letter spacing, text transforms
//! and multiple slides. It owns the scene, hands out timestamp-based ids
//! and bridges pointer gestures to the geometry engine.

use base64::Engine;
use image::ImageReader;
use std::io::Cursor;
use std::sync::Arc;

use super::types::{
    Align, Element, ElementKind, ElementMeta, ImageElement, TextElement, TextTransform, VAlign,
};
use super::{Slide, SlideKind};
use crate::canvas::{CanvasConfig, Point, Size};
use crate::clock::{Clock, SystemClock};
use crate::error::SlideError;
use crate::export::normalize_color;
use crate::geometry::{
    ApproxMetrics, GeometryIntent, GestureController, ResizeLimits, TextMeasurer,
    constrain_position, fit_new_image,
};

/// Offset from the safe-zone corner where new elements appear.
const NEW_ELEMENT_OFFSET: f64 = 20.0;

/// Optional editor capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorFeatures {
    pub letter_spacing: bool,
    pub text_transform: bool,
    pub multi_slide: bool,
}

impl Default for EditorFeatures {
    fn default() -> Self {
        Self {
            letter_spacing: true,
            text_transform: true,
            multi_slide: true,
        }
    }
}

/// Monotonically increasing, timestamp-based element ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Millisecond timestamp, bumped past the previous id when the clock
    /// has not advanced (or went backwards).
    pub fn next(&mut self, clock: &dyn Clock) -> String {
        let stamp = clock.now().timestamp_millis().max(self.last + 1);
        self.last = stamp;
        stamp.to_string()
    }
}

/// A single style property change.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleChange {
    FontFace(String),
    FontSizePx(f64),
    Bold(bool),
    Italic(bool),
    Underline(bool),
    Strikethrough(bool),
    Align(Align),
    VAlign(VAlign),
    Color(String),
    Transparency(f64),
    LetterSpacing(f64),
    LineHeight(f64),
    TextTransform(TextTransform),
}

/// Interactive editor over a deck of slides.
pub struct SlideEditor {
    config: CanvasConfig,
    features: EditorFeatures,
    slides: Vec<Slide>,
    active: usize,
    ids: IdGenerator,
    clock: Arc<dyn Clock>,
    measurer: Box<dyn TextMeasurer>,
    gesture: GestureController,
    /// Element targeted by the current gesture.
    gesture_target: Option<String>,
}

impl SlideEditor {
    /// Empty single-slide editor with approximate text metrics.
    pub fn new(config: CanvasConfig, features: EditorFeatures) -> Self {
        Self::with_slides(config, features, vec![Slide::new(SlideKind::Content)])
    }

    /// Edit an existing deck (e.g. the output of the template transform).
    pub fn with_slides(config: CanvasConfig, features: EditorFeatures, slides: Vec<Slide>) -> Self {
        let slides = if slides.is_empty() {
            vec![Slide::new(SlideKind::Content)]
        } else {
            slides
        };
        Self {
            config,
            features,
            slides,
            active: 0,
            ids: IdGenerator::default(),
            clock: Arc::new(SystemClock),
            measurer: Box::new(ApproxMetrics),
            gesture: GestureController::new(config),
            gesture_target: None,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn into_slides(self) -> Vec<Slide> {
        self.slides
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.active]
    }

    fn active_slide_mut(&mut self) -> &mut Slide {
        &mut self.slides[self.active]
    }

    // ------------------------------------------------------------------------
    // Slides
    // ------------------------------------------------------------------------

    /// Append an empty content slide and make it active.
    pub fn add_slide(&mut self) -> Result<usize, SlideError> {
        if !self.features.multi_slide {
            return Err(SlideError::FeatureDisabled("multi_slide"));
        }
        self.slides.push(Slide::new(SlideKind::Content));
        self.active = self.slides.len() - 1;
        self.cancel_gesture();
        Ok(self.active)
    }

    pub fn select_slide(&mut self, index: usize) -> Result<(), SlideError> {
        if index >= self.slides.len() {
            return Err(SlideError::UnknownElement(format!("slide {}", index)));
        }
        self.active = index;
        self.cancel_gesture();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Elements
    // ------------------------------------------------------------------------

    fn new_element_position(&self) -> Point {
        let offset = self.config.safe_zone_px() + NEW_ELEMENT_OFFSET;
        Point::new(offset, offset)
    }

    /// Add a default text box to the active slide. Returns its id.
    pub fn add_text(&mut self) -> Result<String, SlideError> {
        let id = self.ids.next(self.clock.as_ref());
        let element = Element::new(
            id.clone(),
            self.new_element_position(),
            ElementKind::Text(TextElement::editor_default()),
        );
        self.active_slide_mut().push_custom(element)?;
        tracing::debug!(element = %id, "added text element");
        Ok(id)
    }

    /// Add an image with known natural dimensions. Returns its id.
    pub fn add_image(
        &mut self,
        source: impl Into<String>,
        natural_width: f64,
        natural_height: f64,
    ) -> Result<String, SlideError> {
        let source = source.into();
        if source.is_empty() {
            return Err(SlideError::Image("empty image source".into()));
        }
        let natural = Size::new(natural_width, natural_height);
        let size = fit_new_image(&ResizeLimits::for_canvas(&self.config), natural);
        let id = self.ids.next(self.clock.as_ref());
        let element = Element::new(
            id.clone(),
            self.new_element_position(),
            ElementKind::Image(ImageElement::new(source, size, natural)),
        );
        self.active_slide_mut().push_custom(element)?;
        tracing::debug!(element = %id, width = size.width, height = size.height, "added image element");
        Ok(id)
    }

    /// Add an image from a `data:image/...;base64,` URI, reading its natural size.
    pub fn add_image_data_uri(&mut self, uri: &str) -> Result<String, SlideError> {
        let natural = data_uri_dimensions(uri)?;
        self.add_image(uri, natural.width, natural.height)
    }

    /// Delete a user-authored element from the active slide.
    pub fn delete(&mut self, id: &str) -> Result<Element, SlideError> {
        if self.gesture_target.as_deref() == Some(id) {
            self.cancel_gesture();
        }
        self.active_slide_mut().remove_custom(id)
    }

    fn editable_mut(&mut self, id: &str) -> Result<&mut Element, SlideError> {
        let element = self
            .active_slide_mut()
            .find_mut(id)
            .ok_or_else(|| SlideError::UnknownElement(id.to_string()))?;
        if element.is_template {
            return Err(SlideError::TemplateElement(id.to_string()));
        }
        Ok(element)
    }

    /// Replace the text of a text element.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), SlideError> {
        match &mut self.editable_mut(id)?.kind {
            ElementKind::Text(t) => {
                t.text = text.into();
                Ok(())
            }
            _ => Err(SlideError::UnknownElement(format!("{} is not a text element", id))),
        }
    }

    /// Apply a style change to a text element.
    pub fn apply_style(&mut self, id: &str, change: StyleChange) -> Result<(), SlideError> {
        match &change {
            StyleChange::LetterSpacing(_) if !self.features.letter_spacing => {
                return Err(SlideError::FeatureDisabled("letter_spacing"));
            }
            StyleChange::TextTransform(_) if !self.features.text_transform => {
                return Err(SlideError::FeatureDisabled("text_transform"));
            }
            _ => {}
        }

        let style = match &mut self.editable_mut(id)?.kind {
            ElementKind::Text(t) => &mut t.style,
            _ => return Err(SlideError::UnknownElement(format!("{} is not a text element", id))),
        };

        match change {
            StyleChange::FontFace(face) => style.font_face = face,
            StyleChange::FontSizePx(px) => {
                if px.is_finite() {
                    style.font_size_px = px.max(1.0);
                }
            }
            StyleChange::Bold(v) => style.bold = v,
            StyleChange::Italic(v) => style.italic = v,
            StyleChange::Underline(v) => style.underline = v,
            StyleChange::Strikethrough(v) => style.strikethrough = v,
            StyleChange::Align(a) => style.align = a,
            StyleChange::VAlign(v) => style.valign = v,
            StyleChange::Color(hex) => {
                normalize_color(&hex)?;
                style.color_hex = hex;
            }
            StyleChange::Transparency(pct) => {
                if pct.is_finite() {
                    style.transparency_percent = pct.clamp(0.0, 100.0);
                }
            }
            StyleChange::LetterSpacing(px) => {
                if px.is_finite() {
                    style.letter_spacing_px = px;
                }
            }
            StyleChange::LineHeight(m) => {
                if m.is_finite() && m > 0.0 {
                    style.line_height_multiplier = m;
                }
            }
            StyleChange::TextTransform(t) => style.text_transform = t,
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------------

    /// Set the render scale from the on-screen container width.
    pub fn set_container_width(&mut self, container_width: f64) {
        let scale = crate::geometry::render_scale(container_width, self.config.width_px());
        self.gesture.set_scale(scale);
    }

    /// Pointer-down on an element body. Template elements are not draggable.
    pub fn begin_drag(&mut self, id: &str, pointer: Point) -> Result<bool, SlideError> {
        let frame = {
            let element = self
                .active_slide()
                .find(id)
                .ok_or_else(|| SlideError::UnknownElement(id.to_string()))?;
            if element.is_template {
                return Err(SlideError::TemplateElement(id.to_string()));
            }
            element.frame_px(&self.config, self.measurer.as_ref())
        };
        let started = self.gesture.begin_drag(pointer, frame);
        if started {
            self.gesture_target = Some(id.to_string());
        }
        Ok(started)
    }

    /// Pointer-down on an image's resize handle. Only images are resizable.
    pub fn begin_resize(&mut self, id: &str, pointer: Point) -> Result<bool, SlideError> {
        let (frame, aspect) = {
            let element = self
                .active_slide()
                .find(id)
                .ok_or_else(|| SlideError::UnknownElement(id.to_string()))?;
            if element.is_template {
                return Err(SlideError::TemplateElement(id.to_string()));
            }
            let image = element
                .as_image()
                .ok_or_else(|| SlideError::UnknownElement(format!("{} is not resizable", id)))?;
            (
                element.frame_px(&self.config, self.measurer.as_ref()),
                image.aspect_ratio,
            )
        };
        let started = self.gesture.begin_resize(pointer, frame, aspect);
        if started {
            self.gesture_target = Some(id.to_string());
        }
        Ok(started)
    }

    /// Pointer-move: apply the constrained geometry to the target element.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<GeometryIntent> {
        let intent = self.gesture.pointer_move(pointer)?;
        let id = self.gesture_target.clone()?;
        let config = self.config;
        let element = self.active_slide_mut().find_mut(&id)?;
        apply_intent(&config, element, intent);
        Some(intent)
    }

    /// Pointer-up: release the gesture unconditionally.
    pub fn pointer_up(&mut self) -> bool {
        self.gesture_target = None;
        self.gesture.pointer_up()
    }

    fn cancel_gesture(&mut self) {
        self.pointer_up();
    }
}

/// Write a pixel-space intent back in the element's declared space.
fn apply_intent(config: &CanvasConfig, element: &mut Element, intent: GeometryIntent) {
    let space = element.space;
    match intent {
        GeometryIntent::Move(position) => {
            element.position = config.point_from_px(position, space);
        }
        GeometryIntent::Resize(size) => {
            if let ElementKind::Image(image) = &mut element.kind {
                image.size = config.size_from_px(size, space);
                // minimum size can still overflow near the trailing edge
                let origin = config.point_to_px(element.position, space);
                let origin = constrain_position(config, origin.x, origin.y, size.width, size.height);
                element.position = config.point_from_px(origin, space);
            }
        }
    }
}

/// Natural pixel dimensions of a base64 image data URI.
pub fn data_uri_dimensions(uri: &str) -> Result<Size, SlideError> {
    let payload = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, data)| data)
        .ok_or_else(|| SlideError::Image("not a base64 data URI".into()))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| SlideError::Image(format!("invalid base64: {}", e)))?;
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| SlideError::Image(e.to_string()))?
        .into_dimensions()
        .map_err(|e| SlideError::Image(e.to_string()))?;
    Ok(Size::new(width as f64, height as f64))
}
