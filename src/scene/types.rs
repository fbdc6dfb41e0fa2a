//! Element and style types for the slide scene model.
//!
//! All types derive `Serialize + Deserialize` so the same values flow from
//! the editor into the export transform and across the HTTP API.
//!
//! Each element payload implements [`ElementMeta`] to declare its display
//! label and editor default.

use serde::{Deserialize, Serialize};

use crate::canvas::{Point, PositionSpace, Size};

/// Metadata that every element payload must provide.
pub trait ElementMeta: Sized {
    /// Human-readable display label (e.g. "Text", "Section").
    fn label() -> &'static str;

    /// Starter value used when the user adds a new element.
    fn editor_default() -> Self;
}

// ============================================================================
// STYLE
// ============================================================================

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical text alignment inside the text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Case transform applied to the literal text before export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Typography and color of a run of text.
///
/// Sizes are canvas pixels; the export transform converts to points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_face: String,
    pub font_size_px: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub align: Align,
    pub valign: VAlign,
    /// `#RRGGBB`
    pub color_hex: String,
    /// 0 = opaque, 100 = invisible.
    pub transparency_percent: f64,
    pub letter_spacing_px: f64,
    pub line_height_multiplier: f64,
    pub text_transform: TextTransform,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_face: "Arial".into(),
            font_size_px: 24.0,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            align: Align::Left,
            valign: VAlign::Top,
            color_hex: "#000000".into(),
            transparency_percent: 0.0,
            letter_spacing_px: 0.0,
            line_height_multiplier: 1.2,
            text_transform: TextTransform::None,
        }
    }
}

impl TextStyle {
    /// A style with the given face and pixel size, everything else default.
    pub fn new(font_face: impl Into<String>, font_size_px: f64) -> Self {
        Self {
            font_face: font_face.into(),
            font_size_px,
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.color_hex = hex.into();
        self
    }

    pub fn aligned(mut self, align: Align, valign: VAlign) -> Self {
        self.align = align;
        self.valign = valign;
        self
    }
}

// ============================================================================
// TEXT
// ============================================================================

/// Bullet marker for multi-paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletKind {
    #[default]
    Disc,
    Numbered,
}

/// Marks a text element as a list: every line becomes its own bulleted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListStyle {
    #[serde(default)]
    pub bullet: BulletKind,
}

/// Table-of-contents decoration carried by toc item text elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// 1-based, running across all toc pages.
    pub number: u32,
    /// Alternate box artwork (middle grid column).
    #[serde(default)]
    pub alternate: bool,
}

/// Text box content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    /// Plain text, may contain literal newlines.
    pub text: String,
    #[serde(default)]
    pub style: TextStyle,
    /// Explicit box size. `None` = auto-sized from the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc: Option<TocEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListStyle>,
}

impl TextElement {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            size: None,
            toc: None,
            list: None,
        }
    }

    pub fn sized(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

impl ElementMeta for TextElement {
    fn label() -> &'static str {
        "Text"
    }

    fn editor_default() -> Self {
        Self::new("Click to edit", TextStyle::default())
    }
}

// ============================================================================
// IMAGE
// ============================================================================

/// Positioned picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Data URI or URL.
    pub source: String,
    pub size: Size,
    /// Natural width / natural height, fixed when the image is loaded.
    pub aspect_ratio: f64,
}

impl ImageElement {
    /// Create an image, deriving the aspect ratio from its natural size.
    pub fn new(source: impl Into<String>, size: Size, natural: Size) -> Self {
        let aspect_ratio = if natural.width > 0.0 && natural.height > 0.0 {
            natural.width / natural.height
        } else {
            1.0
        };
        Self {
            source: source.into(),
            size,
            aspect_ratio,
        }
    }
}

impl ElementMeta for ImageElement {
    fn label() -> &'static str {
        "Image"
    }

    fn editor_default() -> Self {
        Self {
            source: String::new(),
            size: Size::new(100.0, 100.0),
            aspect_ratio: 1.0,
        }
    }
}

// ============================================================================
// SECTION
// ============================================================================

/// Title and description styles of a section block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionStyle {
    #[serde(default)]
    pub title: TextStyle,
    #[serde(default)]
    pub description: TextStyle,
}

/// Fixed-size titled block laid out by the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionElement {
    pub title: String,
    pub description: String,
    /// Box size, in the owning element's space. Not user-resizable.
    pub size: Size,
    #[serde(default)]
    pub style: SectionStyle,
}

impl ElementMeta for SectionElement {
    fn label() -> &'static str {
        "Section"
    }

    fn editor_default() -> Self {
        Self {
            title: "Section title".into(),
            description: "Describe this section".into(),
            size: Size::new(40.0, 22.0),
            style: SectionStyle::default(),
        }
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// The closed set of element payloads.
///
/// The `#[serde(tag = "type")]` attribute enables JSON like
/// `{"type": "text", "text": "Hello", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Text(TextElement),
    Image(ImageElement),
    Section(SectionElement),
}

impl ElementKind {
    /// Human-readable display label (from [`ElementMeta::label`]).
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Text(_) => TextElement::label(),
            ElementKind::Image(_) => ImageElement::label(),
            ElementKind::Section(_) => SectionElement::label(),
        }
    }
}

/// A positioned element on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique within the slide (template and custom elements together).
    pub id: String,
    #[serde(default)]
    pub space: PositionSpace,
    #[serde(default)]
    pub position: Point,
    /// Laid out by the template transform; not draggable or resizable.
    #[serde(default)]
    pub is_template: bool,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// A user-authored element in pixel space.
    pub fn new(id: impl Into<String>, position: Point, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            space: PositionSpace::Pixel,
            position,
            is_template: false,
            kind,
        }
    }

    /// A template element positioned in percent of the slide.
    pub fn template(id: impl Into<String>, position: Point, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            space: PositionSpace::Percent,
            position,
            is_template: true,
            kind,
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.kind {
            ElementKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match &self.kind {
            ElementKind::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&SectionElement> {
        match &self.kind {
            ElementKind::Section(s) => Some(s),
            _ => None,
        }
    }
}
