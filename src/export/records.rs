//! Records handed to the slide-file writer.
//!
//! Geometry is in inches, font sizes in points, colors are six uppercase
//! hex digits without `#`. Field names follow the writer's option names.

use serde::{Deserialize, Serialize};

use crate::scene::{Align, BulletKind, SlideKind, VAlign};

/// A width or height: inches, or `"auto"` to let the writer fit the text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "ExtentRepr", try_from = "ExtentRepr")]
pub enum Extent {
    Inches(f64),
    Auto,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ExtentRepr {
    Inches(f64),
    Keyword(String),
}

impl From<Extent> for ExtentRepr {
    fn from(extent: Extent) -> Self {
        match extent {
            Extent::Inches(v) => ExtentRepr::Inches(v),
            Extent::Auto => ExtentRepr::Keyword("auto".into()),
        }
    }
}

impl TryFrom<ExtentRepr> for Extent {
    type Error = String;

    fn try_from(repr: ExtentRepr) -> Result<Self, Self::Error> {
        match repr {
            ExtentRepr::Inches(v) => Ok(Extent::Inches(v)),
            ExtentRepr::Keyword(k) if k == "auto" => Ok(Extent::Auto),
            ExtentRepr::Keyword(k) => Err(format!("unknown extent keyword: {}", k)),
        }
    }
}

/// Where the writer reads image bytes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Inline `data:` URI.
    Data(String),
    /// Path or URL.
    Path(String),
}

impl ImageSource {
    /// Classify a reference string. `None` for an empty reference.
    pub fn from_reference(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            None
        } else if reference.starts_with("data:") {
            Some(ImageSource::Data(reference.to_string()))
        } else {
            Some(ImageSource::Path(reference.to_string()))
        }
    }
}

/// Per-run paragraph options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<BulletKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_level: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub break_line: bool,
}

/// One paragraph of a text record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub options: RunOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRecord {
    pub runs: Vec<TextRun>,
    pub x: f64,
    pub y: f64,
    pub w: Extent,
    pub h: Extent,
    pub font_size: f64,
    pub font_face: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub color: String,
    pub align: Align,
    pub valign: VAlign,
    /// Hundredths of a point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_spacing: Option<f64>,
    /// Percent of a line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub para_space_after: Option<f64>,
    /// 0 = opaque, 1 = invisible.
    pub transparency: f64,
}

impl TextRecord {
    /// All runs joined with newlines.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(flatten)]
    pub source: ImageSource,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rect,
    RoundRect,
    Ellipse,
    Line,
}

/// Vector decoration drawn when no artwork is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    pub shape: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

/// One drawable, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WriterObject {
    Text(TextRecord),
    Image(ImageRecord),
    Shape(ShapeRecord),
}

impl WriterObject {
    pub fn as_text(&self) -> Option<&TextRecord> {
        match self {
            WriterObject::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageRecord> {
        match self {
            WriterObject::Image(i) => Some(i),
            _ => None,
        }
    }
}

/// Everything the writer needs for one slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriterSlideRecord {
    /// Index of the source slide in the scene.
    pub index: usize,
    pub kind: SlideKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ImageSource>,
    pub objects: Vec<WriterObject>,
}

impl WriterSlideRecord {
    pub fn texts(&self) -> impl Iterator<Item = &TextRecord> {
        self.objects.iter().filter_map(WriterObject::as_text)
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageRecord> {
        self.objects.iter().filter_map(WriterObject::as_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_json() {
        assert_eq!(serde_json::to_value(Extent::Auto).unwrap(), "auto");
        assert_eq!(serde_json::to_value(Extent::Inches(1.5)).unwrap(), 1.5);
        let back: Extent = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(back, Extent::Auto);
        assert!(serde_json::from_str::<Extent>("\"tall\"").is_err());
    }

    #[test]
    fn test_image_source_classification() {
        assert_eq!(ImageSource::from_reference("  "), None);
        assert_eq!(
            ImageSource::from_reference("data:image/png;base64,AAAA"),
            Some(ImageSource::Data("data:image/png;base64,AAAA".into()))
        );
        assert_eq!(
            ImageSource::from_reference("assets/a.png"),
            Some(ImageSource::Path("assets/a.png".into()))
        );
    }

    #[test]
    fn test_image_record_flattens_source() {
        let record = ImageRecord {
            source: ImageSource::Path("a.png".into()),
            x: 1.0,
            y: 2.0,
            w: 3.0,
            h: 4.0,
        };
        let value = serde_json::to_value(WriterObject::Image(record)).unwrap();
        assert_eq!(value["kind"], "image");
        assert_eq!(value["path"], "a.png");
        assert_eq!(value["w"], 3.0);
    }

    #[test]
    fn test_run_options_skip_defaults() {
        let run = TextRun {
            text: "a".into(),
            options: RunOptions::default(),
        };
        assert_eq!(serde_json::to_string(&run).unwrap(), r#"{"text":"a","options":{}}"#);
    }
}
