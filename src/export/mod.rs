//! # Export Transform
//!
//! Turns scene slides into writer records: absolute inches, point font
//! sizes, bare hex colors and the writer's spacing and transparency
//! encodings.
//!
//! ## Paint order
//!
//! Background first, then template elements, then custom elements, so
//! user content always renders on top.
//!
//! ## Composite elements
//!
//! | Element | Writer objects |
//! |---------|----------------|
//! | toc item | box artwork, two-digit number, title |
//! | section | box artwork, title, description |
//!
//! ## Failures
//!
//! Export never fails as a whole. An element that cannot be converted is
//! skipped and reported as an [`ExportWarning`]. A slide that cannot be
//! built at all (e.g. duplicate ids) is logged and omitted.

pub mod records;
pub mod text;

pub use records::*;

use serde::{Deserialize, Serialize};

use crate::canvas::{CanvasConfig, Point, Size, percent_to_in, round_to};
use crate::error::SlideError;
use crate::scene::{Element, ElementKind, SectionElement, Slide, TextElement};
use crate::template::TemplateAssets;
use crate::template::layout::toc_number_style;
use text::{apply_transform, text_record, text_runs};

/// How toc and section boxes are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationStyle {
    /// Artwork images from [`TemplateAssets`].
    #[default]
    Artwork,
    /// Vector shapes, no artwork needed.
    Shapes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub config: CanvasConfig,
    pub assets: TemplateAssets,
    pub decorations: DecorationStyle,
}

/// A skipped element or omitted slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportWarning {
    pub slide_index: usize,
    /// `None` when the whole slide was omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportOutput {
    pub slides: Vec<WriterSlideRecord>,
    pub warnings: Vec<ExportWarning>,
}

/// `#17a33e` -> `17A33E`. Anything but six hex digits is rejected.
pub fn normalize_color(hex: &str) -> Result<String, SlideError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SlideError::InvalidColor(hex.to_string()));
    }
    Ok(digits.to_ascii_uppercase())
}

/// Convert a deck into writer records.
pub fn to_writer_records(slides: &[Slide], options: &ExportOptions) -> ExportOutput {
    let mut output = ExportOutput::default();

    for (index, slide) in slides.iter().enumerate() {
        let mut warnings = Vec::new();
        match export_slide(index, slide, options, &mut warnings) {
            Ok(record) => {
                output.slides.push(record);
                output.warnings.extend(warnings);
            }
            Err(e) => {
                tracing::error!(slide = index, error = %e, "slide omitted from export");
                output.warnings.push(ExportWarning {
                    slide_index: index,
                    element_id: None,
                    message: format!("slide omitted: {}", e),
                });
            }
        }
    }

    tracing::debug!(
        slides = output.slides.len(),
        warnings = output.warnings.len(),
        "export transform finished"
    );
    output
}

fn export_slide(
    index: usize,
    slide: &Slide,
    options: &ExportOptions,
    warnings: &mut Vec<ExportWarning>,
) -> Result<WriterSlideRecord, SlideError> {
    slide.validate_unique_ids()?;

    let mut objects = Vec::new();
    for element in slide.all_elements() {
        match export_element(element, options) {
            Ok(objs) => objects.extend(objs),
            Err(e) => {
                tracing::warn!(slide = index, element = %element.id, error = %e, "element skipped");
                warnings.push(ExportWarning {
                    slide_index: index,
                    element_id: Some(element.id.clone()),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(WriterSlideRecord {
        index,
        kind: slide.kind,
        background: ImageSource::from_reference(options.assets.background(slide.kind)),
        objects,
    })
}

/// Element origin in inches, rejecting non-finite geometry.
fn origin_in(config: &CanvasConfig, element: &Element) -> Result<Point, SlideError> {
    let origin = config.point_to_in(element.position, element.space);
    if origin.x.is_finite() && origin.y.is_finite() {
        Ok(origin)
    } else {
        Err(SlideError::Geometry(format!("position of {}", element.id)))
    }
}

fn size_in(config: &CanvasConfig, element: &Element, size: Size) -> Result<Size, SlideError> {
    let size = config.size_to_in(size, element.space);
    if size.width.is_finite() && size.height.is_finite() {
        Ok(size)
    } else {
        Err(SlideError::Geometry(format!("size of {}", element.id)))
    }
}

fn export_element(element: &Element, options: &ExportOptions) -> Result<Vec<WriterObject>, SlideError> {
    let config = &options.config;
    let origin = origin_in(config, element)?;
    match &element.kind {
        ElementKind::Text(text) if text.toc.is_some() => toc_item(options, origin, text),
        ElementKind::Text(text) => {
            let (w, h) = match text.size {
                Some(size) => {
                    let size = size_in(config, element, size)?;
                    (Extent::Inches(size.width), Extent::Inches(size.height))
                }
                None => {
                    let w = (config.width_in - origin.x - config.safe_zone_in).max(0.0);
                    (Extent::Inches(w), Extent::Auto)
                }
            };
            let content = apply_transform(&text.text, text.style.text_transform);
            let record = text_record(
                config,
                text_runs(&content, text.list),
                &text.style,
                origin.x,
                origin.y,
                w,
                h,
            )?;
            Ok(vec![WriterObject::Text(record)])
        }
        ElementKind::Image(image) => {
            let source = ImageSource::from_reference(&image.source)
                .ok_or_else(|| SlideError::Image("missing image source".into()))?;
            let size = size_in(config, element, image.size)?;
            Ok(vec![WriterObject::Image(ImageRecord {
                source,
                x: round_to(origin.x, 3),
                y: round_to(origin.y, 3),
                w: round_to(size.width, 3),
                h: round_to(size.height, 3),
            })])
        }
        ElementKind::Section(section) => {
            let size = size_in(config, element, section.size)?;
            section_objects(options, origin, size, section)
        }
    }
}

/// Box artwork, or a vector stand-in when shapes are requested or no
/// artwork is configured.
fn decoration(options: &ExportOptions, artwork: &str, origin: Point, size: Size, shape: ShapeRecord) -> WriterObject {
    let source = match options.decorations {
        DecorationStyle::Artwork => ImageSource::from_reference(artwork),
        DecorationStyle::Shapes => None,
    };
    match source {
        Some(source) => WriterObject::Image(ImageRecord {
            source,
            x: round_to(origin.x, 3),
            y: round_to(origin.y, 3),
            w: round_to(size.width, 3),
            h: round_to(size.height, 3),
        }),
        None => WriterObject::Shape(ShapeRecord {
            x: round_to(origin.x, 3),
            y: round_to(origin.y, 3),
            w: round_to(size.width, 3),
            h: round_to(size.height, 3),
            ..shape
        }),
    }
}

fn accent_shape(shape: ShapeKind, fill: &str) -> ShapeRecord {
    ShapeRecord {
        shape,
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
        fill_color: Some(fill.to_string()),
        line_color: Some("17A33E".into()),
        line_width: Some(1.0),
        corner_radius: (shape == ShapeKind::RoundRect).then_some(0.5),
    }
}

fn toc_item(options: &ExportOptions, origin: Point, text: &TextElement) -> Result<Vec<WriterObject>, SlideError> {
    let config = &options.config;
    let Some(entry) = text.toc else {
        return Ok(Vec::new());
    };
    let pct_w = |pct: f64| percent_to_in(pct, config.width_in);
    let pct_h = |pct: f64| percent_to_in(pct, config.height_in);

    let box_size = Size::new(pct_w(5.0), pct_h(8.0));
    let artwork = options.assets.toc_box(entry.alternate);
    let fill = if entry.alternate { "0E7A2C" } else { "17A33E" };
    let badge = decoration(options, artwork, origin, box_size, accent_shape(ShapeKind::Ellipse, fill));

    let number = text_record(
        config,
        text_runs(&format!("{:02}", entry.number), None),
        &toc_number_style(config),
        origin.x,
        origin.y + 0.1,
        Extent::Inches(pct_w(5.0)),
        Extent::Inches(pct_h(7.0)),
    )?;

    let title = text_record(
        config,
        text_runs(&apply_transform(&text.text, text.style.text_transform), None),
        &text.style,
        origin.x + pct_w(5.0),
        origin.y,
        Extent::Inches(pct_w(22.0)),
        Extent::Inches(pct_h(8.0)),
    )?;

    Ok(vec![badge, WriterObject::Text(number), WriterObject::Text(title)])
}

fn section_objects(
    options: &ExportOptions,
    origin: Point,
    size: Size,
    section: &SectionElement,
) -> Result<Vec<WriterObject>, SlideError> {
    let config = &options.config;
    let pct_w = |pct: f64| percent_to_in(pct, config.width_in);
    let pct_h = |pct: f64| percent_to_in(pct, config.height_in);

    let frame = decoration(
        options,
        &options.assets.section_box,
        origin,
        size,
        accent_shape(ShapeKind::RoundRect, "E8FFEF"),
    );

    let title_style = &section.style.title;
    let title = text_record(
        config,
        text_runs(&apply_transform(&section.title, title_style.text_transform), None),
        title_style,
        origin.x + pct_w(2.0),
        origin.y + pct_h(1.0),
        Extent::Inches(pct_w(34.0)),
        Extent::Inches(0.4),
    )?;

    let description_style = &section.style.description;
    let description = text_record(
        config,
        text_runs(
            &apply_transform(&section.description, description_style.text_transform),
            None,
        ),
        description_style,
        origin.x + pct_w(2.0),
        origin.y + pct_h(8.0),
        Extent::Inches(pct_w(36.0)),
        Extent::Inches(0.7),
    )?;

    Ok(vec![frame, WriterObject::Text(title), WriterObject::Text(description)])
}
