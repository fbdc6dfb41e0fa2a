//! Text measurement, word wrapping and text-box auto-sizing.
//!
//! Measurement is approximate by nature: it only has to be deterministic,
//! not match the final presentation reader's layout engine. Two metric
//! sources are available behind [`TextMeasurer`]:
//!
//! - [`ApproxMetrics`]: a fixed per-character advance table (no font files)
//! - [`GlyphMetrics`]: real advances and kerning from TTF/OTF data via ab_glyph

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use serde::Serialize;

use super::finite_or;
use crate::canvas::{CanvasConfig, Size};
use crate::error::SlideError;
use crate::scene::{TextElement, TextStyle};

/// Smallest auto-sized text box width.
pub const TEXT_MIN_WIDTH: f64 = 100.0;
/// Smallest auto-sized text box height.
pub const TEXT_MIN_HEIGHT: f64 = 24.0;
/// Inner padding on each side of a text box.
pub const TEXT_PADDING: f64 = 8.0;

/// Source of single-line advance widths.
pub trait TextMeasurer: Send + Sync {
    /// Width in pixels of `text` laid out on one line, letter spacing excluded.
    fn line_width(&self, text: &str, style: &TextStyle) -> f64;
}

// ============================================================================
// APPROXIMATE METRICS
// ============================================================================

/// Deterministic advance table in ems.
///
/// All entries are binary fractions so sums are exact and identical on
/// every platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMetrics;

impl ApproxMetrics {
    fn advance_em(ch: char) -> f64 {
        match ch {
            ' ' | '\t' => 0.25,
            'i' | 'j' | 'l' | 'I' | '.' | ',' | ':' | ';' | '!' | '|' | '\'' => 0.25,
            'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' | '"' => 0.375,
            'm' | 'w' => 0.8125,
            'M' | 'W' | '@' => 0.875,
            c if c.is_ascii_digit() => 0.5625,
            c if (c as u32) >= 0x2E80 => 1.0,
            c if c.is_uppercase() => 0.6875,
            c if c.is_whitespace() => 0.25,
            _ => 0.5,
        }
    }
}

impl TextMeasurer for ApproxMetrics {
    fn line_width(&self, text: &str, style: &TextStyle) -> f64 {
        let ems: f64 = text.chars().map(Self::advance_em).sum();
        let weight = if style.bold { 1.0625 } else { 1.0 };
        ems * font_size(style) * weight
    }
}

// ============================================================================
// GLYPH METRICS
// ============================================================================

/// Advance widths from real font files.
///
/// Font bytes are supplied by the caller (the crate ships no fonts). Bold
/// text uses the bold face when one was given, the regular face otherwise.
#[derive(Clone)]
pub struct GlyphMetrics {
    regular: FontArc,
    bold: Option<FontArc>,
}

impl GlyphMetrics {
    /// Load metrics from TTF/OTF data.
    pub fn from_bytes(regular: Vec<u8>, bold: Option<Vec<u8>>) -> Result<Self, SlideError> {
        let regular = FontArc::try_from_vec(regular)
            .map_err(|e| SlideError::Font(format!("regular face: {}", e)))?;
        let bold = bold
            .map(|data| {
                FontArc::try_from_vec(data).map_err(|e| SlideError::Font(format!("bold face: {}", e)))
            })
            .transpose()?;
        Ok(Self { regular, bold })
    }

    fn face(&self, bold: bool) -> &FontArc {
        match (&self.bold, bold) {
            (Some(face), true) => face,
            _ => &self.regular,
        }
    }
}

impl std::fmt::Debug for GlyphMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphMetrics")
            .field("has_bold", &self.bold.is_some())
            .finish()
    }
}

impl TextMeasurer for GlyphMetrics {
    fn line_width(&self, text: &str, style: &TextStyle) -> f64 {
        let font = self.face(style.bold);
        // font-size is an em size; ab_glyph scales by ascent-to-descent height
        let units_per_em = font.units_per_em().unwrap_or(1000.0);
        let em_px = font_size(style) as f32;
        let scale = PxScale::from(em_px * font.height_unscaled() / units_per_em);
        let scaled = font.as_scaled(scale);

        let mut caret = 0.0f32;
        let mut previous = None;
        for ch in text.chars() {
            let id = font.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            caret += scaled.h_advance(id);
            previous = Some(id);
        }
        caret as f64
    }
}

// ============================================================================
// MEASUREMENT
// ============================================================================

/// Size of a block of text after wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextMeasurement {
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

fn font_size(style: &TextStyle) -> f64 {
    finite_or(style.font_size_px, 0.0).max(0.0)
}

fn line_height(style: &TextStyle) -> f64 {
    let m = finite_or(style.line_height_multiplier, 1.0);
    if m > 0.0 { m } else { 1.0 }
}

/// Rendered width of one line including letter spacing.
fn spaced_width(measurer: &dyn TextMeasurer, line: &str, style: &TextStyle) -> f64 {
    let spacing = finite_or(style.letter_spacing_px, 0.0);
    measurer.line_width(line, style) + spacing * line.chars().count() as f64
}

/// Greedy word wrap of one paragraph.
///
/// A word wider than `max_width` stays whole on its own line.
fn wrap_paragraph(
    measurer: &dyn TextMeasurer,
    paragraph: &str,
    style: &TextStyle,
    max_width: f64,
) -> Vec<String> {
    if spaced_width(measurer, paragraph, style) <= max_width {
        return vec![paragraph.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if spaced_width(measurer, &candidate, style) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split text into display lines: literal newlines first, then word wrap.
pub fn wrap_lines(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    max_width: f64,
) -> Vec<String> {
    let max_width = if max_width.is_nan() { 0.0 } else { max_width.max(0.0) };
    text.split('\n')
        .flat_map(|paragraph| wrap_paragraph(measurer, paragraph, style, max_width))
        .collect()
}

/// Measure wrapped text.
///
/// Width is the widest line, capped at `max_width`, rounded up. Height is
/// `line_count * font_size * line_height`, rounded up. Identical inputs
/// always produce identical output.
pub fn measure_text(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    max_width: f64,
) -> TextMeasurement {
    let lines = wrap_lines(measurer, text, style, max_width);
    let cap = if max_width.is_nan() { 0.0 } else { max_width.max(0.0) };
    let widest = lines
        .iter()
        .map(|line| spaced_width(measurer, line, style))
        .fold(0.0f64, f64::max);

    TextMeasurement {
        width: widest.min(cap).ceil(),
        height: (lines.len() as f64 * font_size(style) * line_height(style)).ceil(),
        line_count: lines.len(),
    }
}

/// Width a text box at horizontal position `x` may grow to.
pub fn available_width(config: &CanvasConfig, x: f64) -> f64 {
    let x = finite_or(x, config.safe_zone_px());
    (config.width_px() - config.safe_zone_px() * 2.0 - x).max(TEXT_MIN_WIDTH)
}

/// Auto-size a text box placed at pixel `x`: measured text plus padding.
pub fn text_box_size(
    config: &CanvasConfig,
    measurer: &dyn TextMeasurer,
    text: &TextElement,
    x: f64,
) -> Size {
    let max_width = available_width(config, x) - TEXT_PADDING * 2.0;
    let measured = measure_text(measurer, &text.text, &text.style, max_width);
    Size::new(
        (measured.width + TEXT_PADDING * 2.0).max(TEXT_MIN_WIDTH),
        (measured.height + TEXT_PADDING * 2.0).max(TEXT_MIN_HEIGHT),
    )
}
