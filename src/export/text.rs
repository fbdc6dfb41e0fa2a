//! Text content and typography mapping.

use super::records::{Extent, RunOptions, TextRecord, TextRun};
use super::normalize_color;
use crate::canvas::{CanvasConfig, round_to};
use crate::error::SlideError;
use crate::scene::{ListStyle, TextStyle, TextTransform};

/// Apply a case transform to literal text. The writer has no native
/// equivalent, so the transformed string is what gets exported.
pub fn apply_transform(text: &str, transform: TextTransform) -> String {
    match transform {
        TextTransform::None => text.to_string(),
        TextTransform::Uppercase => text.to_uppercase(),
        TextTransform::Lowercase => text.to_lowercase(),
        TextTransform::Capitalize => capitalize_words(text),
    }
}

/// Uppercase the first character of every word. An apostrophe inside a
/// word does not start a new one ("don't", "team's").
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        let is_word =
            ch.is_alphanumeric() || ch == '_' || (in_word && matches!(ch, '\'' | '\u{2019}'));
        if is_word && !in_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        in_word = is_word;
    }
    out
}

/// Indent level of a list line: one per leading tab or pair of spaces.
fn indent_level(line: &str) -> u32 {
    let mut level = 0;
    let mut spaces = 0;
    for ch in line.chars() {
        match ch {
            '\t' => level += 1,
            ' ' => {
                spaces += 1;
                if spaces == 2 {
                    level += 1;
                    spaces = 0;
                }
            }
            _ => break,
        }
    }
    level
}

/// Split text into writer runs.
///
/// Plain text is a single run. List text becomes one bulleted run per line,
/// each with its own indent level and a line break after all but the last.
pub fn text_runs(text: &str, list: Option<ListStyle>) -> Vec<TextRun> {
    let Some(list) = list else {
        return vec![TextRun {
            text: text.to_string(),
            options: RunOptions::default(),
        }];
    };

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| TextRun {
            text: line.trim_start().to_string(),
            options: RunOptions {
                bullet: Some(list.bullet),
                indent_level: Some(indent_level(line)),
                break_line: i < last,
            },
        })
        .collect()
}

/// Letter spacing in hundredths of a point. `None` when zero.
pub fn char_spacing(config: &CanvasConfig, letter_spacing_px: f64) -> Option<f64> {
    if !letter_spacing_px.is_finite() || letter_spacing_px == 0.0 {
        return None;
    }
    Some(round_to(config.px_to_pt(letter_spacing_px) * 100.0, 2))
}

/// Extra line height as paragraph "space after", in percent.
pub fn para_space_after(line_height: f64) -> Option<f64> {
    if line_height.is_finite() && line_height > 1.0 {
        Some(round_to((line_height - 1.0) * 100.0, 2))
    } else {
        None
    }
}

/// Map style and geometry into a writer text record.
pub fn text_record(
    config: &CanvasConfig,
    runs: Vec<TextRun>,
    style: &TextStyle,
    x: f64,
    y: f64,
    w: Extent,
    h: Extent,
) -> Result<TextRecord, SlideError> {
    let font_size = config.px_to_pt(style.font_size_px);
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(SlideError::Geometry(format!("font size {}", style.font_size_px)));
    }
    let transparency = if style.transparency_percent.is_finite() {
        (style.transparency_percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Ok(TextRecord {
        runs,
        x: round_to(x, 3),
        y: round_to(y, 3),
        w: round_extent(w),
        h: round_extent(h),
        font_size: round_to(font_size, 2),
        font_face: style.font_face.clone(),
        bold: style.bold,
        italic: style.italic,
        underline: style.underline,
        strike: style.strikethrough,
        color: normalize_color(&style.color_hex)?,
        align: style.align,
        valign: style.valign,
        char_spacing: char_spacing(config, style.letter_spacing_px),
        para_space_after: para_space_after(style.line_height_multiplier),
        transparency,
    })
}

fn round_extent(extent: Extent) -> Extent {
    match extent {
        Extent::Inches(v) => Extent::Inches(round_to(v, 3)),
        Extent::Auto => Extent::Auto,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::BulletKind;

    #[test]
    fn test_transforms() {
        assert_eq!(apply_transform("Hello world", TextTransform::Uppercase), "HELLO WORLD");
        assert_eq!(apply_transform("Hello World", TextTransform::Lowercase), "hello world");
        assert_eq!(
            apply_transform("quarterly review-q4 (draft)", TextTransform::Capitalize),
            "Quarterly Review-Q4 (Draft)"
        );
        assert_eq!(
            apply_transform("don't stop the team's plan", TextTransform::Capitalize),
            "Don't Stop The Team's Plan"
        );
        assert_eq!(
            apply_transform("\u{2018}we\u{2019}re \u{2019}round' 'quoted'", TextTransform::Capitalize),
            "\u{2018}We\u{2019}re \u{2019}Round' 'Quoted'"
        );
        assert_eq!(apply_transform("as is", TextTransform::None), "as is");
    }

    #[test]
    fn test_plain_text_is_one_run() {
        let runs = text_runs("a\nb", None);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "a\nb");
        assert_eq!(runs[0].options, RunOptions::default());
    }

    #[test]
    fn test_list_runs() {
        let list = Some(ListStyle { bullet: BulletKind::Numbered });
        let runs = text_runs("First\n\tNested\n    Deeper", list);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].text, "Nested");
        assert_eq!(runs[1].options.indent_level, Some(1));
        assert_eq!(runs[2].options.indent_level, Some(2));
        assert!(runs[0].options.break_line && runs[1].options.break_line);
        assert!(!runs[2].options.break_line);
        assert_eq!(runs[0].options.bullet, Some(BulletKind::Numbered));
    }

    #[test]
    fn test_spacing_encodings() {
        let config = CanvasConfig::SLIDE_16X9;
        // 2px = 1.5pt = 150 hundredths
        assert_eq!(char_spacing(&config, 2.0), Some(150.0));
        assert_eq!(char_spacing(&config, 0.0), None);
        assert_eq!(para_space_after(1.5), Some(50.0));
        assert_eq!(para_space_after(1.2), Some(20.0));
        assert_eq!(para_space_after(1.0), None);
        assert_eq!(para_space_after(f64::NAN), None);
    }

    #[test]
    fn test_text_record_mapping() {
        let config = CanvasConfig::SLIDE_16X9;
        let style = TextStyle {
            font_size_px: 32.0,
            color_hex: "#17a33e".into(),
            transparency_percent: 25.0,
            strikethrough: true,
            ..Default::default()
        };
        let record = text_record(
            &config,
            text_runs("Hi", None),
            &style,
            1.0 / 3.0,
            0.5,
            Extent::Inches(2.0 / 3.0),
            Extent::Auto,
        )
        .unwrap();
        assert_eq!(record.font_size, 24.0);
        assert_eq!(record.color, "17A33E");
        assert_eq!(record.transparency, 0.25);
        assert_eq!(record.x, 0.333);
        assert_eq!(record.w, Extent::Inches(0.667));
        assert!(record.strike);

        let bad = TextStyle {
            color_hex: "blue".into(),
            ..Default::default()
        };
        assert!(text_record(&config, vec![], &bad, 0.0, 0.0, Extent::Auto, Extent::Auto).is_err());
    }

    #[test]
    fn test_text_record_rejects_unusable_font_size() {
        let config = CanvasConfig::SLIDE_16X9;
        for size in [f64::NAN, f64::INFINITY, 0.0, -4.0] {
            let style = TextStyle {
                font_size_px: size,
                ..Default::default()
            };
            let result = text_record(&config, vec![], &style, 0.0, 0.0, Extent::Auto, Extent::Auto);
            assert!(matches!(result, Err(SlideError::Geometry(_))), "font size {}", size);
        }
    }
}
