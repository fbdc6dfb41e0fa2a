//! Fixed grids, typography and artwork of the section template.
//!
//! All positions are percentages of the slide. Font sizes are declared in
//! points and converted to canvas pixels when the scene is built.
//!
//! ## Table of contents (3 x 3, row-major)
//!
//! ```text
//!   7%      38%     69%
//!   [01]    [02]    [03]     25%
//!   [04]    [05]    [06]     45%
//!   [07]    [08]    [09]     65%
//! ```
//!
//! ## Content (2 columns x 3 rows, row-major)
//!
//! ```text
//!   7%            50%
//!   [section]     [section]  22%
//!   [section]     [section]  47%
//!   [section]     [section]  72%
//! ```

use serde::{Deserialize, Serialize};

use crate::canvas::{CanvasConfig, Point, Size};
use crate::scene::{Align, SlideKind, TextStyle, VAlign};

/// Topics per table-of-contents slide.
pub const TOC_PAGE_SIZE: usize = 9;
/// Sections per content slide.
pub const CONTENT_PAGE_SIZE: usize = 6;

pub const TOC_GRID: [Point; TOC_PAGE_SIZE] = [
    Point { x: 7.0, y: 25.0 },
    Point { x: 38.0, y: 25.0 },
    Point { x: 69.0, y: 25.0 },
    Point { x: 7.0, y: 45.0 },
    Point { x: 38.0, y: 45.0 },
    Point { x: 69.0, y: 45.0 },
    Point { x: 7.0, y: 65.0 },
    Point { x: 38.0, y: 65.0 },
    Point { x: 69.0, y: 65.0 },
];

pub const CONTENT_GRID: [Point; CONTENT_PAGE_SIZE] = [
    Point { x: 7.0, y: 22.0 },
    Point { x: 50.0, y: 22.0 },
    Point { x: 7.0, y: 47.0 },
    Point { x: 50.0, y: 47.0 },
    Point { x: 7.0, y: 72.0 },
    Point { x: 50.0, y: 72.0 },
];

pub const TITLE_POSITION: Point = Point { x: 15.0, y: 25.0 };
pub const TITLE_SIZE: Size = Size { width: 70.0, height: 30.0 };
pub const SUBTITLE_POSITION: Point = Point { x: 15.0, y: 58.0 };
pub const SUBTITLE_SIZE: Size = Size { width: 70.0, height: 10.0 };
pub const CAPTION_POSITION: Point = Point { x: 5.0, y: 92.0 };
pub const CAPTION_SIZE: Size = Size { width: 30.0, height: 6.0 };
/// Heading of toc and content slides.
pub const HEADING_POSITION: Point = Point { x: 5.5, y: 10.0 };
pub const SECTION_SIZE: Size = Size { width: 40.0, height: 22.0 };

pub const TOC_HEADING: &str = "Table of content";

const DISPLAY_FACE: &str = "Urbanist";
const BODY_FACE: &str = "Plus Jakarta Sans";
const LIGHT_FACE: &str = "Plus Jakarta Sans Light";

/// Whether the toc item in this grid cell uses the alternate box artwork.
#[inline]
pub fn is_alternate_cell(index_on_page: usize) -> bool {
    index_on_page % 3 == 1
}

fn style(config: &CanvasConfig, face: &str, size_pt: f64) -> TextStyle {
    TextStyle::new(face, config.pt_to_px(size_pt))
}

pub fn title_style(config: &CanvasConfig) -> TextStyle {
    style(config, DISPLAY_FACE, 40.0)
        .bold()
        .aligned(Align::Center, VAlign::Bottom)
}

pub fn subtitle_style(config: &CanvasConfig) -> TextStyle {
    style(config, LIGHT_FACE, 15.0).aligned(Align::Center, VAlign::Top)
}

pub fn caption_style(config: &CanvasConfig) -> TextStyle {
    style(config, BODY_FACE, 15.0)
}

pub fn heading_style(config: &CanvasConfig) -> TextStyle {
    style(config, BODY_FACE, 25.0).bold()
}

pub fn toc_item_style(config: &CanvasConfig) -> TextStyle {
    style(config, BODY_FACE, 12.0).bold()
}

pub fn toc_number_style(config: &CanvasConfig) -> TextStyle {
    style(config, BODY_FACE, 14.0)
        .bold()
        .color("#FFFFFF")
        .aligned(Align::Center, VAlign::Middle)
}

pub fn section_title_style(config: &CanvasConfig) -> TextStyle {
    style(config, BODY_FACE, 13.0)
        .bold()
        .aligned(Align::Left, VAlign::Middle)
}

pub fn section_description_style(config: &CanvasConfig) -> TextStyle {
    style(config, LIGHT_FACE, 11.0)
}

// ============================================================================
// ASSETS
// ============================================================================

/// Background and decoration artwork references (paths, URLs or data URIs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateAssets {
    pub title_background: String,
    /// Shared by toc and content slides.
    pub content_background: String,
    pub toc_box: String,
    pub toc_box_alternate: String,
    pub section_box: String,
}

impl Default for TemplateAssets {
    fn default() -> Self {
        Self {
            title_background: "assets/section20_frontSlide.png".into(),
            content_background: "assets/section20_bckgrd.png".into(),
            toc_box: "assets/section20_TOC_box1.png".into(),
            toc_box_alternate: "assets/section20_TOC_box2.png".into(),
            section_box: "assets/section20_list1_box.png".into(),
        }
    }
}

impl TemplateAssets {
    /// Background artwork for a slide type.
    pub fn background(&self, kind: SlideKind) -> &str {
        match kind {
            SlideKind::Title => &self.title_background,
            SlideKind::Toc | SlideKind::Content => &self.content_background,
        }
    }

    pub fn toc_box(&self, alternate: bool) -> &str {
        if alternate {
            &self.toc_box_alternate
        } else {
            &self.toc_box
        }
    }
}
