//! # Template Transform
//!
//! Turns a [`Presentation`] into a deterministic, paginated deck:
//!
//! 1. one `title` slide (`main-title`, `subtitle`, `date-caption`)
//! 2. `ceil(topics / 9)` `toc` slides, items numbered across pages
//! 3. per topic, `ceil(sections / 6)` `content` slides
//!
//! Every element is a template element positioned in percent of the slide.
//! Ids depend only on the input and page index, so rebuilding unchanged
//! input with a pinned clock yields an identical scene.
//!
//! ```
//! use chrono::{Local, TimeZone};
//! use slidewright::canvas::CanvasConfig;
//! use slidewright::clock::FixedClock;
//! use slidewright::template::{Presentation, Topic, build_slides};
//!
//! let deck = Presentation::new("Q4 Review", "Board update")
//!     .topic(Topic::new("Financial Overview").section("Revenue", "Up 12%"));
//! let clock = FixedClock(Local.with_ymd_and_hms(2024, 10, 15, 9, 0, 0).unwrap());
//! let slides = build_slides(&deck, &CanvasConfig::SLIDE_16X9, &clock);
//! assert_eq!(slides.len(), 3);
//! ```

pub mod layout;
pub mod presentation;

pub use layout::TemplateAssets;
pub use presentation::{Presentation, SectionInput, Topic};

use crate::canvas::CanvasConfig;
use crate::clock::{Clock, month_and_year};
use crate::scene::{
    Element, ElementKind, SectionElement, SectionStyle, Slide, SlideKind, TextElement, TocEntry,
};
use layout::*;

/// Number of toc slides for `topic_count` topics.
pub fn toc_page_count(topic_count: usize) -> usize {
    topic_count.div_ceil(TOC_PAGE_SIZE)
}

/// Number of content slides for a topic with `section_count` sections.
pub fn content_page_count(section_count: usize) -> usize {
    section_count.div_ceil(CONTENT_PAGE_SIZE)
}

/// Build the full deck for a presentation.
pub fn build_slides(presentation: &Presentation, config: &CanvasConfig, clock: &dyn Clock) -> Vec<Slide> {
    let mut slides = vec![title_slide(presentation, config, clock)];

    let topics = &presentation.slides;
    for page in 0..toc_page_count(topics.len()) {
        slides.push(toc_slide(topics, page, config));
    }

    for (topic_index, topic) in topics.iter().enumerate() {
        for page in 0..content_page_count(topic.sections.len()) {
            slides.push(content_slide(topic, topic_index, page, config));
        }
    }

    tracing::debug!(
        topics = topics.len(),
        toc_pages = toc_page_count(topics.len()),
        slides = slides.len(),
        "built template deck"
    );
    slides
}

fn title_slide(presentation: &Presentation, config: &CanvasConfig, clock: &dyn Clock) -> Slide {
    let mut slide = Slide::new(SlideKind::Title);
    slide.elements = vec![
        Element::template(
            "main-title",
            TITLE_POSITION,
            ElementKind::Text(
                TextElement::new(&presentation.presentation_title, title_style(config)).sized(TITLE_SIZE),
            ),
        ),
        Element::template(
            "subtitle",
            SUBTITLE_POSITION,
            ElementKind::Text(
                TextElement::new(&presentation.presentation_subtitle, subtitle_style(config))
                    .sized(SUBTITLE_SIZE),
            ),
        ),
        Element::template(
            "date-caption",
            CAPTION_POSITION,
            ElementKind::Text(
                TextElement::new(month_and_year(clock), caption_style(config)).sized(CAPTION_SIZE),
            ),
        ),
    ];
    slide
}

fn heading(id: String, text: &str, config: &CanvasConfig) -> Element {
    Element::template(
        id,
        HEADING_POSITION,
        ElementKind::Text(TextElement::new(text, heading_style(config))),
    )
}

fn toc_slide(topics: &[Topic], page: usize, config: &CanvasConfig) -> Slide {
    let mut slide = Slide::new(SlideKind::Toc);
    slide.elements.push(heading("toc-title".into(), TOC_HEADING, config));

    let start = page * TOC_PAGE_SIZE;
    let end = (start + TOC_PAGE_SIZE).min(topics.len());
    for (cell, topic_index) in (start..end).enumerate() {
        let number = topic_index + 1;
        let mut item = TextElement::new(&topics[topic_index].title, toc_item_style(config));
        item.toc = Some(TocEntry {
            number: number as u32,
            alternate: is_alternate_cell(cell),
        });
        slide.elements.push(Element::template(
            format!("toc-item-{}", number),
            TOC_GRID[cell],
            ElementKind::Text(item),
        ));
    }
    slide
}

fn content_slide(topic: &Topic, topic_index: usize, page: usize, config: &CanvasConfig) -> Slide {
    let mut slide = Slide::new(SlideKind::Content);
    slide.title = Some(topic.title.clone());
    slide.elements.push(heading(
        format!("content-title-{}-{}", topic_index, page),
        &topic.title,
        config,
    ));

    let style = SectionStyle {
        title: section_title_style(config),
        description: section_description_style(config),
    };
    let start = page * CONTENT_PAGE_SIZE;
    let end = (start + CONTENT_PAGE_SIZE).min(topic.sections.len());
    for (cell, section_index) in (start..end).enumerate() {
        let section = &topic.sections[section_index];
        slide.elements.push(Element::template(
            format!("section-{}-{}", topic_index, section_index),
            CONTENT_GRID[cell],
            ElementKind::Section(SectionElement {
                title: section.title.clone(),
                description: section.description.clone(),
                size: SECTION_SIZE,
                style: style.clone(),
            }),
        ));
    }
    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Point, PositionSpace};
    use crate::clock::FixedClock;
    use chrono::{Local, TimeZone};

    fn clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 10, 15, 9, 0, 0).unwrap())
    }

    fn deck(topics: usize, sections: usize) -> Presentation {
        let mut p = Presentation::new("Title", "Subtitle");
        for t in 0..topics {
            let mut topic = Topic::new(format!("Topic {}", t));
            for s in 0..sections {
                topic = topic.section(format!("S{}", s), "desc");
            }
            p = p.topic(topic);
        }
        p
    }

    fn build(p: &Presentation) -> Vec<Slide> {
        build_slides(p, &CanvasConfig::SLIDE_16X9, &clock())
    }

    fn kinds(slides: &[Slide]) -> Vec<SlideKind> {
        slides.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_page_counts() {
        assert_eq!(toc_page_count(0), 0);
        assert_eq!(toc_page_count(9), 1);
        assert_eq!(toc_page_count(10), 2);
        assert_eq!(content_page_count(6), 1);
        assert_eq!(content_page_count(7), 2);
    }

    #[test]
    fn test_title_slide() {
        let slides = build(&deck(0, 0));
        assert_eq!(slides.len(), 1);
        let title = &slides[0];
        assert_eq!(title.kind, SlideKind::Title);
        let ids: Vec<_> = title.elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["main-title", "subtitle", "date-caption"]);
        assert_eq!(title.find("date-caption").unwrap().as_text().unwrap().text, "October 2024");
        assert!(title.elements.iter().all(|e| e.is_template && e.space == PositionSpace::Percent));
    }

    #[test]
    fn test_nine_topics_one_toc_page() {
        let slides = build(&deck(9, 0));
        assert_eq!(kinds(&slides), vec![SlideKind::Title, SlideKind::Toc]);
        // heading + 9 items
        assert_eq!(slides[1].elements.len(), 10);
    }

    #[test]
    fn test_ten_topics_two_toc_pages() {
        let slides = build(&deck(10, 0));
        assert_eq!(kinds(&slides), vec![SlideKind::Title, SlideKind::Toc, SlideKind::Toc]);
        let second = &slides[2];
        assert_eq!(second.elements.len(), 2);
        let item = second.find("toc-item-10").unwrap();
        assert_eq!(item.position, Point::new(7.0, 25.0));
        let entry = item.as_text().unwrap().toc.unwrap();
        assert_eq!(entry.number, 10);
        assert!(!entry.alternate);
    }

    #[test]
    fn test_toc_numbers_and_alternates() {
        let slides = build(&deck(3, 0));
        let toc = &slides[1];
        let entries: Vec<TocEntry> = toc
            .elements
            .iter()
            .filter_map(|e| e.as_text().and_then(|t| t.toc))
            .collect();
        assert_eq!(entries.iter().map(|e| e.number).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(
            entries.iter().map(|e| e.alternate).collect::<Vec<_>>(),
            vec![false, true, false]
        );
        assert_eq!(toc.find("toc-title").unwrap().as_text().unwrap().text, TOC_HEADING);
    }

    #[test]
    fn test_section_pagination() {
        let six = build(&deck(1, 6));
        assert_eq!(six.len(), 3);
        let seven = build(&deck(1, 7));
        assert_eq!(seven.len(), 4);
        let second_page = &seven[3];
        assert_eq!(second_page.title.as_deref(), Some("Topic 0"));
        let ids: Vec<_> = second_page.elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["content-title-0-1", "section-0-6"]);
        assert_eq!(second_page.elements[1].position, CONTENT_GRID[0]);
    }

    #[test]
    fn test_topic_without_sections_has_no_content_slide() {
        let slides = build(&deck(2, 0));
        assert_eq!(kinds(&slides), vec![SlideKind::Title, SlideKind::Toc]);
    }

    #[test]
    fn test_ids_unique_per_slide() {
        for slide in build(&deck(12, 8)) {
            slide.validate_unique_ids().unwrap();
        }
    }

    #[test]
    fn test_idempotent_with_pinned_clock() {
        let p = deck(11, 7);
        assert_eq!(build(&p), build(&p));
    }
}
