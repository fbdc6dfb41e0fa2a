//! Business-data input of the template transform.
//!
//! ```json
//! {
//!   "presentationTitle": "Q4 Review",
//!   "presentationSubtitle": "Quarterly business review",
//!   "slides": [
//!     { "title": "Financial Overview",
//!       "sections": [{ "title": "Revenue", "description": "Up 12%" }] }
//!   ]
//! }
//! ```
//!
//! Every field is optional on the wire; missing values degrade to empty
//! strings and lists so a malformed document still yields a partial deck.

use serde::{Deserialize, Serialize};

/// Immutable source document for [`build_slides`](super::build_slides).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Presentation {
    pub presentation_title: String,
    pub presentation_subtitle: String,
    /// Topics, one table-of-contents entry each.
    pub slides: Vec<Topic>,
}

/// A topic with its ordered sub-sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub title: String,
    pub sections: Vec<SectionInput>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionInput {
    pub title: String,
    pub description: String,
}

impl Presentation {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            presentation_title: title.into(),
            presentation_subtitle: subtitle.into(),
            slides: Vec::new(),
        }
    }

    /// Builder-style topic append.
    pub fn topic(mut self, topic: Topic) -> Self {
        self.slides.push(topic);
        self
    }
}

impl Topic {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.sections.push(SectionInput {
            title: title.into(),
            description: description.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_input() {
        let json = r#"{
            "presentationTitle": "Q4 Review",
            "presentationSubtitle": "Board update",
            "slides": [{"title": "Market", "sections": [{"title": "Share", "description": "Flat"}]}]
        }"#;
        let p: Presentation = serde_json::from_str(json).unwrap();
        assert_eq!(p.presentation_title, "Q4 Review");
        assert_eq!(p.slides[0].sections[0].description, "Flat");
    }

    #[test]
    fn test_missing_fields_default() {
        let p: Presentation = serde_json::from_str(r#"{"slides": [{"title": "Only title"}]}"#).unwrap();
        assert_eq!(p.presentation_title, "");
        assert!(p.slides[0].sections.is_empty());
    }
}
