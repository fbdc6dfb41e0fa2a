//! # Writer Boundary
//!
//! The only asynchronous part of the pipeline: records produced by the
//! export transform are handed to a slide-file writer, and the written
//! artifact optionally to a storage collaborator.
//!
//! Both collaborators sit behind async traits so the binary package writer
//! and the upload backend can be swapped without touching the transforms.
//! [`JsonDeckWriter`] and [`DirectoryStore`] are the reference sinks.
//!
//! Writer and storage errors are the fatal failures of an export: they
//! propagate as a single `Err`, and a stored-but-rejected artifact is
//! removed so no partial result is exposed. Re-invoking writes a new file.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::canvas::CanvasConfig;
use crate::error::SlideError;
use crate::export::{ExportOptions, ExportWarning, WriterSlideRecord, to_writer_records};
use crate::scene::Slide;

/// Complete writer input: layout plus one record per slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterDeck {
    /// Writer layout name, `LAYOUT_16x9` for the canonical slide.
    pub layout: String,
    pub width_in: f64,
    pub height_in: f64,
    pub slides: Vec<WriterSlideRecord>,
}

impl WriterDeck {
    pub fn new(config: &CanvasConfig, slides: Vec<WriterSlideRecord>) -> Self {
        let widescreen = (config.width_in * 9.0 - config.height_in * 16.0).abs() < 1e-9;
        Self {
            layout: if widescreen { "LAYOUT_16x9" } else { "LAYOUT_CUSTOM" }.into(),
            width_in: config.width_in,
            height_in: config.height_in,
            slides,
        }
    }
}

/// Serializes a deck into a file.
#[async_trait]
pub trait DeckWriter: Send + Sync {
    /// Write `deck` to `path`. Returns the number of bytes written.
    async fn write(&self, deck: &WriterDeck, path: &Path) -> Result<u64, SlideError>;
}

/// Hands a written artifact to long-term storage.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Store the file at `artifact` under `owner` (e.g. an account email).
    /// Returns where it ended up.
    async fn store(&self, owner: &str, artifact: &Path) -> Result<String, SlideError>;
}

/// Writes the records as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDeckWriter {
    pub pretty: bool,
}

#[async_trait]
impl DeckWriter for JsonDeckWriter {
    async fn write(&self, deck: &WriterDeck, path: &Path) -> Result<u64, SlideError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(deck)?
        } else {
            serde_json::to_vec(deck)?
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| SlideError::Writer(format!("{}: {}", path.display(), e)))?;
        Ok(bytes.len() as u64)
    }
}

/// Copies artifacts into `root/<owner>/`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn valid_owner(owner: &str) -> bool {
    !owner.is_empty()
        && owner != "."
        && owner != ".."
        && !owner.contains(['/', '\\'])
}

#[async_trait]
impl ArtifactStore for DirectoryStore {
    async fn store(&self, owner: &str, artifact: &Path) -> Result<String, SlideError> {
        if !valid_owner(owner) {
            return Err(SlideError::Storage(format!("invalid owner: {:?}", owner)));
        }
        let file_name = artifact
            .file_name()
            .ok_or_else(|| SlideError::Storage(format!("no file name in {}", artifact.display())))?;
        let dir = self.root.join(owner);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| SlideError::Storage(e.to_string()))?;
        let dest = dir.join(file_name);
        tokio::fs::copy(artifact, &dest)
            .await
            .map_err(|e| SlideError::Storage(e.to_string()))?;
        Ok(dest.display().to_string())
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    pub slides: usize,
    pub bytes: u64,
    pub warnings: Vec<ExportWarning>,
    /// Storage location, when the deck was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Run the export transform and hand the records to `writer`.
pub async fn export_deck(
    slides: &[Slide],
    options: &ExportOptions,
    writer: &dyn DeckWriter,
    path: &Path,
) -> Result<ExportReport, SlideError> {
    let output = to_writer_records(slides, options);
    for warning in &output.warnings {
        tracing::warn!(
            slide = warning.slide_index,
            element = warning.element_id.as_deref().unwrap_or("-"),
            "{}",
            warning.message
        );
    }

    let deck = WriterDeck::new(&options.config, output.slides);
    let slide_count = deck.slides.len();
    let bytes = writer.write(&deck, path).await?;
    tracing::info!(path = %path.display(), slides = slide_count, bytes, "deck written");

    Ok(ExportReport {
        path: path.to_path_buf(),
        slides: slide_count,
        bytes,
        warnings: output.warnings,
        location: None,
    })
}

/// Export, then store the artifact under `owner`.
///
/// If storage rejects the artifact the written file is removed again.
pub async fn publish_deck(
    slides: &[Slide],
    options: &ExportOptions,
    writer: &dyn DeckWriter,
    store: &dyn ArtifactStore,
    path: &Path,
    owner: &str,
) -> Result<ExportReport, SlideError> {
    let mut report = export_deck(slides, options, writer, path).await?;
    match store.store(owner, path).await {
        Ok(location) => {
            tracing::info!(owner, location = %location, "deck published");
            report.location = Some(location);
            Ok(report)
        }
        Err(e) => {
            tracing::error!(owner, error = %e, "storage rejected deck");
            if let Err(remove_err) = tokio::fs::remove_file(path).await {
                tracing::warn!(path = %path.display(), error = %remove_err, "could not remove artifact");
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Point;
    use crate::scene::{Element, ElementKind, SlideKind, TextElement, TextStyle};

    struct FailingWriter;

    #[async_trait]
    impl DeckWriter for FailingWriter {
        async fn write(&self, _deck: &WriterDeck, _path: &Path) -> Result<u64, SlideError> {
            Err(SlideError::Writer("package library crashed".into()))
        }
    }

    struct RejectingStore;

    #[async_trait]
    impl ArtifactStore for RejectingStore {
        async fn store(&self, _owner: &str, _artifact: &Path) -> Result<String, SlideError> {
            Err(SlideError::Storage("quota exceeded".into()))
        }
    }

    fn deck() -> Vec<Slide> {
        let mut slide = Slide::new(SlideKind::Content);
        slide.custom_elements.push(Element::new(
            "t",
            Point::new(48.0, 48.0),
            ElementKind::Text(TextElement::new("Hello", TextStyle::default())),
        ));
        vec![slide]
    }

    #[test]
    fn test_layout_name() {
        assert_eq!(WriterDeck::new(&CanvasConfig::SLIDE_16X9, vec![]).layout, "LAYOUT_16x9");
        let square = CanvasConfig {
            width_in: 5.0,
            height_in: 5.0,
            ..CanvasConfig::SLIDE_16X9
        };
        assert_eq!(WriterDeck::new(&square, vec![]).layout, "LAYOUT_CUSTOM");
    }

    #[test]
    fn test_owner_validation() {
        assert!(valid_owner("ada@example.com"));
        assert!(!valid_owner(""));
        assert!(!valid_owner(".."));
        assert!(!valid_owner("a/b"));
    }

    #[tokio::test]
    async fn test_json_writer_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("deck.json");
        let report = export_deck(&deck(), &ExportOptions::default(), &JsonDeckWriter::default(), &path)
            .await
            .unwrap();
        assert_eq!(report.slides, 1);
        assert!(report.bytes > 0);

        let written: WriterDeck = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written.slides.len(), 1);
        assert_eq!(written.slides[0].texts().next().unwrap().plain_text(), "Hello");
    }

    #[tokio::test]
    async fn test_writer_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_deck(&deck(), &ExportOptions::default(), &FailingWriter, &dir.path().join("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, SlideError::Writer(_)));
    }

    #[tokio::test]
    async fn test_publish_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let store = DirectoryStore::new(dir.path().join("store"));
        let report = publish_deck(
            &deck(),
            &ExportOptions::default(),
            &JsonDeckWriter { pretty: true },
            &store,
            &path,
            "ada@example.com",
        )
        .await
        .unwrap();
        let location = report.location.unwrap();
        assert!(location.ends_with("deck.json"));
        assert!(Path::new(&location).exists());
    }

    #[tokio::test]
    async fn test_rejected_publish_removes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let err = publish_deck(
            &deck(),
            &ExportOptions::default(),
            &JsonDeckWriter::default(),
            &RejectingStore,
            &path,
            "ada@example.com",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SlideError::Storage(_)));
        assert!(!path.exists());
    }
}
