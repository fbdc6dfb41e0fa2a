//! Server state and configuration.

use serde::Deserialize;
use std::sync::Arc;

use crate::canvas::CanvasConfig;
use crate::clock::{Clock, SystemClock};
use crate::geometry::{ApproxMetrics, TextMeasurer};
use crate::template::TemplateAssets;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Slide geometry used by every request
    pub canvas: CanvasConfig,
    /// Artwork references resolved into exported records
    pub assets: TemplateAssets,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".into(),
            canvas: CanvasConfig::SLIDE_16X9,
            assets: TemplateAssets::default(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Month/year caption source for generated decks.
    pub clock: Arc<dyn Clock>,
    pub measurer: Arc<dyn TextMeasurer>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            measurer: Arc::new(ApproxMetrics),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }
}
