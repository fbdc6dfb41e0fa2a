//! Slide generation, export and text measurement handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use crate::export::{DecorationStyle, ExportOptions, ExportOutput, to_writer_records};
use crate::geometry::{TEXT_PADDING, TextMeasurement, available_width, measure_text};
use crate::scene::{Slide, TextStyle};
use crate::template::{Presentation, build_slides};

use super::super::state::AppState;

/// Handle POST /api/slides/build - lay out a presentation into slides.
pub async fn build(
    State(state): State<Arc<AppState>>,
    Json(presentation): Json<Presentation>,
) -> Json<Vec<Slide>> {
    let slides = build_slides(&presentation, &state.config.canvas, state.clock.as_ref());
    Json(slides)
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub decorations: DecorationStyle,
}

/// Handle POST /api/slides/export - convert slides into writer records.
pub async fn export(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExportRequest>,
) -> Json<ExportOutput> {
    let options = ExportOptions {
        config: state.config.canvas,
        assets: state.config.assets.clone(),
        decorations: request.decorations,
    };
    Json(to_writer_records(&request.slides, &options))
}

#[derive(Debug, Deserialize)]
pub struct MeasureRequest {
    pub text: String,
    #[serde(default)]
    pub style: TextStyle,
    /// Wrap width in pixels. Defaults to the room left of `x`.
    pub max_width: Option<f64>,
    /// Horizontal position of the text box in pixels.
    pub x: Option<f64>,
}

/// Handle POST /api/slides/measure - wrap and measure text.
pub async fn measure(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MeasureRequest>,
) -> Result<Json<TextMeasurement>, (StatusCode, String)> {
    if request.style.font_size_px <= 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("font_size_px must be positive, got {}", request.style.font_size_px),
        ));
    }
    let canvas = &state.config.canvas;
    let max_width = request.max_width.unwrap_or_else(|| {
        let x = request.x.unwrap_or(canvas.safe_zone_px());
        available_width(canvas, x) - TEXT_PADDING * 2.0
    });
    Ok(Json(measure_text(
        state.measurer.as_ref(),
        &request.text,
        &request.style,
        max_width,
    )))
}
