//! # Server Tests
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::{Local, TimeZone};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use slidewright::clock::FixedClock;
use slidewright::server::{AppState, ServerConfig, router};

const Q4_REVIEW_JSON: &str = include_str!("../src/fixtures/q4-review.json");

fn app() -> Router {
    let clock = FixedClock(Local.with_ymd_and_hms(2024, 10, 15, 9, 0, 0).unwrap());
    let state = AppState::new(ServerConfig::default()).with_clock(Arc::new(clock));
    router(Arc::new(state))
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

#[tokio::test]
async fn test_build_then_export() {
    let (status, slides) = post_json(app(), "/api/slides/build", Q4_REVIEW_JSON.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let slides = slides.as_array().unwrap().clone();
    assert_eq!(slides.len(), 5);
    assert_eq!(slides[0]["type"], "title");
    assert_eq!(slides[0]["elements"][2]["text"], "October 2024");

    let body = json!({ "slides": slides }).to_string();
    let (status, output) = post_json(app(), "/api/slides/export", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(output["slides"].as_array().unwrap().len(), 5);
    assert_eq!(output["warnings"], json!([]));
    assert_eq!(output["slides"][0]["background"]["path"], "assets/section20_frontSlide.png");
}

#[tokio::test]
async fn test_export_reports_warnings() {
    let body = json!({
        "slides": [{
            "type": "content",
            "custom_elements": [
                { "id": "t", "type": "text", "text": "Hello",
                  "position": {"x": 48, "y": 48}, "style": {"color_hex": "#17A33E"} },
                { "id": "img", "type": "image", "source": "",
                  "position": {"x": 48, "y": 48}, "size": {"width": 10, "height": 10}, "aspect_ratio": 1 }
            ]
        }],
        "decorations": "shapes"
    })
    .to_string();
    let (status, output) = post_json(app(), "/api/slides/export", body).await;
    assert_eq!(status, StatusCode::OK);
    let objects = output["slides"][0]["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0]["kind"], "text");
    assert_eq!(objects[0]["color"], "17A33E");
    assert_eq!(objects[0]["h"], "auto");
    assert_eq!(output["warnings"][0]["element_id"], "img");
}

#[tokio::test]
async fn test_measure() {
    let body = json!({
        "text": "Hello",
        "style": { "font_size_px": 20, "line_height_multiplier": 1.5 },
        "max_width": 500
    })
    .to_string();
    let (status, m) = post_json(app(), "/api/slides/measure", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(m["line_count"], 1);
    assert_eq!(m["height"], 30.0);
}

#[tokio::test]
async fn test_measure_rejects_zero_font_size() {
    let body = json!({ "text": "x", "style": { "font_size_px": 0 } }).to_string();
    let (status, _) = post_json(app(), "/api/slides/measure", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_build_rejects_malformed_json() {
    let (status, _) = post_json(app(), "/api/slides/build", "{not json".into()).await;
    assert!(status.is_client_error());
}
