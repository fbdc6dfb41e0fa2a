//! # HTTP Server for Server-Side Deck Generation
//!
//! Exposes the template and export transforms over JSON.
//!
//! | Route | Body | Response |
//! |-------|------|----------|
//! | `POST /api/slides/build` | presentation | slides |
//! | `POST /api/slides/export` | `{slides, decorations?}` | writer records + warnings |
//! | `POST /api/slides/measure` | `{text, style?, max_width?, x?}` | text measurement |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::SlideError;

/// Build the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/slides/build", post(handlers::slides::build))
        .route("/api/slides/export", post(handlers::slides::export))
        .route("/api/slides/measure", post(handlers::slides::measure))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use slidewright::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), slidewright::SlideError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), SlideError> {
    let listen_addr = config.listen_addr.clone();
    let app = router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!(addr = %listen_addr, "slide server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
