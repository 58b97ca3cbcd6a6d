//! HTTP/WebSocket API for the prize-draw server.
//!
//! The API surface is deliberately small:
//! - `GET /ws` upgrades to the real-time WebSocket protocol
//! - `GET /health` reports liveness for monitoring
//! - everything else falls back to the static presentation layer
//!
//! Built with axum for HTTP/WebSocket and tower-http for CORS and static
//! file serving. All game semantics live in the `prize_draw` room actor;
//! this layer only moves bytes between sockets and the actor's inbox.

pub mod websocket;

use std::path::Path;
use std::sync::{
    Arc,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use prize_draw::RoomHandle;
use serde_json::json;
use tower_http::{cors::CorsLayer, services::ServeDir};

/// Application state shared across all HTTP handlers and WebSocket
/// connections. Cloned per request; cheap due to the Arc wrappers.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the single room actor.
    pub room: RoomHandle,
    /// Monotonic connection id allocator. First connect wins host, so
    /// ids also record arrival order.
    pub next_conn_id: Arc<AtomicU64>,
    /// Live WebSocket connection gauge, for the health endpoint.
    pub connected: Arc<AtomicUsize>,
}

impl AppState {
    /// Create application state around a room handle.
    pub fn new(room: RoomHandle) -> Self {
        Self {
            room,
            next_conn_id: Arc::new(AtomicU64::new(1)),
            connected: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// Create the complete API router.
///
/// Requests that match no route are served from `static_dir`, where the
/// presentation layer lives.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ws", get(websocket::websocket_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/health
/// # {"status":"healthy","version":"0.1.0","connections":0,"timestamp":"..."}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "connections": state.connected.load(Ordering::Relaxed),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
