//! HTTP front end.
//!
//! One endpoint: POST a FEN, get back the engine's move in coordinate
//! notation. Any origin may call it.

mod handler;

pub use handler::ServerError;

use crate::search::SearchOptions;
use axum::{routing::post, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

/// Route of the move endpoint
pub const MOVE_ROUTE: &str = "/blunder_dodger_move";

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub fen: String,
}

/// Response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "Result")]
    pub result: String,
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Shared handler state; every request builds its own position and searcher
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub options: SearchOptions,
}

pub fn router(options: SearchOptions) -> Router {
    Router::new()
        .route(MOVE_ROUTE, post(handler::best_move))
        .layer(CorsLayer::permissive())
        .with_state(AppState { options })
}
