//! Move request handler and error mapping.

use super::{AppState, ErrorResponse, MoveRequest, MoveResponse};
use crate::error::EngineError;
use crate::position::Position;
use crate::search::Searcher;
use crate::types::format_move;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced to HTTP callers
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("bad request body: {0}")]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::Body(_) | ServerError::Engine(EngineError::InvalidPosition { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Engine(EngineError::GameOver(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Engine(EngineError::InvalidDepth(_)) | ServerError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "move request rejected");
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// POST handler: search the posted position and reply with the chosen move
pub(super) async fn best_move(
    State(state): State<AppState>,
    request: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ServerError> {
    let Json(request) = request?;
    info!(fen = %request.fen, "move requested");
    let options = state.options;

    // The search is CPU bound and synchronous
    let result = tokio::task::spawn_blocking(move || {
        let position = Position::from_fen(&request.fen)?;
        Searcher::new(position, options).best_move()
    })
    .await??;

    let mv = format_move(result.best_move);
    info!(
        mv = %mv,
        score = %result.score,
        nodes = result.stats.nodes,
        time_ms = result.stats.time_ms,
        "move chosen"
    );

    Ok(Json(MoveResponse { result: mv }))
}
