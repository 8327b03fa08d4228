use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use shared::models::board::messages::BoardMessage;
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/board", post(get_move))
}

/// Plays the computer's `O` on the submitted board. No sign-in needed.
#[tracing::instrument(skip(state, payload))]
async fn get_move(
    State(state): State<AppState>,
    payload: Result<Json<BoardMessage>, JsonRejection>,
) -> Result<Json<BoardMessage>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        error!("Rejected board request: {}", e.body_text());
        ApiError::BadRequest(e.body_text())
    })?;

    let board = state.move_service.get_move(&request.state).map_err(|e| {
        error!("Failed to make move on board {:?}: {}", request.state, e);
        ApiError::from(e)
    })?;

    debug!("Played move: {} -> {}", request.state, board);
    Ok(Json(BoardMessage::from(&board)))
}
