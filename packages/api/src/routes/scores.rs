use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};
use shared::models::score::requests::{ScoreRequest, ScoresListRequest};
use shared::models::score::responses::{ScoreResponse, ScoresListResponse};
use tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/scores", get(list_scores).post(insert_score))
}

#[tracing::instrument(skip(state, authenticated_user, query))]
async fn list_scores(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    query: Result<Query<ScoresListRequest>, QueryRejection>,
) -> Result<Json<ScoresListResponse>, ApiError> {
    let Query(request) = query.map_err(|e| {
        error!("Rejected scores query: {}", e.body_text());
        ApiError::BadRequest(e.body_text())
    })?;
    let user_id = &authenticated_user.identity.user_id;

    let scores = state
        .score_service
        .list_for_user(&authenticated_user.identity, request.order(), request.limit())
        .await
        .map_err(|e| {
            error!("Failed to list scores for user {}: {}", user_id, e);
            ApiError::from(e)
        })?;

    debug!("Listed {} scores for user {}", scores.len(), user_id);
    Ok(Json(ScoresListResponse::from(scores)))
}

#[tracing::instrument(skip(state, authenticated_user, payload))]
async fn insert_score(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        error!("Rejected score body: {}", e.body_text());
        ApiError::BadRequest(e.body_text())
    })?;
    let user_id = &authenticated_user.identity.user_id;

    let score = state
        .score_service
        .insert(&authenticated_user.identity, &request.outcome)
        .await
        .map_err(|e| {
            error!("Failed to insert score for user {}: {}", user_id, e);
            ApiError::from(e)
        })?;

    debug!("Score {} inserted for user {}", score.id, user_id);
    Ok(Json(ScoreResponse::from(&score)))
}
