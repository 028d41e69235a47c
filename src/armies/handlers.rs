use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use super::dto::{CreateArmyRequest, UpdateArmyRequest};
use super::errors::ArmyError;
use super::repo_types::Army;
use crate::state::AppState;

type ApiResult<T> = Result<T, (StatusCode, String)>;

pub fn army_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/armies",
            get(list_armies).post(create_army).put(missing_id).delete(missing_id),
        )
        .route(
            "/armies/",
            get(list_armies).post(create_army).put(missing_id).delete(missing_id),
        )
        .route("/armies/:id", put(update_army).delete(delete_army))
}

#[instrument(skip(state))]
pub async fn list_armies(State(state): State<AppState>) -> ApiResult<Json<Vec<Army>>> {
    let armies = state.armies.list().await.map_err(|e| {
        error!(error = %e, "list armies failed");
        internal(e)
    })?;
    Ok(Json(armies))
}

#[instrument(skip(state, payload))]
pub async fn create_army(
    State(state): State<AppState>,
    payload: Result<Json<CreateArmyRequest>, JsonRejection>,
) -> ApiResult<Json<Army>> {
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e, "create army: bad body");
        (StatusCode::BAD_REQUEST, e.body_text())
    })?;

    let army = state.armies.create(body.into()).await.map_err(|e| {
        error!(error = %e, "create army failed");
        internal(e)
    })?;

    info!(id = army.id, user_id = army.user_id, "army created");
    Ok(Json(army))
}

#[instrument(skip(state, payload))]
pub async fn update_army(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateArmyRequest>, JsonRejection>,
) -> ApiResult<Json<Army>> {
    let id = army_id(id)?;
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e, id, "update army: bad body");
        (StatusCode::BAD_REQUEST, e.body_text())
    })?;

    match state.armies.update(id, body.into()).await {
        Ok(army) => {
            info!(id, "army updated");
            Ok(Json(army))
        }
        Err(e @ ArmyError::NotFound(_)) => {
            warn!(error = %e, id, "update army: no active row");
            Err(internal(e))
        }
        Err(e) => {
            error!(error = %e, id, "update army failed");
            Err(internal(e))
        }
    }
}

#[instrument(skip(state))]
pub async fn delete_army(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = army_id(id)?;
    state.armies.delete(id).await.map_err(|e| {
        error!(error = %e, id, "delete army failed");
        internal(e)
    })?;
    info!(id, "army deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT/DELETE on the collection path: the id segment is missing.
async fn missing_id() -> (StatusCode, String) {
    warn!("army id missing from path");
    (StatusCode::BAD_REQUEST, "army id is required".into())
}

fn army_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(e) => {
            warn!(error = %e, "invalid army id");
            Err((StatusCode::BAD_REQUEST, format!("invalid army id: {}", e.body_text())))
        }
    }
}

fn internal<E: std::error::Error>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
