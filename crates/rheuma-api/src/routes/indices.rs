use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use rheuma_indices::catalog::{IndexSchema, IndexSummary, index_summaries};
use rheuma_indices::{ComputationResult, IndexId, RawInputs};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ModeQuery {
    mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    inputs: RawInputs,
}

pub async fn list_indices() -> Json<Vec<IndexSummary>> {
    Json(index_summaries())
}

pub async fn get_index_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> Result<Json<IndexSchema>, ApiError> {
    ensure_known(&id)?;
    let definition = state.engine.resolve(&id, query.mode.as_deref())?;
    Ok(Json(IndexSchema::from(definition)))
}

pub async fn compute(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ComputeRequest>,
) -> Result<Json<ComputationResult>, ApiError> {
    ensure_known(&id)?;
    let result = state
        .engine
        .compute(&id, request.mode.as_deref(), &request.inputs)?;
    Ok(Json(result))
}

/// Unknown ids are a 404 at this layer; the engine reports them as `unknown_mode`.
fn ensure_known(id: &str) -> Result<(), ApiError> {
    match IndexId::parse(id) {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound(format!("index not found: {id}"))),
    }
}
