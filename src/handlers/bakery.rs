//! Bakery handlers: list, read, partial update.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::response::ok;
use crate::service::{BakeryPatch, BakeryService};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

const KIND: &str = "Bakery";

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("{} with id {} not found", KIND, id))
}

/// GET /bakeries
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bakeries = BakeryService::list(&state.pool).await?;
    Ok(ok(bakeries))
}

/// GET /bakeries/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, KIND)?;
    let bakery = BakeryService::find(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(bakery))
}

/// PATCH /bakeries/:id — only fields present in the body are changed.
/// An unknown id is a 404 whatever the body holds; body errors surface only after that.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Payload, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, KIND)?;
    if !BakeryService::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    let Payload(body) = payload?;
    let patch = BakeryPatch::from_payload(&body)?;
    let bakery = BakeryService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(bakery))
}
