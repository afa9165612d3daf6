//! Baked-good handlers: price-ordered listing, most expensive, create, delete.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::response::{created, message, ok};
use crate::service::{BakedGoodService, NewBakedGood};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

const KIND: &str = "BakedGood";

/// GET /baked_goods/by_price
pub async fn by_price(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let goods = BakedGoodService::list_by_price(&state.pool).await?;
    Ok(ok(goods))
}

/// GET /baked_goods/most_expensive
pub async fn most_expensive(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let good = BakedGoodService::most_expensive(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("No baked goods found".into()))?;
    Ok(ok(good))
}

/// POST /baked_goods — validates fully before touching storage; `bakery_id` is not checked
/// against existing bakeries.
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let new = NewBakedGood::from_payload(&body)?;
    let good = BakedGoodService::create(&state.pool, &new).await?;
    Ok(created(good))
}

/// DELETE /baked_goods/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, KIND)?;
    if !BakedGoodService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("{} with id {} not found", KIND, id)));
    }
    Ok(message(format!("{} {} successfully deleted", KIND, id)))
}
