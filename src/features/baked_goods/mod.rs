pub mod model;
pub mod repo;

use crate::AppState;
use crate::error::ApiError;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use model::{BakedGood, CreateBakedGoodForm};
use serde_json::{Value, json};

pub fn baked_goods_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_baked_good_handler))
        .route("/by_price", get(goods_by_price_handler))
        .route("/most_expensive", get(most_expensive_handler))
        .route("/{id}", delete(delete_baked_good_handler))
}

async fn goods_by_price_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BakedGood>>, ApiError> {
    let goods = repo::get_goods_by_price_desc(&state.pool).await?;

    Ok(Json(goods))
}

async fn most_expensive_handler(State(state): State<AppState>) -> Result<Json<BakedGood>, ApiError> {
    let good = repo::get_most_expensive_good(&state.pool)
        .await?
        .ok_or(ApiError::NotFound("No baked goods found"))?;

    Ok(Json(good))
}

async fn create_baked_good_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateBakedGoodForm>,
) -> Result<(StatusCode, Json<BakedGood>), ApiError> {
    // all three fields must be present and non-empty before anything is parsed
    let (name, price_raw, bakery_id_raw) = match (
        non_empty(form.name),
        non_empty(form.price),
        non_empty(form.bakery_id),
    ) {
        (Some(name), Some(price), Some(bakery_id)) => (name, price, bakery_id),
        _ => return Err(ApiError::BadRequest("Missing required data")),
    };

    let price = price_raw
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest("Invalid numeric data"))?;
    let bakery_id = bakery_id_raw
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Invalid numeric data"))?;

    // note: bakery_id is taken at face value, nothing verifies the bakery exists
    let good = repo::insert_baked_good(&state.pool, &name, price, bakery_id).await?;

    Ok((StatusCode::CREATED, Json(good)))
}

async fn delete_baked_good_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let good = repo::get_good_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Baked good not found"))?;

    repo::delete_baked_good(&state.pool, good.id).await?;

    Ok(Json(json!({ "message": "Baked good successfully deleted" })))
}

// a form field counts as supplied only when it is present and non-empty
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
