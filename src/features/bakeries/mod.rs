pub mod model;
pub mod repo;

use crate::AppState;
use crate::error::ApiError;
use crate::features::baked_goods::model::BakedGood;
use crate::features::baked_goods::repo as baked_goods_repo;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    routing::get,
};
use model::{Bakery, JsonBakery, UpdateBakeryForm};
use std::collections::HashMap;

pub fn bakeries_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bakeries_handler))
        .route(
            "/{id}",
            get(get_bakery_handler).patch(update_bakery_handler),
        )
}

async fn list_bakeries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonBakery>>, ApiError> {
    let bakeries = repo::get_all_bakeries(&state.pool).await?;

    // one table-wide fetch instead of a goods query per bakery
    let all_goods = baked_goods_repo::get_all_goods(&state.pool).await?;
    let mut grouped = goods_by_owner(all_goods);

    let json_bakeries = bakeries
        .iter()
        .map(|bakery| bakery_to_json(bakery, grouped.remove(&bakery.id).unwrap_or_default()))
        .collect();

    Ok(Json(json_bakeries))
}

async fn get_bakery_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JsonBakery>, ApiError> {
    let bakery = repo::get_bakery_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Bakery not found"))?;

    let goods = baked_goods_repo::get_goods_for_bakery(&state.pool, bakery.id).await?;

    Ok(Json(bakery_to_json(&bakery, goods)))
}

async fn update_bakery_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UpdateBakeryForm>,
) -> Result<Json<JsonBakery>, ApiError> {
    let mut bakery = repo::get_bakery_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Bakery not found"))?;

    // an absent or empty name writes nothing, the request still succeeds
    if let Some(name) = form.name.filter(|n| !n.is_empty()) {
        repo::update_bakery_name(&state.pool, bakery.id, &name).await?;
        bakery.name = name;
    }

    let goods = baked_goods_repo::get_goods_for_bakery(&state.pool, bakery.id).await?;

    Ok(Json(bakery_to_json(&bakery, goods)))
}

pub fn bakery_to_json(bakery: &Bakery, baked_goods: Vec<BakedGood>) -> JsonBakery {
    JsonBakery {
        id: bakery.id,
        name: bakery.name.to_owned(),
        baked_goods,
    }
}

pub fn goods_by_owner(goods: Vec<BakedGood>) -> HashMap<i64, Vec<BakedGood>> {
    let mut grouped: HashMap<i64, Vec<BakedGood>> = HashMap::new();
    for good in goods {
        grouped.entry(good.bakery_id).or_default().push(good);
    }
    grouped
}
