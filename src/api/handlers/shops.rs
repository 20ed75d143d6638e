//! Handler for the shop listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::shop::{ShopListQuery, ShopResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists shops, filtered and ordered.
///
/// # Endpoint
///
/// `GET /shops?name=<substr>&order=<reviews|-reviews|rate|-rate>`
///
/// - `name` filters case-insensitively on the shop's domain name.
/// - `order=reviews` / `order=-reviews` sorts by review count.
/// - `order=rate` / `order=-rate` sorts by mean star rating; shops without
///   reviews have no mean and sort per the store's null placement.
/// - Any other (or absent) `order` keeps insertion order.
pub async fn shop_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ShopListQuery>,
) -> Result<Json<Vec<ShopResponse>>, AppError> {
    let shops = state.shop_service.list_shops(query.name, query.order).await?;

    Ok(Json(shops.into_iter().map(ShopResponse::from).collect()))
}
