//! DTOs for the shop listing endpoint.

use crate::domain::entities::Shop;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /shops`.
#[derive(Debug, Deserialize, Default)]
pub struct ShopListQuery {
    /// Case-insensitive substring match on the shop's domain name.
    pub name: Option<String>,

    /// `reviews`, `-reviews`, `rate` or `-rate`; anything else keeps
    /// insertion order.
    pub order: Option<String>,
}

/// JSON representation of a shop.
#[derive(Debug, Serialize)]
pub struct ShopResponse {
    pub id: i64,
    pub name: String,
    pub domain_name: String,
    pub link: String,
}

impl From<Shop> for ShopResponse {
    fn from(shop: Shop) -> Self {
        Self {
            id: shop.id,
            name: shop.name,
            domain_name: shop.domain_name,
            link: shop.link,
        }
    }
}
