//! Shop resolution from submitted review links.

use std::sync::Arc;

use crate::domain::entities::NewShop;
use crate::domain::repositories::ShopRepository;
use crate::error::AppError;
use crate::utils::registrable_domain::registrable_name;
use serde_json::json;

/// Resolves a submitted shop URL to a shop identifier.
///
/// The registrable name of the link's host is the shop identity: the first
/// review for an unseen domain creates the shop (display name is the
/// capitalized domain, `link` is the submitted URL), every later review for
/// the same domain reuses it. Callers only ever see the resolved id.
pub struct ShopResolver<S: ShopRepository> {
    shop_repository: Arc<S>,
}

impl<S: ShopRepository> ShopResolver<S> {
    /// Creates a new shop resolver.
    pub fn new(shop_repository: Arc<S>) -> Self {
        Self { shop_repository }
    }

    /// Resolves `link` to a shop id, creating the shop if needed.
    ///
    /// The get-or-create is a single atomic statement in the repository, so
    /// concurrent resolution of the same new domain yields one shop row and
    /// never surfaces a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the link is malformed, has no
    /// host, or its host has no registrable name.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, link: &str) -> Result<i64, AppError> {
        let domain = registrable_name(link).map_err(|e| {
            AppError::bad_request(
                "Invalid shop link",
                json!({ "shop_link": link, "reason": e.to_string() }),
            )
        })?;

        let new_shop = NewShop {
            name: capitalize(&domain),
            domain_name: domain,
            link: link.to_string(),
        };

        let shop = self.shop_repository.find_or_create(new_shop).await?;

        Ok(shop.id)
    }
}

/// Uppercases the first character: `foxtrot` → `Foxtrot`.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
