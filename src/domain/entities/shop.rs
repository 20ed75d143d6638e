//! Shop entity representing a reviewed retailer.

/// A retailer identified by its registrable domain name.
///
/// `domain_name` is the deduplication key for shop resolution: the first
/// review submitted for an unseen domain creates the shop, and every later
/// review for the same domain reuses it. `link` keeps the URL from that
/// first submission and is never overwritten.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    pub domain_name: String,
    pub link: String,
}

impl Shop {
    /// Creates a new Shop instance.
    pub fn new(id: i64, name: String, domain_name: String, link: String) -> Self {
        Self {
            id,
            name,
            domain_name,
            link,
        }
    }
}

/// Input data for creating a new shop.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShop {
    pub name: String,
    pub domain_name: String,
    pub link: String,
}
