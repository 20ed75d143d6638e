//! Ordering policies for shop and review listings.
//!
//! The `order` query parameter is mapped onto a fixed enumeration instead of
//! being spliced into the query as a string. Each variant corresponds to a
//! named ORDER BY clause in the repository layer.

/// Requested ordering for shop listings.
///
/// Parsed from the `order` query parameter. Anything unrecognized, including
/// an absent or empty parameter, falls back to [`ShopOrder::Unordered`]
/// (natural insertion order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopOrder {
    /// Ascending by count of associated reviews; shops with zero reviews first.
    ReviewsAsc,
    /// Descending by count of associated reviews.
    ReviewsDesc,
    /// Ascending by mean star rating across associated reviews.
    RatingAsc,
    /// Descending by mean star rating.
    RatingDesc,
    /// Natural insertion order.
    #[default]
    Unordered,
}

impl ShopOrder {
    /// Maps the raw `order` query parameter onto an ordering variant.
    ///
    /// `-rate` sorts descending by rating. The original service this replaces
    /// compared the descending-rate branch against the literal `-order` and
    /// silently fell through to the unordered default; that check was a typo
    /// and is not reproduced here.
    pub fn parse(param: Option<&str>) -> Self {
        match param {
            Some("reviews") => Self::ReviewsAsc,
            Some("-reviews") => Self::ReviewsDesc,
            Some("rate") => Self::RatingAsc,
            Some("-rate") => Self::RatingDesc,
            _ => Self::Unordered,
        }
    }
}

/// Ordering policy for review listings.
///
/// The listing endpoint exposes no ordering parameter; the default policy is
/// explicit rather than baked into a handler branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewOrder {
    /// Descending creation timestamp, newest review first.
    #[default]
    NewestFirst,
}
