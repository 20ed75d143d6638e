//! API route configuration.

use crate::api::handlers::{
    create_review_handler, delete_review_handler, get_review_handler, review_list_handler,
    shop_list_handler, update_review_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All catalog routes.
///
/// # Endpoints
///
/// - `GET    /shops`          - List shops (filterable, orderable)
/// - `GET    /reviews`        - List reviews, newest first (author filter)
/// - `POST   /reviews`        - Create a review, resolving its shop link
/// - `GET    /reviews/{id}`   - Retrieve a review
/// - `PATCH  /reviews/{id}`   - Partially update a review
/// - `DELETE /reviews/{id}`   - Delete a review
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shops", get(shop_list_handler))
        .route(
            "/reviews",
            get(review_list_handler).post(create_review_handler),
        )
        .route(
            "/reviews/{id}",
            get(get_review_handler)
                .patch(update_review_handler)
                .delete(delete_review_handler),
        )
}
