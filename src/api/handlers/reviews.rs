//! Handlers for review endpoints (list, retrieve, create, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::review::{
    CreateReviewRequest, ReviewListQuery, ReviewResponse, UpdateReviewRequest,
};
use crate::application::services::{ReviewChanges, ReviewDraft};
use crate::error::AppError;
use crate::state::AppState;

/// Lists reviews, newest first.
///
/// # Endpoint
///
/// `GET /reviews` / `GET /reviews?author=<email>`
///
/// The `author` filter is an exact, case-sensitive full-string match on
/// `author_email`.
pub async fn review_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ReviewListQuery>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.review_service.list_reviews(query.author).await?;

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

/// Retrieves a single review.
///
/// # Endpoint
///
/// `GET /reviews/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no review matches `id`.
pub async fn get_review_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = state.review_service.get_review(id).await?;

    Ok(Json(ReviewResponse::from(review)))
}

/// Creates a review.
///
/// # Endpoint
///
/// `POST /reviews`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Review #2",
///   "content": "...",
///   "stars": 3,
///   "author_email": "user2@email.com",
///   "shop_link": "https://rozetka.com.ua/"
/// }
/// ```
///
/// The body validates before `shop_link` is resolved, so a malformed review
/// never creates a shop. Resolution reuses the shop for an already-seen
/// domain and creates it otherwise.
///
/// # Errors
///
/// Returns 400 Bad Request on field validation failure or an unresolvable
/// shop link.
pub async fn create_review_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    payload.validate()?;

    let draft = ReviewDraft {
        title: payload.title,
        content: payload.content,
        stars: payload.stars,
        author_email: payload.author_email,
        shop_link: payload.shop_link,
    };

    let review = state.review_service.create_review(draft).await?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}

/// Partially updates a review.
///
/// # Endpoint
///
/// `PATCH /reviews/{id}`
///
/// All fields are optional; only provided fields are changed and
/// `date_updated` is refreshed. A provided `shop_link` re-points the review
/// at the shop the link resolves to.
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure.
/// Returns 404 Not Found if the review doesn't exist.
pub async fn update_review_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    payload.validate()?;

    let changes = ReviewChanges {
        title: payload.title,
        content: payload.content,
        stars: payload.stars,
        author_email: payload.author_email,
        shop_link: payload.shop_link,
    };

    let review = state.review_service.update_review(id, changes).await?;

    Ok(Json(ReviewResponse::from(review)))
}

/// Deletes a review.
///
/// # Endpoint
///
/// `DELETE /reviews/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the review doesn't exist — deletion of an
/// unknown id is an error, not a no-op.
pub async fn delete_review_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.review_service.delete_review(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
