use super::{routes, to_body, ApiClient, ApiError, ApiResult, Method, Transport};
use crate::models::review::{NewReview, RawReview, ReviewEdit};
use serde_json::{json, Value};

pub async fn get_reviews<T: Transport>(
    client: &ApiClient<T>,
    restaurant_id: &str,
    token: Option<&str>,
) -> ApiResult<Vec<RawReview>> {
    let payload = client
        .request(&routes::review(restaurant_id), Method::Get, token, None)
        .await?;
    serde_json::from_value(payload).map_err(|err| ApiError::Decode(err.to_string()))
}

pub async fn post_review<T: Transport>(
    client: &ApiClient<T>,
    review: &NewReview,
    token: Option<&str>,
) -> ApiResult<Value> {
    client
        .request(routes::REVIEWS, Method::Post, token, Some(to_body(review)?))
        .await
}

pub async fn patch_review<T: Transport>(
    client: &ApiClient<T>,
    review_id: &str,
    edit: &ReviewEdit,
    token: Option<&str>,
) -> ApiResult<Value> {
    client
        .request(&routes::review(review_id), Method::Patch, token, Some(to_body(edit)?))
        .await
}

pub async fn delete_review<T: Transport>(
    client: &ApiClient<T>,
    review_id: &str,
    token: Option<&str>,
) -> ApiResult<Value> {
    client
        .request(&routes::review(review_id), Method::Delete, token, None)
        .await
}

/// Marks a review as helpful. Callers fire this and move on; the table has
/// already updated itself.
pub async fn upvote_review<T: Transport>(
    client: &ApiClient<T>,
    review_id: &str,
    token: Option<&str>,
) -> ApiResult<Value> {
    client
        .request(
            &routes::review(review_id),
            Method::Patch,
            token,
            Some(json!({ "upvote": true })),
        )
        .await
}
