use super::summary::RatingSummary;
use crate::api::{reviews, users, ApiClient, ApiError, ApiResult, Transport};
use crate::models::review::{RawReview, ReviewRow, ANONYMOUS};
use crate::utils::date::display_date;
use futures::future::join_all;
use leptos::logging::{log, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedReviews {
    pub rows: Vec<ReviewRow>,
    pub summary: RatingSummary,
}

/// Fetches the reviews for `restaurant_id` and reduces them to table rows.
///
/// A rejected token yields an empty result rather than an error. Username
/// lookups run concurrently and are matched back to their review by
/// position, so a failed lookup only affects its own row.
pub async fn load_reviews<T: Transport>(
    client: &ApiClient<T>,
    restaurant_id: &str,
    token: Option<&str>,
) -> ApiResult<LoadedReviews> {
    let raw = match reviews::get_reviews(client, restaurant_id, token).await {
        Ok(raw) => raw,
        Err(ApiError::AuthFailed) => {
            warn!("[REVIEWS] Unable to fetch reviews for {}: auth failed", restaurant_id);
            return Ok(LoadedReviews::default());
        }
        Err(err) => return Err(err),
    };
    log!("[REVIEWS] Received {} reviews for {}", raw.len(), restaurant_id);

    let names = join_all(raw.iter().map(|review| display_name(client, review))).await;
    let (rows, summary) = collapse_duplicates(raw.into_iter().zip(names));
    log!(
        "[REVIEWS] {} distinct reviews for {} (reported average {:?})",
        rows.len(),
        restaurant_id,
        summary.reported()
    );

    Ok(LoadedReviews { rows, summary })
}

/// Name shown for a review's author. Anonymous reviews never reach the
/// username lookup.
pub async fn display_name<T: Transport>(client: &ApiClient<T>, review: &RawReview) -> String {
    if review.is_anonymous {
        return ANONYMOUS.to_string();
    }
    match users::resolve_username(client, &review.user_id).await {
        Ok(Some(username)) => username,
        Ok(None) => review.user_id.clone(),
        Err(err) => {
            warn!("[REVIEWS] Username lookup for {} failed: {}", review.user_id, err);
            review.user_id.clone()
        }
    }
}

/// One row per distinct description, in first-seen order. A later duplicate
/// overwrites the earlier row's fields in place. Every raw review counts
/// towards the star total.
pub fn collapse_duplicates<I>(reviews: I) -> (Vec<ReviewRow>, RatingSummary)
where
    I: IntoIterator<Item = (RawReview, String)>,
{
    let mut rows: Vec<ReviewRow> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut summary = RatingSummary::default();

    for (review, display_name) in reviews {
        summary.raw_count += 1;
        summary.raw_star_total += review.stars;

        let row = to_row(review, display_name);
        match positions.get(&row.review_text) {
            Some(&index) => rows[index] = row,
            None => {
                positions.insert(row.review_text.clone(), rows.len());
                rows.push(row);
            }
        }
    }

    summary.unique_count = rows.len();
    summary.unique_star_total = rows.iter().map(|row| row.rating).sum();
    (rows, summary)
}

fn to_row(review: RawReview, display_name: String) -> ReviewRow {
    ReviewRow {
        display_date: display_date(&review.updated_at),
        key: review.id,
        review_text: review.description,
        rating: review.stars,
        helpful_count: review.helpful,
        display_name,
        has_upvoted: false,
    }
}
