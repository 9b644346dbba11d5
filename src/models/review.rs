// src/models/review.rs
use crate::utils::sort::{SortValue, Sortable};
use serde::{Deserialize, Deserializer, Serialize};

/// Display name shown instead of the reviewer for anonymous reviews.
pub const ANONYMOUS: &str = "Anonymous";

/// A review exactly as the backend returns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawReview {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub stars: f64, // 1-5, not validated
    #[serde(default, deserialize_with = "count_or_zero")]
    pub helpful: u32,
    #[serde(default, alias = "isAnonymous")]
    pub is_anonymous: bool,
    #[serde(default, alias = "restaurantId")]
    pub restaurant_id: String,
    #[serde(default, alias = "userId")]
    pub user_id: String, // identity reference, resolved to a username for display
    #[serde(rename = "updatedAt", alias = "updated_at", default)]
    pub updated_at: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One table row per distinct review text.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewRow {
    pub key: String,         // id of the raw review the row's fields came from
    pub review_text: String,
    pub rating: f64,
    pub helpful_count: u32,
    pub display_name: String,
    pub display_date: String,
    pub has_upvoted: bool,   // client-side only
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewColumn {
    Review,
    Rating,
    Helpful,
    Username,
    Date,
    Upvote,
}

impl ReviewColumn {
    pub const ALL: [ReviewColumn; 6] = [
        ReviewColumn::Review,
        ReviewColumn::Rating,
        ReviewColumn::Helpful,
        ReviewColumn::Username,
        ReviewColumn::Date,
        ReviewColumn::Upvote,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReviewColumn::Review => "Review",
            ReviewColumn::Rating => "Rating",
            ReviewColumn::Helpful => "Helpful",
            ReviewColumn::Username => "Username",
            ReviewColumn::Date => "Date Posted",
            ReviewColumn::Upvote => "",
        }
    }

    pub fn sortable(&self) -> bool {
        !matches!(self, ReviewColumn::Upvote)
    }

    pub fn align_right(&self) -> bool {
        matches!(
            self,
            ReviewColumn::Username | ReviewColumn::Date | ReviewColumn::Upvote
        )
    }
}

impl Sortable for ReviewRow {
    type Column = ReviewColumn;

    fn sort_value(&self, column: ReviewColumn) -> SortValue {
        match column {
            ReviewColumn::Review => SortValue::Text(self.review_text.clone()),
            ReviewColumn::Rating => SortValue::Number(self.rating),
            ReviewColumn::Helpful => SortValue::Number(self.helpful_count.into()),
            ReviewColumn::Username => SortValue::Text(self.display_name.clone()),
            ReviewColumn::Date => SortValue::Text(self.display_date.clone()),
            ReviewColumn::Upvote => SortValue::Number(u8::from(self.has_upvoted).into()),
        }
    }
}

/// `null` reads as zero so one sloppy record cannot sink the whole list.
fn number_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Non-negative count; `null`, negatives and fractions are clamped/truncated.
fn count_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let count = number_or_zero(deserializer)?;
    Ok(count.max(0.0).min(f64::from(u32::MAX)) as u32)
}

/// Body for `POST /reviews/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub user_id: String,
    pub restaurant_id: String,
    pub description: String,
    pub stars: u32,
    pub is_anonymous: bool,
}

/// Body for `PATCH /reviews/<id>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewEdit {
    pub description: String,
    pub stars: u32,
    pub is_anonymous: bool,
}
