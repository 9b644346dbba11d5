//! View model behind the restaurant review table.
//!
//! [`load_reviews`] turns the backend's raw reviews into one row per
//! distinct review text plus a [`RatingSummary`]. Everything after the load
//! (search, sort, paging, upvotes) is a pure transition on
//! [`ReviewTableState`] and never goes back to the network, except for the
//! upvote request a transition hands back to the caller.

mod load;
mod state;
mod summary;

pub use load::{collapse_duplicates, display_name, load_reviews, LoadedReviews};
pub use state::{ReviewTableState, UpvoteRequest};
pub use summary::{rating_headline, RatingSummary};
