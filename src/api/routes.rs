//! Backend route paths, relative to [`crate::config::ApiConfig::base_url`].

use urlencoding::encode;

pub const FOODS: &str = "/foods";
pub const SIGNUP: &str = "/users/signup";
pub const LOGIN: &str = "/users/login";
pub const MEALS: &str = "/meals/";
pub const RESTAURANTS: &str = "/restaurants";
pub const REVIEWS: &str = "/reviews/";

pub fn food(id: &str) -> String {
    format!("/foods/{}", encode(id))
}

pub fn meal(id: &str) -> String {
    format!("/meals/{}", encode(id))
}

pub fn restaurant(id: &str) -> String {
    format!("/restaurants/{}", encode(id))
}

/// Reviews for a restaurant on GET; a single review on PATCH/DELETE.
pub fn review(id: &str) -> String {
    format!("/reviews/{}", encode(id))
}

pub fn user(identity_ref: &str) -> String {
    format!("/users/{}", encode(identity_ref))
}
