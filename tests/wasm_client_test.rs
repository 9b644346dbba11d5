#![cfg(target_arch = "wasm32")]

use food_devil::api::{ApiRequest, Method};
use food_devil::config::ApiConfig;
use food_devil::utils::date::display_date;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_request_headers_in_browser() {
    let request = ApiRequest::new(Method::Get, "/reviews/r1").with_token(Some("tok"));
    let config = ApiConfig::with_base_url("https://food-devil-backend.herokuapp.com/");
    assert_eq!(
        config.url_for(&request.path),
        "https://food-devil-backend.herokuapp.com/reviews/r1"
    );
    assert!(request
        .headers()
        .contains(&("Authorization", "Bearer tok".to_string())));
}

#[wasm_bindgen_test]
fn test_display_date_in_browser() {
    assert_eq!(display_date("2021-11-02T04:21:54.123Z"), "2021-11-02");
}
