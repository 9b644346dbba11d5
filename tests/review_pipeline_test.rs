use food_devil::api::{ApiError, Method};
use food_devil::models::review::ANONYMOUS;
use food_devil::review_table::load_reviews;
use futures::executor::block_on;
use leptos::logging::log;
use serde_json::json;

mod mocks;
use mocks::backend_mock::{raw_review, MockBackend};

#[test]
fn test_duplicates_collapse_in_first_seen_order() {
    log!("[TEST] Starting test_duplicates_collapse_in_first_seen_order");
    let client = MockBackend::new()
        .respond(
            Method::Get,
            "/reviews/r1",
            json!([
                raw_review("a1", "Great fries", 5, "u1", false),
                raw_review("b1", "Slow service", 2, "u2", false),
                raw_review("a2", "Great fries", 3, "u3", false),
                raw_review("c1", "Cold pizza", 1, "u1", false),
            ]),
        )
        .username("u1", "jane")
        .username("u2", "sam")
        .username("u3", "lee")
        .into_client();

    let loaded = block_on(load_reviews(&client, "r1", Some("token"))).unwrap();
    let texts: Vec<_> = loaded.rows.iter().map(|row| row.review_text.as_str()).collect();
    assert_eq!(texts, ["Great fries", "Slow service", "Cold pizza"]);

    // The later duplicate overwrites the row it collapses into.
    let fries = &loaded.rows[0];
    assert_eq!(fries.key, "a2");
    assert_eq!(fries.rating, 3.0);
    assert_eq!(fries.display_name, "lee");
    assert!(loaded.rows.iter().all(|row| !row.has_upvoted));
    log!("[TEST] Deduplication - PASSED");
}

#[test]
fn test_reported_average_divides_raw_total_by_distinct_count() {
    let client = MockBackend::new()
        .respond(
            Method::Get,
            "/reviews/r1",
            json!([
                raw_review("1", "A", 5, "u1", true),
                raw_review("2", "A", 3, "u1", true),
                raw_review("3", "B", 4, "u1", true),
            ]),
        )
        .into_client();

    let loaded = block_on(load_reviews(&client, "r1", Some("token"))).unwrap();
    assert_eq!(loaded.rows.len(), 2);
    assert_eq!((loaded.rows[0].review_text.as_str(), loaded.rows[0].rating), ("A", 3.0));
    assert_eq!((loaded.rows[1].review_text.as_str(), loaded.rows[1].rating), ("B", 4.0));

    let summary = loaded.summary;
    assert_eq!(summary.raw_star_total, 12.0);
    assert_eq!(summary.raw_count, 3);
    assert_eq!(summary.unique_count, 2);
    // Current behavior: 12 stars over 2 distinct reviews.
    assert_eq!(summary.reported(), Some(6.0));
    assert_eq!(summary.mean_over_raw(), Some(4.0));
    assert_eq!(summary.mean_over_unique(), Some(3.5));
}

#[test]
fn test_anonymous_reviews_never_expose_identity() {
    log!("[TEST] Starting test_anonymous_reviews_never_expose_identity");
    let backend = MockBackend::new()
        .respond(
            Method::Get,
            "/reviews/r1",
            json!([
                raw_review("1", "Hidden", 4, "u9", true),
                raw_review("2", "Visible", 2, "u1", false),
            ]),
        )
        .username("u9", "secret-name")
        .username("u1", "jane");
    let client = backend.into_client();

    let loaded = block_on(load_reviews(&client, "r1", None)).unwrap();
    assert_eq!(loaded.rows[0].display_name, ANONYMOUS);
    assert_eq!(loaded.rows[1].display_name, "jane");
    assert!(client.transport().requests_to("/users/u9").is_empty());
    log!("[TEST] Anonymity redaction - PASSED");
}

#[test]
fn test_failed_username_lookup_falls_back_to_identity() {
    let client = MockBackend::new()
        .respond(
            Method::Get,
            "/reviews/r1",
            json!([
                raw_review("1", "Unknown user", 4, "u404", false),
                raw_review("2", "Offline lookup", 3, "u500", false),
                raw_review("3", "Known user", 5, "u1", false),
            ]),
        )
        .fail(Method::Get, "/users/u500", ApiError::Network("connection reset".into()))
        .username("u1", "jane")
        .into_client();

    let loaded = block_on(load_reviews(&client, "r1", Some("token"))).unwrap();
    let names: Vec<_> = loaded.rows.iter().map(|row| row.display_name.as_str()).collect();
    assert_eq!(names, ["u404", "u500", "jane"]);
}

#[test]
fn test_auth_failure_loads_nothing() {
    let client = MockBackend::new()
        .respond(Method::Get, "/reviews/r1", json!({ "message": "Auth failed" }))
        .into_client();

    let loaded = block_on(load_reviews(&client, "r1", Some("expired"))).unwrap();
    assert!(loaded.rows.is_empty());
    assert_eq!(loaded.summary.reported(), None);
}

#[test]
fn test_transport_failure_is_surfaced() {
    let client = MockBackend::new()
        .fail(Method::Get, "/reviews/r1", ApiError::Network("unreachable".into()))
        .into_client();

    let err = block_on(load_reviews(&client, "r1", Some("token"))).unwrap_err();
    assert_eq!(err, ApiError::Network("unreachable".into()));
}

#[test]
fn test_unexpected_payload_is_a_decode_error() {
    let client = MockBackend::new()
        .respond(Method::Get, "/reviews/r1", json!({ "message": "Restaurant not found" }))
        .into_client();

    let err = block_on(load_reviews(&client, "r1", Some("token"))).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn test_reviews_request_carries_token_and_formats_dates() {
    let backend = MockBackend::new().respond(
        Method::Get,
        "/reviews/r1",
        json!([raw_review("1", "Fine", 3, "u1", false)]),
    );
    let client = backend.into_client();

    let loaded = block_on(load_reviews(&client, "r1", Some("abc123"))).unwrap();
    assert_eq!(loaded.rows[0].display_date, "2021-11-02");

    let requests = client.transport().requests_to("/reviews/r1");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert!(requests[0]
        .headers()
        .contains(&("Authorization", "Bearer abc123".to_string())));

    // Username lookups are unauthenticated.
    let lookups = client.transport().requests_to("/users/u1");
    assert_eq!(lookups.len(), 1);
    assert_eq!(lookups[0].token, None);
}

#[test]
fn test_loose_numeric_fields_do_not_drop_the_list() {
    log!("[TEST] Starting test_loose_numeric_fields_do_not_drop_the_list");
    let mut loose = raw_review("2", "Half a star short", 0, "u1", true);
    loose["stars"] = json!(3.5);
    loose["helpful"] = json!(null);
    let client = MockBackend::new()
        .respond(
            Method::Get,
            "/reviews/r1",
            json!([raw_review("1", "Solid lunch", 4, "u1", true), loose]),
        )
        .into_client();

    let loaded = block_on(load_reviews(&client, "r1", Some("token"))).unwrap();
    assert_eq!(loaded.rows.len(), 2);
    assert_eq!(loaded.rows[0].rating, 4.0);
    assert_eq!(loaded.rows[1].rating, 3.5);
    assert_eq!(loaded.rows[1].helpful_count, 0);
    assert_eq!(loaded.summary.reported(), Some(3.75));
    log!("[TEST] Loose numeric fields - PASSED");
}
