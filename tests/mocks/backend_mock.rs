use food_devil::api::{ApiClient, ApiError, ApiRequest, ApiResult, Method, Transport};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

/// Scripted stand-in for the REST backend. Unscripted routes answer with the
/// backend's "not found" error object, the way username lookups fail.
#[derive(Default)]
pub struct MockBackend {
    responses: HashMap<(Method, String), ApiResult<Value>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: Method, path: &str, payload: Value) -> Self {
        self.responses.insert((method, path.to_string()), Ok(payload));
        self
    }

    pub fn fail(mut self, method: Method, path: &str, error: ApiError) -> Self {
        self.responses.insert((method, path.to_string()), Err(error));
        self
    }

    pub fn username(self, identity_ref: &str, username: &str) -> Self {
        self.respond(Method::Get, &format!("/users/{}", identity_ref), json!(username))
    }

    pub fn into_client(self) -> ApiClient<MockBackend> {
        ApiClient::new(self)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

impl Transport for MockBackend {
    async fn send(&self, request: &ApiRequest) -> ApiResult<Value> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .get(&(request.method, request.path.clone()))
            .cloned()
            .unwrap_or_else(|| Ok(json!({ "message": "Not found" })))
    }
}

/// A review as the backend serializes it.
pub fn raw_review(id: &str, description: &str, stars: u32, user_id: &str, anonymous: bool) -> Value {
    json!({
        "_id": id,
        "createdAt": "2021-11-01T18:00:00.000Z",
        "description": description,
        "is_anonymous": anonymous,
        "restaurant_id": "r1",
        "stars": stars,
        "helpful": 0,
        "updatedAt": "2021-11-02T04:21:54.123Z",
        "user_id": user_id,
    })
}
