use crate::config::ApiConfig;
use gloo_net::http::Request;
use leptos::logging::{log, warn};
use serde::Serialize;
use serde_json::Value;
use web_sys::AbortSignal;

pub mod reviews;
pub mod routes;
pub mod users;

/// `message` the backend embeds in a success-shaped payload when the bearer
/// token is missing or rejected.
pub const AUTH_FAILED: &str = "Auth failed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("response was not valid JSON: {0}")]
    Decode(String),
    #[error("request body could not be serialized: {0}")]
    Serialize(String),
    #[error("backend rejected the credentials")]
    AuthFailed,
    #[error("request cancelled")]
    Cancelled,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A single backend call, independent of how it is put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub token: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            token: None,
            body: None,
        }
    }

    /// An empty token counts as logged out.
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }

    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(token) = &self.token {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        headers
    }

    pub fn payload(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }
}

/// Puts an [`ApiRequest`] on the wire and hands back the parsed JSON body,
/// whatever its shape.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> ApiResult<Value>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ApiConfig,
    abort_signal: Option<AbortSignal>,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            abort_signal: None,
        }
    }

    fn was_aborted(&self) -> bool {
        self.abort_signal.as_ref().is_some_and(AbortSignal::aborted)
    }

    fn transport_error(&self, err: gloo_net::Error) -> ApiError {
        if self.was_aborted() {
            ApiError::Cancelled
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> ApiResult<Value> {
        let url = self.config.url_for(&request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in request.headers() {
            builder = builder.header(name, &value);
        }
        builder = builder.abort_signal(self.abort_signal.as_ref());

        let sent = match request.payload() {
            Some(payload) => {
                let request = builder
                    .body(payload)
                    .map_err(|err| ApiError::Serialize(err.to_string()))?;
                request.send().await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|err| self.transport_error(err))?;

        response.json::<Value>().await.map_err(|err| {
            if self.was_aborted() {
                ApiError::Cancelled
            } else {
                ApiError::Decode(err.to_string())
            }
        })
    }
}

/// Entry point every feature uses to reach the backend.
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: ApiConfig) -> Self {
        Self::new(HttpTransport::new(config))
    }

    pub fn from_build_env() -> Self {
        Self::from_config(ApiConfig::from_build_env())
    }

    /// Ties every request made through this client to `signal`, so aborting
    /// the owning controller cancels anything still in flight.
    pub fn with_abort_signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.transport.abort_signal = signal;
        self
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issues one JSON request. Sends `Authorization: Bearer <token>` when a
    /// token is given and serializes `body` when present. No retries.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        token: Option<&str>,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        let request = ApiRequest::new(method, path)
            .with_token(token)
            .with_body(body);
        log!("[API] {} {}", method.as_str(), path);

        let payload = self.transport.send(&request).await.map_err(|err| {
            if err != ApiError::Cancelled {
                warn!("[API] {} {} failed: {}", method.as_str(), path, err);
            }
            err
        })?;
        classify(payload)
    }
}

pub fn is_auth_failure(payload: &Value) -> bool {
    payload.get("message").and_then(Value::as_str) == Some(AUTH_FAILED)
}

/// Turns the backend's sentinel envelope into an explicit error.
pub fn classify(payload: Value) -> ApiResult<Value> {
    if is_auth_failure(&payload) {
        Err(ApiError::AuthFailed)
    } else {
        Ok(payload)
    }
}

pub fn to_body<B: Serialize>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|err| ApiError::Serialize(err.to_string()))
}
