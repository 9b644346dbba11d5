use super::{routes, to_body, ApiClient, ApiError, ApiResult, Method, Transport};
use crate::models::user::{Credentials, Session};
use serde_json::Value;

/// Looks up the username for an identity reference. The backend answers
/// with a bare JSON string when it knows the user and an error object
/// otherwise, which maps to `None`.
pub async fn resolve_username<T: Transport>(
    client: &ApiClient<T>,
    identity_ref: &str,
) -> ApiResult<Option<String>> {
    let payload = client
        .request(&routes::user(identity_ref), Method::Get, None, None)
        .await?;
    Ok(match payload {
        Value::String(username) => Some(username),
        _ => None,
    })
}

pub async fn login<T: Transport>(client: &ApiClient<T>, credentials: &Credentials) -> ApiResult<Session> {
    authenticate(client, routes::LOGIN, credentials).await
}

pub async fn signup<T: Transport>(client: &ApiClient<T>, credentials: &Credentials) -> ApiResult<Session> {
    authenticate(client, routes::SIGNUP, credentials).await
}

async fn authenticate<T: Transport>(
    client: &ApiClient<T>,
    path: &str,
    credentials: &Credentials,
) -> ApiResult<Session> {
    let payload = client
        .request(path, Method::Post, None, Some(to_body(credentials)?))
        .await?;
    let session: Session =
        serde_json::from_value(payload).map_err(|err| ApiError::Decode(err.to_string()))?;
    // Any other error envelope decodes to a session without a token.
    if session.logged_in() {
        Ok(session)
    } else {
        Err(ApiError::AuthFailed)
    }
}
