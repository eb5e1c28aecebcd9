pub mod accounts;
pub mod auth;

use gloo_net::http::{RequestBuilder, Response};

use crate::error::ApiError;
use crate::storage;

/// Attaches the stored bearer token, when there is one.
pub(crate) fn authorized(request: RequestBuilder) -> RequestBuilder {
    match storage::token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Maps non-2xx responses into `ApiError::Api`, keeping the backend's body
/// so callers can show it.
pub(crate) async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Api { status, body })
}
