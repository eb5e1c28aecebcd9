use gloo_console::error;
use gloo_net::http::Request;

use super::{authorized, expect_ok};
use crate::config::api_url;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginCredentials, RegisterCredentials, User};
use crate::storage;

pub async fn login(credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&api_url("/auth/login"))
        .json(credentials)?
        .send()
        .await?;
    let auth: AuthResponse = expect_ok(response).await?.json().await?;
    storage::set_token(&auth.token);
    Ok(auth)
}

pub async fn register(credentials: &RegisterCredentials) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&api_url("/user"))
        .json(credentials)?
        .send()
        .await?;
    let auth: AuthResponse = expect_ok(response).await?.json().await?;
    storage::set_token(&auth.token);
    Ok(auth)
}

/// Validates the stored token against the backend.
pub async fn current_user() -> Result<User, ApiError> {
    let response = authorized(Request::get(&api_url("/auth/me")))
        .send()
        .await?;
    match expect_ok(response).await {
        Ok(ok) => Ok(ok.json().await?),
        Err(err) => {
            if err.is_unauthorized() {
                storage::clear_token();
            } else {
                error!(format!("falha ao validar sessão: {}", err));
            }
            Err(err)
        }
    }
}

/// Logout is local: the backend keeps no session state for bearer tokens.
pub fn logout() {
    storage::clear_token();
}
