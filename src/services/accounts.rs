use gloo_console::error;
use gloo_net::http::Request;
use web_sys::FormData;

use super::{authorized, expect_ok};
use crate::config::api_url;
use crate::error::ApiError;
use crate::import::Bank;
use crate::models::{Account, AccountDraft, ImportOutcome};

pub async fn fetch_all() -> Result<Vec<Account>, ApiError> {
    let response = authorized(Request::get(&api_url("/accounts")))
        .send()
        .await?;
    let accounts = expect_ok(response).await?.json().await?;
    Ok(accounts)
}

pub async fn create(draft: &AccountDraft) -> Result<Account, ApiError> {
    let response = authorized(Request::post(&api_url("/accounts")))
        .json(draft)?
        .send()
        .await?;
    Ok(expect_ok(response).await?.json().await?)
}

pub async fn update(id: &str, draft: &AccountDraft) -> Result<Account, ApiError> {
    let url = api_url(&format!("/accounts/{}", id));
    let response = authorized(Request::put(&url)).json(draft)?.send().await?;
    Ok(expect_ok(response).await?.json().await?)
}

pub async fn remove(id: &str) -> Result<(), ApiError> {
    let url = api_url(&format!("/accounts/{}", id));
    let response = authorized(Request::delete(&url)).send().await?;
    expect_ok(response).await?;
    Ok(())
}

/// Uploads a bank statement for server-side parsing and persistence. The
/// backend ignores duplicates and answers with how many rows it imported.
pub async fn import_csv(file: &web_sys::File, bank: Bank) -> Result<ImportOutcome, ApiError> {
    let form = match FormData::new() {
        Ok(form) => form,
        Err(_) => {
            error!("FormData indisponível neste navegador");
            return Err(ApiError::Api {
                status: 0,
                body: "não foi possível montar o upload".to_string(),
            });
        }
    };
    let _ = form.append_with_blob("file", file);
    let _ = form.append_with_str("bank", bank.label());

    let response = authorized(Request::post(&api_url("/accounts/import")))
        .body(form)?
        .send()
        .await?;
    Ok(expect_ok(response).await?.json().await?)
}
