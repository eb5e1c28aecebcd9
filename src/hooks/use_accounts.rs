use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::ApiError;
use crate::models::{Account, AccountDraft};
use crate::services::accounts;

/// Cached account list plus API-first mutations: the backend is called
/// first and local state only changes on success.
#[derive(Clone, PartialEq)]
pub struct AccountsHandle {
    pub accounts: UseStateHandle<Vec<Account>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
}

impl AccountsHandle {
    pub fn refresh(&self) {
        let handle = self.clone();
        handle.loading.set(true);
        spawn_local(async move {
            match accounts::fetch_all().await {
                Ok(list) => {
                    handle.accounts.set(list);
                    handle.error.set(None);
                }
                Err(err) => {
                    error!(format!("falha ao buscar contas: {}", err));
                    handle
                        .error
                        .set(Some("Não foi possível carregar as contas.".to_string()));
                }
            }
            handle.loading.set(false);
        });
    }

    pub async fn create(&self, draft: AccountDraft) -> Result<(), ApiError> {
        let created = accounts::create(&draft).await?;
        let mut next = (*self.accounts).clone();
        next.push(created);
        self.accounts.set(next);
        Ok(())
    }

    pub async fn update(&self, id: &str, draft: AccountDraft) -> Result<(), ApiError> {
        let updated = accounts::update(id, &draft).await?;
        let next = (*self.accounts)
            .iter()
            .map(|account| {
                if account.id == id {
                    updated.clone()
                } else {
                    account.clone()
                }
            })
            .collect();
        self.accounts.set(next);
        Ok(())
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        accounts::remove(id).await?;
        let next = (*self.accounts)
            .iter()
            .filter(|account| account.id != id)
            .cloned()
            .collect();
        self.accounts.set(next);
        Ok(())
    }
}

#[hook]
pub fn use_accounts() -> AccountsHandle {
    let handle = AccountsHandle {
        accounts: use_state(Vec::new),
        loading: use_state(|| true),
        error: use_state(|| None),
    };

    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                handle.refresh();
                || ()
            },
            (),
        );
    }

    handle
}
