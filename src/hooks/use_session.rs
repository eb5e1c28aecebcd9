use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{AuthResponse, User};
use crate::services::auth;
use crate::storage;

#[derive(Clone, Copy, PartialEq)]
pub enum SessionStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub status: UseStateHandle<SessionStatus>,
    pub user: UseStateHandle<Option<User>>,
}

impl SessionHandle {
    pub fn sign_in(&self, auth: AuthResponse) {
        self.user.set(Some(auth.user));
        self.status.set(SessionStatus::Authenticated);
    }

    pub fn sign_out(&self) {
        auth::logout();
        self.user.set(None);
        self.status.set(SessionStatus::Unauthenticated);
    }
}

/// Restores the session on startup: a stored token is only trusted after
/// the backend confirms it still maps to a user.
#[hook]
pub fn use_session() -> SessionHandle {
    let status = use_state(|| SessionStatus::Checking);
    let user = use_state(|| None::<User>);

    {
        let status = status.clone();
        let user = user.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if storage::token().is_none() {
                        status.set(SessionStatus::Unauthenticated);
                        return;
                    }
                    match auth::current_user().await {
                        Ok(current) => {
                            user.set(Some(current));
                            status.set(SessionStatus::Authenticated);
                        }
                        Err(_) => {
                            storage::clear_token();
                            status.set(SessionStatus::Unauthenticated);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    SessionHandle { status, user }
}
