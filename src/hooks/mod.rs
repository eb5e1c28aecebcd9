mod use_accounts;
mod use_session;

pub use use_accounts::{use_accounts, AccountsHandle};
pub use use_session::{use_session, SessionHandle, SessionStatus};
