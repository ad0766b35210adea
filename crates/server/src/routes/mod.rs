//! API route handlers.

mod balance;
mod deposit;
mod operations;
mod referral;

pub use balance::*;
pub use deposit::*;
pub use operations::*;
pub use referral::*;

use serde::Deserialize;

/// Query parameters carrying the caller's user identifier.
///
/// The identifier is opaque and may be empty; the webview sends whatever the
/// hosting page supplied, without a guard.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub user_id: String,
}
