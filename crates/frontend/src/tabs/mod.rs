//! Tab components.

mod balance;
mod deposit;
mod history;
mod referral;

pub use balance::BalanceTab;
pub use deposit::DepositTab;
pub use history::HistoryTab;
pub use referral::ReferralTab;
