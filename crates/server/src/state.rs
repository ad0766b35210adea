//! Application state for the dashboard API.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use web_types::{
    BalanceInfo, IssuedLabel, OperationRecord, OperationsHistory, PaymentMethod, ReferralInfo,
};

use crate::config::Config;
use crate::error::ServerError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

/// Per-user ledger record held in memory.
#[derive(Debug, Default)]
struct Account {
    balance: f64,
    daily_income: f64,
    invited: u32,
    earned: f64,
    deposits: Vec<OperationRecord>,
    withdrawals: Vec<OperationRecord>,
    label_seq: u64,
}

impl AppState {
    /// Create a new app state with the given config and no accounts.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Current balance snapshot. Unknown users read as zero.
    pub async fn balance(&self, user_id: &str) -> BalanceInfo {
        let accounts = self.accounts.read().await;
        let account = accounts.get(user_id);

        BalanceInfo {
            balance: account.map(|a| a.balance).unwrap_or_default(),
            daily_income: account.map(|a| a.daily_income).unwrap_or_default(),
        }
    }

    /// Referral link and invite statistics for the user.
    pub async fn referral_info(&self, user_id: &str) -> ReferralInfo {
        let accounts = self.accounts.read().await;
        let account = accounts.get(user_id);

        ReferralInfo {
            link: format!(
                "https://t.me/{}?start={}",
                self.config.bot_username, user_id
            ),
            count: account.map(|a| a.invited).unwrap_or_default(),
            earned: account.map(|a| a.earned).unwrap_or_default(),
        }
    }

    /// Deposit and withdrawal history in insertion order.
    pub async fn operations(&self, user_id: &str) -> OperationsHistory {
        let accounts = self.accounts.read().await;

        match accounts.get(user_id) {
            Some(account) => OperationsHistory {
                deposits: account.deposits.clone(),
                withdrawals: account.withdrawals.clone(),
            },
            None => OperationsHistory::default(),
        }
    }

    /// Issue a deposit label and record the pending deposit.
    ///
    /// Labels are sequential per user so incoming transfers can be attributed
    /// without an idempotency key; repeated requests issue fresh labels.
    pub async fn issue_label(
        &self,
        user_id: &str,
        method: PaymentMethod,
        amount: &str,
    ) -> Result<IssuedLabel, ServerError> {
        let parsed: f64 = amount
            .trim()
            .parse()
            .map_err(|_| ServerError::InvalidAmount)?;
        if !parsed.is_finite() || parsed <= 0.0 {
            return Err(ServerError::InvalidAmount);
        }
        if parsed < self.config.min_deposit {
            return Err(ServerError::BelowMinDeposit(self.config.min_deposit));
        }

        let address = match method {
            PaymentMethod::Ton => &self.config.ton_wallet,
            PaymentMethod::Usdt => &self.config.usdt_wallet,
        };
        if address.is_empty() {
            return Err(ServerError::WalletNotConfigured(method.as_str()));
        }
        let address = address.clone();

        let mut accounts = self.accounts.write().await;
        let account = accounts.entry(user_id.to_string()).or_default();
        account.label_seq += 1;
        let label = format!("dep-{}-{}", user_id, account.label_seq);
        account.deposits.push(OperationRecord {
            amount: parsed,
            currency: method.as_str().to_string(),
        });

        Ok(IssuedLabel { address, label })
    }
}

#[cfg(test)]
impl AppState {
    /// Seed an account's scalar fields for tests.
    pub(crate) async fn seed_account(
        &self,
        user_id: &str,
        balance: f64,
        daily_income: f64,
        invited: u32,
        earned: f64,
    ) {
        let mut accounts = self.accounts.write().await;
        let account = accounts.entry(user_id.to_string()).or_default();
        account.balance = balance;
        account.daily_income = daily_income;
        account.invited = invited;
        account.earned = earned;
    }

    /// Seed an account's operation sequences for tests.
    pub(crate) async fn seed_operations(
        &self,
        user_id: &str,
        deposits: Vec<OperationRecord>,
        withdrawals: Vec<OperationRecord>,
    ) {
        let mut accounts = self.accounts.write().await;
        let account = accounts.entry(user_id.to_string()).or_default();
        account.deposits = deposits;
        account.withdrawals = withdrawals;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            ton_wallet: "EQTestTonWallet".to_string(),
            usdt_wallet: "TTestUsdtWallet".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_unknown_user_reads_zero() {
        let state = AppState::new(test_config());

        let info = state.balance("42").await;
        assert_eq!(info.balance, 0.0);
        assert_eq!(info.daily_income, 0.0);

        let ops = state.operations("42").await;
        assert!(ops.deposits.is_empty());
        assert!(ops.withdrawals.is_empty());
    }

    #[tokio::test]
    async fn test_issue_label_sequences_per_user() {
        let state = AppState::new(test_config());

        let first = state
            .issue_label("42", PaymentMethod::Ton, "10")
            .await
            .unwrap();
        let second = state
            .issue_label("42", PaymentMethod::Usdt, "25.5")
            .await
            .unwrap();
        let other = state
            .issue_label("7", PaymentMethod::Ton, "10")
            .await
            .unwrap();

        assert_eq!(first.label, "dep-42-1");
        assert_eq!(first.address, "EQTestTonWallet");
        assert_eq!(second.label, "dep-42-2");
        assert_eq!(second.address, "TTestUsdtWallet");
        assert_eq!(other.label, "dep-7-1");

        // Each issuance records one pending deposit, in order.
        let ops = state.operations("42").await;
        assert_eq!(ops.deposits.len(), 2);
        assert_eq!(ops.deposits[0].amount, 10.0);
        assert_eq!(ops.deposits[0].currency, "TON");
        assert_eq!(ops.deposits[1].amount, 25.5);
        assert_eq!(ops.deposits[1].currency, "USDT");
    }

    #[tokio::test]
    async fn test_issue_label_validates_amount() {
        let state = AppState::new(test_config());

        assert!(matches!(
            state.issue_label("42", PaymentMethod::Ton, "abc").await,
            Err(ServerError::InvalidAmount)
        ));
        assert!(matches!(
            state.issue_label("42", PaymentMethod::Ton, "-5").await,
            Err(ServerError::InvalidAmount)
        ));
        assert!(matches!(
            state.issue_label("42", PaymentMethod::Ton, "5").await,
            Err(ServerError::BelowMinDeposit(_))
        ));

        // Rejected requests must not burn label numbers.
        let issued = state
            .issue_label("42", PaymentMethod::Ton, "10")
            .await
            .unwrap();
        assert_eq!(issued.label, "dep-42-1");
    }

    #[tokio::test]
    async fn test_issue_label_requires_wallet() {
        let config = Config {
            ton_wallet: "EQTestTonWallet".to_string(),
            ..Config::default()
        };
        let state = AppState::new(config);

        assert!(matches!(
            state.issue_label("42", PaymentMethod::Usdt, "10").await,
            Err(ServerError::WalletNotConfigured("USDT"))
        ));
    }

    #[tokio::test]
    async fn test_referral_link_format() {
        let state = AppState::new(test_config());

        let info = state.referral_info("42").await;
        assert_eq!(info.link, "https://t.me/tonpool_bot?start=42");
        assert_eq!(info.count, 0);
        assert_eq!(info.earned, 0.0);
    }
}
