//! Server configuration.

use std::net::SocketAddr;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Directory with the built frontend assets.
    pub static_dir: String,
    /// Bot username used to build referral links.
    pub bot_username: String,
    /// Wallet that receives TON deposits.
    pub ton_wallet: String,
    /// Wallet that receives USDT (TRC20) deposits.
    pub usdt_wallet: String,
    /// Minimum accepted deposit amount.
    pub min_deposit: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            static_dir: "../frontend/dist".to_string(),
            bot_username: "tonpool_bot".to_string(),
            ton_wallet: String::new(),
            usdt_wallet: String::new(),
            min_deposit: 10.0,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// Wallets default to empty; label generation for a method fails until
    /// its wallet is configured.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: env_var("BIND_ADDR")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bind_addr),
            static_dir: env_var("STATIC_DIR").unwrap_or(defaults.static_dir),
            bot_username: env_var("BOT_USERNAME").unwrap_or(defaults.bot_username),
            ton_wallet: env_var("TON_WALLET").unwrap_or_default(),
            usdt_wallet: env_var("USDT_WALLET").unwrap_or_default(),
            min_deposit: env_var("MIN_DEPOSIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_deposit),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
