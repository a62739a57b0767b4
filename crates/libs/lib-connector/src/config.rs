//! # Connector Configuration
//!
//! Fixed transaction parameters and UI timings. The defaults target the
//! Hedera testnet through HashPack; [`ConnectorConfig::validate`] runs when a
//! connector is constructed so a bad override fails before any wallet call.

use std::time::Duration;

use shared::AccountId;

pub const DEFAULT_WALLET_NAME: &str = "HashPack";
pub const DEFAULT_REQUIRED_NETWORK: &str = "testnet";
/// Testnet consensus node
pub const DEFAULT_NODE_ACCOUNT: AccountId = AccountId::new(0, 0, 3);
/// 0.01 HBAR
pub const DEFAULT_TRANSACTION_FEE: u64 = 1_000_000;
pub const DEFAULT_VALID_DURATION_SECS: u64 = 120;
pub const DEFAULT_MEMO: &str = "Transfer from HashPack testnet connector";
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_millis(5000);
pub const DEFAULT_BALANCE_REFRESH_DELAY: Duration = Duration::from_millis(2000);

/// Ledger limit on transaction memos
pub const MAX_MEMO_BYTES: usize = 100;
/// Ledger limit on the transaction valid duration
pub const MAX_VALID_DURATION_SECS: u64 = 180;

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorConfig {
    /// Shown in labels and messages ("Connect to HashPack")
    pub wallet_name: String,

    /// Network the wallet must report after the account request
    pub required_network: String,

    pub node_account: AccountId,

    /// Max transaction fee in tinybars
    pub transaction_fee: u64,

    pub valid_duration_secs: u64,

    pub memo: String,

    /// How long each status message stays on screen
    pub message_ttl: Duration,

    /// Delay between a successful transfer and the follow-up balance query
    pub balance_refresh_delay: Duration,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            wallet_name: DEFAULT_WALLET_NAME.to_string(),
            required_network: DEFAULT_REQUIRED_NETWORK.to_string(),
            node_account: DEFAULT_NODE_ACCOUNT,
            transaction_fee: DEFAULT_TRANSACTION_FEE,
            valid_duration_secs: DEFAULT_VALID_DURATION_SECS,
            memo: DEFAULT_MEMO.to_string(),
            message_ttl: DEFAULT_MESSAGE_TTL,
            balance_refresh_delay: DEFAULT_BALANCE_REFRESH_DELAY,
        }
    }
}

impl ConnectorConfig {
    /// Validate configuration values against ledger limits.
    pub fn validate(&self) -> Result<(), String> {
        if self.wallet_name.trim().is_empty() {
            return Err("wallet name cannot be empty".to_string());
        }

        if self.required_network.trim().is_empty() {
            return Err("required network cannot be empty".to_string());
        }

        if self.transaction_fee == 0 {
            return Err("transaction fee must be greater than 0".to_string());
        }

        if self.valid_duration_secs == 0 || self.valid_duration_secs > MAX_VALID_DURATION_SECS {
            return Err(format!(
                "valid duration must be between 1 and {} seconds",
                MAX_VALID_DURATION_SECS
            ));
        }

        if self.memo.len() > MAX_MEMO_BYTES {
            return Err(format!("memo must be at most {} bytes", MAX_MEMO_BYTES));
        }

        Ok(())
    }

    pub fn connect_label(&self) -> String {
        format!("Connect to {}", self.wallet_name)
    }

    pub fn not_installed_label(&self) -> String {
        format!("{} Not Installed", self.wallet_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConnectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.required_network, "testnet");
        assert_eq!(config.node_account.to_string(), "0.0.3");
        assert_eq!(config.connect_label(), "Connect to HashPack");
    }

    #[test]
    fn test_config_validation() {
        let config = ConnectorConfig {
            memo: "x".repeat(MAX_MEMO_BYTES + 1),
            ..ConnectorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ConnectorConfig {
            valid_duration_secs: 0,
            ..ConnectorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ConnectorConfig {
            valid_duration_secs: MAX_VALID_DURATION_SECS + 1,
            ..ConnectorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ConnectorConfig {
            transaction_fee: 0,
            ..ConnectorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ConnectorConfig {
            required_network: " ".to_string(),
            ..ConnectorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
