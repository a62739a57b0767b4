//! Application constants

/// Global the HashPack extension injects into the page
pub const PROVIDER_GLOBAL: &str = "hedera";

// Window events dispatched by the wallet
pub const ACCOUNT_CHANGED_EVENT: &str = "hedera_accountChanged";
pub const NETWORK_CHANGED_EVENT: &str = "hedera_networkChanged";

/// Backend status probe, logged once at startup
pub const STATUS_ENDPOINT: &str = "/api/testnet-status";
