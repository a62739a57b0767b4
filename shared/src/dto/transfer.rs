//! # Transfer Data Transfer Objects
//!
//! The transaction object handed to `hedera_signAndExecuteTransaction`, and
//! the receipt the wallet returns once the transaction has been executed.

use serde::{Deserialize, Serialize};

use super::account::AccountId;

/// Node account in the split `{shard, realm, account}` form the wallet expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAccount {
    pub shard: u64,
    pub realm: u64,
    pub account: u64,
}

impl From<AccountId> for NodeAccount {
    fn from(id: AccountId) -> Self {
        Self {
            shard: id.shard,
            realm: id.realm,
            account: id.num,
        }
    }
}

/// One leg of a crypto transfer, amount in tinybars (negative for the sender)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAmount {
    pub account_id: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoTransfer {
    pub transfers: Vec<AccountAmount>,
}

/// Transfer transaction submitted for signing and execution
///
/// ```text
/// {
///   "nodeId": { "shard": 0, "realm": 0, "account": 3 },
///   "transactionFee": 1000000,
///   "transactionValidDuration": 120,
///   "memo": "...",
///   "cryptoTransfer": { "transfers": [ { "accountId": "0.0.1", "amount": -100 }, ... ] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferTransaction {
    pub node_id: NodeAccount,
    pub transaction_fee: u64,
    pub transaction_valid_duration: u64,
    pub memo: String,
    pub crypto_transfer: CryptoTransfer,
}

impl TransferTransaction {
    /// Net sum of all legs; a balanced transfer sums to zero
    pub fn net_amount(&self) -> i64 {
        self.crypto_transfer
            .transfers
            .iter()
            .map(|leg| leg.amount)
            .sum()
    }
}

/// Response of `hedera_signAndExecuteTransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_id: String,
}
