//! # Account Data Transfer Objects
//!
//! Hedera accounts are addressed as `shard.realm.num`, three non-negative
//! integers separated by periods (e.g. `0.0.123456`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse failure for [`AccountId`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid account ID `{0}` (expected shard.realm.num, e.g. 0.0.123456)")]
pub struct AccountIdParseError(pub String);

/// A `shard.realm.num` account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl AccountId {
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }
}

impl FromStr for AccountId {
    type Err = AccountIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AccountIdParseError(s.to_string());

        let mut parts = s.split('.');
        let mut next = || -> Result<u64, AccountIdParseError> {
            let part = parts.next().ok_or_else(invalid)?;
            // u64::from_str accepts a leading '+', the dotted form does not
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let id = AccountId::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.to_string()
    }
}

/// Response of `hedera_requestAccount`
///
/// The account ID is kept as the wallet reports it; the connector never
/// rewrites the sender side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: String,
    pub network: String,
}
