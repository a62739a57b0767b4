//! # Transfer Requests
//!
//! Validation of the send form and construction of the two-leg crypto
//! transfer handed to the wallet.

use shared::{
    hbar_to_tinybars, AccountAmount, AccountId, CryptoTransfer, TransferTransaction,
};
use thiserror::Error;

use crate::config::ConnectorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid account ID (format: 0.0.123456)")]
    InvalidRecipient,

    #[error("Please enter a valid amount greater than 0.")]
    InvalidAmount,
}

/// Raw contents of the recipient and amount inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
}

impl TransferForm {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }
}

/// A validated HBAR transfer from the connected account
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub sender: String,
    pub recipient: AccountId,
    /// Amount as entered, in HBAR
    pub amount: f64,
    /// Amount in tinybars, always > 0
    pub amount_tinybars: i64,
    pub fee: u64,
    pub valid_duration_secs: u64,
    pub memo: String,
}

impl TransferRequest {
    /// Validate the form and build a request with the configured fee, validity window and memo.
    pub fn from_form(
        sender: &str,
        form: &TransferForm,
        config: &ConnectorConfig,
    ) -> Result<Self, TransferError> {
        let recipient = form.recipient.trim();
        let amount = form.amount.trim();

        if recipient.is_empty() || amount.is_empty() {
            return Err(TransferError::MissingFields);
        }

        let recipient: AccountId = recipient
            .parse()
            .map_err(|_| TransferError::InvalidRecipient)?;

        let amount: f64 = amount.parse().map_err(|_| TransferError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TransferError::InvalidAmount);
        }

        // Dust below half a tinybar rounds to nothing
        let amount_tinybars = hbar_to_tinybars(amount)
            .filter(|tinybars| *tinybars > 0)
            .ok_or(TransferError::InvalidAmount)?;

        Ok(Self {
            sender: sender.to_string(),
            recipient,
            amount,
            amount_tinybars,
            fee: config.transaction_fee,
            valid_duration_secs: config.valid_duration_secs,
            memo: config.memo.clone(),
        })
    }

    /// Sender leg debited, recipient leg credited
    pub fn legs(&self) -> Vec<AccountAmount> {
        vec![
            AccountAmount {
                account_id: self.sender.clone(),
                amount: -self.amount_tinybars,
            },
            AccountAmount {
                account_id: self.recipient.to_string(),
                amount: self.amount_tinybars,
            },
        ]
    }

    pub fn to_transaction(&self, node_account: AccountId) -> TransferTransaction {
        TransferTransaction {
            node_id: node_account.into(),
            transaction_fee: self.fee,
            transaction_valid_duration: self.valid_duration_secs,
            memo: self.memo.clone(),
            crypto_transfer: CryptoTransfer {
                transfers: self.legs(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(recipient: &str, amount: &str) -> Result<TransferRequest, TransferError> {
        TransferRequest::from_form(
            "0.0.4815",
            &TransferForm::new(recipient, amount),
            &ConnectorConfig::default(),
        )
    }

    #[test]
    fn test_valid_transfer() {
        let transfer = request(" 0.0.999 ", "1.5").unwrap();
        assert_eq!(transfer.recipient, AccountId::new(0, 0, 999));
        assert_eq!(transfer.amount_tinybars, 150_000_000);
        assert_eq!(transfer.fee, 1_000_000);
        assert_eq!(transfer.valid_duration_secs, 120);
    }

    #[test]
    fn test_legs_are_balanced() {
        let transfer = request("0.0.999", "1.5").unwrap();
        let legs = transfer.legs();
        assert_eq!(legs[0].account_id, "0.0.4815");
        assert_eq!(legs[0].amount, -150_000_000);
        assert_eq!(legs[1].account_id, "0.0.999");
        assert_eq!(legs[1].amount, 150_000_000);

        let tx = transfer.to_transaction(AccountId::new(0, 0, 3));
        assert_eq!(tx.net_amount(), 0);
        assert_eq!(tx.node_id.account, 3);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(request("", "1").unwrap_err(), TransferError::MissingFields);
        assert_eq!(request("0.0.1", "  ").unwrap_err(), TransferError::MissingFields);
    }

    #[test]
    fn test_invalid_recipient() {
        assert_eq!(request("abc", "1").unwrap_err(), TransferError::InvalidRecipient);
        assert_eq!(request("0.0", "1").unwrap_err(), TransferError::InvalidRecipient);
        // Recipient is checked before the amount
        assert_eq!(request("0.0", "-5").unwrap_err(), TransferError::InvalidRecipient);
    }

    #[test]
    fn test_invalid_amount() {
        for amount in ["0", "-5", "abc", "NaN", "inf", "0.000000001", "1e12"] {
            assert_eq!(
                request("0.0.999", amount).unwrap_err(),
                TransferError::InvalidAmount,
                "accepted {amount:?}"
            );
        }
    }
}
