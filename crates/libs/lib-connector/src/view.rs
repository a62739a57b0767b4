//! # Connector View
//!
//! The UI elements the connector drives, behind [`ConnectorView`]. Connection
//! state reaches the screen only through [`UiSnapshot::project`], a pure
//! function of the state and the connected account.

use std::rc::Rc;

use shared::Account;

use crate::config::ConnectorConfig;
use crate::state::ConnectionState;
use crate::transfer::TransferForm;

/// Text shown in empty account fields
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
            MessageKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: MessageId,
    pub kind: MessageKind,
    pub text: String,
}

/// Everything the bound elements display for a given connection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSnapshot {
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub network: String,
    pub account_id: String,
    /// `Some` resets the balance field; `None` leaves the last fetched value
    pub balance: Option<String>,
    pub connect_label: String,
    pub connect_disabled: bool,
    pub disconnect_disabled: bool,
    pub balance_disabled: bool,
    pub send_disabled: bool,
    pub form_visible: bool,
}

impl UiSnapshot {
    pub fn project(
        state: ConnectionState,
        account: Option<&Account>,
        config: &ConnectorConfig,
    ) -> Self {
        match (state, account) {
            (ConnectionState::Connected, Some(account)) => Self {
                status_label: "Connected",
                status_class: "status-indicator connected",
                network: account.network.to_uppercase(),
                account_id: account.account_id.clone(),
                balance: None,
                connect_label: "Connected".to_string(),
                connect_disabled: true,
                disconnect_disabled: false,
                balance_disabled: false,
                send_disabled: false,
                form_visible: true,
            },
            _ => Self {
                status_label: "Disconnected",
                status_class: "status-indicator disconnected",
                network: PLACEHOLDER.to_string(),
                account_id: PLACEHOLDER.to_string(),
                balance: Some(PLACEHOLDER.to_string()),
                connect_label: config.connect_label(),
                connect_disabled: false,
                disconnect_disabled: true,
                balance_disabled: true,
                send_disabled: true,
                form_visible: false,
            },
        }
    }

    /// Connect control when no wallet was detected
    pub fn without_provider(mut self, config: &ConnectorConfig) -> Self {
        self.connect_disabled = true;
        self.connect_label = config.not_installed_label();
        self
    }
}

/// The bound UI elements
pub trait ConnectorView {
    /// Apply a full projection of the connection state.
    fn render(&self, snapshot: &UiSnapshot);

    fn set_balance(&self, text: &str);

    fn set_connect_control(&self, disabled: bool, label: &str);

    fn push_message(&self, message: StatusMessage);

    fn remove_message(&self, id: MessageId);

    /// Current contents of the recipient and amount inputs
    fn transfer_form(&self) -> TransferForm;

    fn clear_transfer_form(&self);
}

impl<T: ConnectorView + ?Sized> ConnectorView for Rc<T> {
    fn render(&self, snapshot: &UiSnapshot) {
        (**self).render(snapshot)
    }

    fn set_balance(&self, text: &str) {
        (**self).set_balance(text)
    }

    fn set_connect_control(&self, disabled: bool, label: &str) {
        (**self).set_connect_control(disabled, label)
    }

    fn push_message(&self, message: StatusMessage) {
        (**self).push_message(message)
    }

    fn remove_message(&self, id: MessageId) {
        (**self).remove_message(id)
    }

    fn transfer_form(&self) -> TransferForm {
        (**self).transfer_form()
    }

    fn clear_transfer_form(&self) {
        (**self).clear_transfer_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            account_id: "0.0.4815".to_string(),
            network: "testnet".to_string(),
        }
    }

    #[test]
    fn test_connected_projection() {
        let config = ConnectorConfig::default();
        let account = account();
        let snapshot = UiSnapshot::project(ConnectionState::Connected, Some(&account), &config);

        assert_eq!(snapshot.status_label, "Connected");
        assert_eq!(snapshot.network, "TESTNET");
        assert_eq!(snapshot.account_id, "0.0.4815");
        assert_eq!(snapshot.balance, None);
        assert!(snapshot.connect_disabled);
        assert!(!snapshot.disconnect_disabled);
        assert!(!snapshot.balance_disabled);
        assert!(!snapshot.send_disabled);
        assert!(snapshot.form_visible);
    }

    #[test]
    fn test_disconnected_projection() {
        let config = ConnectorConfig::default();
        let snapshot = UiSnapshot::project(ConnectionState::Disconnected, None, &config);

        assert_eq!(snapshot.status_class, "status-indicator disconnected");
        assert_eq!(snapshot.balance.as_deref(), Some(PLACEHOLDER));
        assert_eq!(snapshot.connect_label, "Connect to HashPack");
        assert!(!snapshot.connect_disabled);
        assert!(snapshot.disconnect_disabled);
        assert!(snapshot.balance_disabled);
        assert!(snapshot.send_disabled);
        assert!(!snapshot.form_visible);
    }

    #[test]
    fn test_connected_without_account_projects_as_disconnected() {
        let config = ConnectorConfig::default();
        assert_eq!(
            UiSnapshot::project(ConnectionState::Connected, None, &config),
            UiSnapshot::project(ConnectionState::Disconnected, None, &config),
        );
    }

    #[test]
    fn test_projection_is_deterministic() {
        let config = ConnectorConfig::default();
        let account = account();
        for state in [
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Connected,
        ] {
            assert_eq!(
                UiSnapshot::project(state, Some(&account), &config),
                UiSnapshot::project(state, Some(&account), &config),
            );
        }
    }

    #[test]
    fn test_without_provider() {
        let config = ConnectorConfig::default();
        let snapshot = UiSnapshot::project(ConnectionState::Disconnected, None, &config)
            .without_provider(&config);
        assert!(snapshot.connect_disabled);
        assert_eq!(snapshot.connect_label, "HashPack Not Installed");
    }
}
