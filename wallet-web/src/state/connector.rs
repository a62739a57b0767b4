//! Connector state bound to the page through signals

use leptos::prelude::*;
use lib_connector::view::PLACEHOLDER;
use lib_connector::{
    ConnectionState, ConnectorConfig, ConnectorView, MessageId, StatusMessage, TransferForm,
    UiSnapshot, WalletConnector,
};

use crate::services::hashpack::HashPackProvider;
use crate::services::timers::GlooScheduler;

pub type HashPackConnector = WalletConnector<HashPackProvider, SignalView, GlooScheduler>;

/// The page's reactive state. Writes from the connector re-render the bound elements.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub snapshot: RwSignal<UiSnapshot>,
    pub balance: RwSignal<String>,
    pub connect_disabled: RwSignal<bool>,
    pub connect_label: RwSignal<String>,
    pub messages: RwSignal<Vec<StatusMessage>>,
    pub recipient: RwSignal<String>,
    pub amount: RwSignal<String>,
}

impl SignalView {
    pub fn new(config: &ConnectorConfig) -> Self {
        let snapshot = UiSnapshot::project(ConnectionState::Disconnected, None, config);
        Self {
            connect_disabled: RwSignal::new(snapshot.connect_disabled),
            connect_label: RwSignal::new(snapshot.connect_label.clone()),
            snapshot: RwSignal::new(snapshot),
            balance: RwSignal::new(PLACEHOLDER.to_string()),
            messages: RwSignal::new(Vec::new()),
            recipient: RwSignal::new(String::new()),
            amount: RwSignal::new(String::new()),
        }
    }
}

impl ConnectorView for SignalView {
    fn render(&self, snapshot: &UiSnapshot) {
        if let Some(balance) = &snapshot.balance {
            self.balance.set(balance.clone());
        }
        self.set_connect_control(snapshot.connect_disabled, &snapshot.connect_label);
        self.snapshot.set(snapshot.clone());
    }

    fn set_balance(&self, text: &str) {
        self.balance.set(text.to_string());
    }

    fn set_connect_control(&self, disabled: bool, label: &str) {
        self.connect_disabled.set(disabled);
        self.connect_label.set(label.to_string());
    }

    fn push_message(&self, message: StatusMessage) {
        self.messages.update(|messages| messages.push(message));
    }

    fn remove_message(&self, id: MessageId) {
        self.messages.update(|messages| messages.retain(|m| m.id != id));
    }

    fn transfer_form(&self) -> TransferForm {
        TransferForm::new(self.recipient.get_untracked(), self.amount.get_untracked())
    }

    fn clear_transfer_form(&self) {
        self.recipient.set(String::new());
        self.amount.set(String::new());
    }
}
