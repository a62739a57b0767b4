//! # Wallet Connector
//!
//! Mediates between UI events, the injected wallet and the displayed state.
//!
//! ## Lifecycle
//!
//! 1. [`WalletConnector::new`] validates the config and wires the provider,
//!    view and scheduler together.
//! 2. [`WalletConnector::initialize`] renders the disconnected layout and
//!    reports whether a wallet was detected.
//! 3. Button handlers call [`connect`](WalletConnector::connect),
//!    [`disconnect`](WalletConnector::disconnect),
//!    [`get_balance`](WalletConnector::get_balance) and
//!    [`send_transaction`](WalletConnector::send_transaction). Wallet
//!    notifications call [`on_account_changed`](WalletConnector::on_account_changed)
//!    and [`on_network_changed`](WalletConnector::on_network_changed).
//! 4. [`WalletConnector::shutdown`] aborts pending timers when the view goes away.
//!
//! Public operations never return errors. Failures are logged and shown as
//! error messages.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use futures::FutureExt;
use serde::de::DeserializeOwned;
use shared::{
    format_hbar, Account, BalanceParams, ProviderMethod, ProviderRequest, SignAndExecuteParams,
    TransactionReceipt,
};

use crate::config::ConnectorConfig;
use crate::error::{ConnectorError, Operation};
use crate::provider::WalletProvider;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::state::{ConnectionState, Session};
use crate::transfer::TransferRequest;
use crate::view::{ConnectorView, MessageId, MessageKind, StatusMessage, UiSnapshot};


pub struct WalletConnector<P, V, S> {
    /// `None` when no wallet was injected into the page
    provider: Option<P>,
    view: V,
    scheduler: S,
    config: ConnectorConfig,
    session: RefCell<Session>,
    next_message_id: Cell<u64>,
    /// Dismissal timers of the messages still on screen
    message_timers: RefCell<HashMap<MessageId, TimerHandle>>,
    balance_refresh: RefCell<Option<TimerHandle>>,
    weak_self: Weak<Self>,
}

/// Clears the loading label when dropped, on every exit path
struct LoadingGuard<'a, P, V: ConnectorView, S> {
    connector: &'a WalletConnector<P, V, S>,
    armed: bool,
}

impl<P, V: ConnectorView, S> LoadingGuard<'_, P, V, S> {
    /// Leave the connect control as it is. Another request owns it now.
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<P, V: ConnectorView, S> Drop for LoadingGuard<'_, P, V, S> {
    fn drop(&mut self) {
        if self.armed {
            self.connector.set_loading(None);
        }
    }
}

impl<P, V, S> WalletConnector<P, V, S> {
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn state(&self) -> ConnectionState {
        self.session.borrow().state
    }

    /// Connected account, if any
    pub fn account(&self) -> Option<Account> {
        self.session.borrow().connected_account().cloned()
    }

    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Result<&P, ConnectorError> {
        self.provider
            .as_ref()
            .ok_or_else(|| ConnectorError::ProviderMissing {
                wallet: self.config.wallet_name.clone(),
            })
    }

    /// Provider and account id of the current session
    fn require_session(&self) -> Result<(&P, String, u64), ConnectorError> {
        let (account_id, epoch) = {
            let session = self.session.borrow();
            match session.connected_account() {
                Some(account) => (account.account_id.clone(), session.epoch),
                None => {
                    return Err(ConnectorError::NotConnected {
                        wallet: self.config.wallet_name.clone(),
                    })
                }
            }
        };
        Ok((self.provider()?, account_id, epoch))
    }

    fn snapshot(&self) -> UiSnapshot {
        let snapshot = {
            let session = self.session.borrow();
            UiSnapshot::project(session.state, session.connected_account(), &self.config)
        };
        if self.has_provider() {
            snapshot
        } else {
            snapshot.without_provider(&self.config)
        }
    }
}

impl<P, V: ConnectorView, S> WalletConnector<P, V, S> {
    /// Project the connection state onto the view. Idempotent.
    pub fn update_ui(&self) {
        self.view.render(&self.snapshot());
    }

    /// `Some(label)` disables the connect control and shows `label`; `None`
    /// restores the resting label and the state-appropriate disabled flag.
    pub fn set_loading(&self, label: Option<&str>) {
        match label {
            Some(label) => self.view.set_connect_control(true, label),
            None => {
                let snapshot = self.snapshot();
                self.view
                    .set_connect_control(snapshot.connect_disabled, &snapshot.connect_label);
            }
        }
    }

    fn loading(&self, label: &str) -> LoadingGuard<'_, P, V, S> {
        self.set_loading(Some(label));
        LoadingGuard {
            connector: self,
            armed: true,
        }
    }

    /// Show a message that stays until the view is torn down.
    fn pin_message(&self, text: impl Into<String>, kind: MessageKind) -> MessageId {
        let id = MessageId(self.next_message_id.get());
        self.next_message_id.set(id.0 + 1);
        self.view.push_message(StatusMessage {
            id,
            kind,
            text: text.into(),
        });
        id
    }
}

impl<P, V, S> WalletConnector<P, V, S>
where
    P: WalletProvider + 'static,
    V: ConnectorView + 'static,
    S: Scheduler + 'static,
{
    /// Build a connector. `provider` is `None` when no wallet was detected.
    pub fn new(
        provider: Option<P>,
        view: V,
        scheduler: S,
        config: ConnectorConfig,
    ) -> Result<Rc<Self>, ConnectorError> {
        config.validate().map_err(ConnectorError::Config)?;

        Ok(Rc::new_cyclic(|weak_self| Self {
            provider,
            view,
            scheduler,
            config,
            session: RefCell::new(Session::default()),
            next_message_id: Cell::new(0),
            message_timers: RefCell::new(HashMap::new()),
            balance_refresh: RefCell::new(None),
            weak_self: weak_self.clone(),
        }))
    }

    /// Render the disconnected layout and report wallet detection.
    pub fn initialize(&self) {
        self.update_ui();

        let wallet = &self.config.wallet_name;
        if self.has_provider() {
            log::info!("{} provider detected", wallet);
            self.show_message(format!("{} wallet is available!", wallet), MessageKind::Success);
        } else {
            log::warn!("{} provider not found", wallet);
            self.pin_message(
                format!("{} wallet not detected. Please install it.", wallet),
                MessageKind::Error,
            );
        }
    }

    /// Request account access. Ignored while a connection exists or is pending.
    pub async fn connect(&self) {
        match self.try_connect().await {
            Ok(true) => self.get_balance().await,
            Ok(false) => {}
            Err(err) => self.report(err),
        }
    }

    /// Returns whether a new session was established.
    async fn try_connect(&self) -> Result<bool, ConnectorError> {
        let provider = self.provider()?;

        let epoch = {
            let mut session = self.session.borrow_mut();
            if session.state != ConnectionState::Disconnected {
                log::debug!("connect ignored while {:?}", session.state);
                return Ok(false);
            }
            session.state = ConnectionState::Connecting;
            session.epoch
        };

        let loading = self.loading("Connecting...");
        let result = self.request_account(provider).await;

        let mut session = self.session.borrow_mut();
        if session.epoch != epoch {
            log::debug!("account response arrived after the session changed, dropping");
            if session.state == ConnectionState::Connecting {
                loading.disarm();
            }
            return Ok(false);
        }

        match result {
            Ok(account) => {
                log::info!("connected {} on {}", account.account_id, account.network);
                session.connect(account);
            }
            Err(err) => {
                session.state = ConnectionState::Disconnected;
                return Err(err);
            }
        }
        drop(session);
        drop(loading);

        self.update_ui();
        self.show_message(
            format!(
                "Successfully connected to {} {}!",
                self.config.wallet_name,
                capitalize(&self.config.required_network)
            ),
            MessageKind::Success,
        );
        Ok(true)
    }

    async fn request_account(&self, provider: &P) -> Result<Account, ConnectorError> {
        let account: Account = call(
            provider,
            Operation::Connect,
            ProviderRequest::new(ProviderMethod::RequestAccount),
        )
        .await?;

        if account.network != self.config.required_network {
            return Err(ConnectorError::WrongNetwork {
                actual: account.network,
                required: self.config.required_network.clone(),
                wallet: self.config.wallet_name.clone(),
            });
        }
        Ok(account)
    }

    /// Forget the account and return to the disconnected layout.
    pub fn disconnect(&self) {
        self.session.borrow_mut().disconnect();
        if let Some(refresh) = self.balance_refresh.borrow_mut().take() {
            refresh.cancel();
        }
        log::info!("disconnected");
        self.update_ui();
        self.show_message(
            format!("Disconnected from {}.", self.config.wallet_name),
            MessageKind::Info,
        );
    }

    /// Query and display the connected account's balance.
    pub async fn get_balance(&self) {
        if let Err(err) = self.try_get_balance().await {
            self.report(err);
        }
    }

    async fn try_get_balance(&self) -> Result<(), ConnectorError> {
        let (provider, account_id, epoch) = self.require_session()?;

        let request = ProviderRequest::with_params(
            ProviderMethod::GetAccountBalance,
            &BalanceParams { account_id },
        )
        .map_err(|e| ConnectorError::malformed(Operation::Balance, e))?;

        let result: Result<f64, _> = call(provider, Operation::Balance, request).await;

        if self.session.borrow().epoch != epoch {
            log::debug!("balance response arrived after the session changed, dropping");
            return Ok(());
        }

        let balance = result?;
        self.view.set_balance(&format_hbar(balance));
        self.show_message(format!("Balance updated: {} HBAR", balance), MessageKind::Success);
        Ok(())
    }

    /// Validate the transfer form and have the wallet sign and submit it.
    pub async fn send_transaction(&self) {
        if let Err(err) = self.try_send_transaction().await {
            self.report(err);
        }
    }

    async fn try_send_transaction(&self) -> Result<(), ConnectorError> {
        let (provider, sender, _) = self.require_session()?;

        let transfer = TransferRequest::from_form(&sender, &self.view.transfer_form(), &self.config)?;
        let request = ProviderRequest::with_params(
            ProviderMethod::SignAndExecuteTransaction,
            &SignAndExecuteParams {
                transaction: transfer.to_transaction(self.config.node_account),
            },
        )
        .map_err(|e| ConnectorError::malformed(Operation::Transfer, e))?;

        log::info!(
            "transferring {} tinybars from {} to {}",
            transfer.amount_tinybars,
            transfer.sender,
            transfer.recipient
        );

        let receipt: TransactionReceipt = {
            let _loading = self.loading("Sending transaction...");
            call(provider, Operation::Transfer, request).await?
        };

        log::info!("transaction {} submitted", receipt.transaction_id);
        self.show_message(
            format!(
                "Transaction sent successfully! Transaction ID: {}",
                receipt.transaction_id
            ),
            MessageKind::Success,
        );
        self.view.clear_transfer_form();
        self.schedule_balance_refresh();
        Ok(())
    }

    /// Refresh the balance once the ledger has settled. A newer transfer
    /// replaces a refresh that has not fired yet.
    fn schedule_balance_refresh(&self) {
        let weak = self.weak_self.clone();
        let handle = self.scheduler.schedule(
            self.config.balance_refresh_delay,
            async move {
                if let Some(connector) = weak.upgrade() {
                    connector.balance_refresh.borrow_mut().take();
                    connector.get_balance().await;
                }
            }
            .boxed_local(),
        );
        if let Some(previous) = self.balance_refresh.borrow_mut().replace(handle) {
            previous.cancel();
        }
    }

    /// Show a message that removes itself after the configured TTL.
    pub fn show_message(&self, text: impl Into<String>, kind: MessageKind) -> MessageId {
        let id = self.pin_message(text, kind);

        let weak = self.weak_self.clone();
        let handle = self.scheduler.schedule(
            self.config.message_ttl,
            async move {
                if let Some(connector) = weak.upgrade() {
                    connector.message_timers.borrow_mut().remove(&id);
                    connector.view.remove_message(id);
                }
            }
            .boxed_local(),
        );
        self.message_timers.borrow_mut().insert(id, handle);
        id
    }

    /// Remove a message before its TTL runs out.
    pub fn dismiss_message(&self, id: MessageId) {
        if let Some(timer) = self.message_timers.borrow_mut().remove(&id) {
            timer.cancel();
        }
        self.view.remove_message(id);
    }

    fn report(&self, err: ConnectorError) {
        match &err {
            ConnectorError::Provider { operation, error } => {
                log::error!("{:?} failed: {} (code {:?})", operation, error, error.code)
            }
            _ => log::warn!("{}", err),
        }
        self.show_message(err.to_string(), MessageKind::Error);
    }

    /// The wallet switched accounts. `detail` is the raw event payload.
    pub fn on_account_changed(&self, detail: Option<&str>) {
        log::info!("account changed: {}", detail.unwrap_or("<none>"));
        self.disconnect();
    }

    /// The wallet switched networks. Only an open session is affected.
    pub fn on_network_changed(&self, detail: Option<&str>) {
        log::info!("network changed: {}", detail.unwrap_or("<none>"));
        if self.is_connected() {
            self.show_message("Network changed. Please reconnect.", MessageKind::Info);
            self.disconnect();
        }
    }

    /// Abort pending message dismissals and balance refreshes.
    pub fn shutdown(&self) {
        log::debug!("connector shutting down");
        self.scheduler.cancel_all();
        self.message_timers.borrow_mut().clear();
        self.balance_refresh.borrow_mut().take();
    }
}

/// Issue `request` and decode the result.
async fn call<P, T>(
    provider: &P,
    operation: Operation,
    request: ProviderRequest,
) -> Result<T, ConnectorError>
where
    P: WalletProvider + ?Sized,
    T: DeserializeOwned,
{
    log::debug!("provider request {}", request.method.as_str());
    let value = provider
        .request(request)
        .await
        .map_err(|e| ConnectorError::from_provider(operation, e))?;
    serde_json::from_value(value).map_err(|e| ConnectorError::malformed(operation, e))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
