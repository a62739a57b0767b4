//! HashPack Connector Page
//!
//! Status panel, connect/disconnect/balance controls and the HBAR transfer
//! form. All behaviour lives in the connector; the page binds its signals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_connector::{ConnectorConfig, WalletConnector};

use crate::components::StatusMessages;
use crate::services::events::WalletEvents;
use crate::services::hashpack::HashPackProvider;
use crate::services::timers::GlooScheduler;
use crate::state::connector::SignalView;

#[component]
pub fn ConnectorPage() -> impl IntoView {
    let config = ConnectorConfig::default();
    let signals = SignalView::new(&config);
    let title = format!("{} Testnet Connector", config.wallet_name);

    let connector = match WalletConnector::new(
        HashPackProvider::detect(),
        signals,
        GlooScheduler::default(),
        config,
    ) {
        Ok(connector) => connector,
        Err(e) => {
            log::error!("{}", e);
            return view! { <div class="message error">{e.to_string()}</div> }.into_any();
        }
    };
    connector.initialize();

    let events = match WalletEvents::attach(connector.clone()) {
        Ok(events) => Some(events),
        Err(e) => {
            log::error!("failed to register wallet listeners: {:?}", e);
            None
        }
    };

    let connector = StoredValue::new_local(connector);
    // Dropping the listeners with the page releases their connector handles
    let _events = StoredValue::new_local(events);

    on_cleanup(move || {
        connector.try_with_value(|connector| connector.shutdown());
    });

    let on_connect = move |_| {
        let connector = connector.get_value();
        spawn_local(async move { connector.connect().await });
    };
    let on_disconnect = move |_| connector.with_value(|connector| connector.disconnect());
    let on_balance = move |_| {
        let connector = connector.get_value();
        spawn_local(async move { connector.get_balance().await });
    };
    let on_send = move |_| {
        let connector = connector.get_value();
        spawn_local(async move { connector.send_transaction().await });
    };
    let on_dismiss = move |id| connector.with_value(|connector| connector.dismiss_message(id));

    let snapshot = signals.snapshot;

    view! {
        <div class="container">
            <h1>{title}</h1>

            <div class="card wallet-status">
                <span
                    id="statusIndicator"
                    class=move || snapshot.with(|s| s.status_class)
                >
                    {move || snapshot.with(|s| s.status_label)}
                </span>

                <div class="account-info">
                    <div class="info-row">
                        <span class="label">"Network:"</span>
                        <span id="networkValue">{move || snapshot.with(|s| s.network.clone())}</span>
                    </div>
                    <div class="info-row">
                        <span class="label">"Account ID:"</span>
                        <span id="accountIdValue">{move || snapshot.with(|s| s.account_id.clone())}</span>
                    </div>
                    <div class="info-row">
                        <span class="label">"Balance:"</span>
                        <span id="balanceValue">{move || signals.balance.get()}</span>
                    </div>
                </div>

                <div class="button-group">
                    <button
                        id="connectButton"
                        class="btn btn-primary"
                        prop:disabled=move || signals.connect_disabled.get()
                        on:click=on_connect
                    >
                        {move || signals.connect_label.get()}
                    </button>
                    <button
                        id="disconnectButton"
                        class="btn btn-secondary"
                        prop:disabled=move || snapshot.with(|s| s.disconnect_disabled)
                        on:click=on_disconnect
                    >
                        "Disconnect"
                    </button>
                    <button
                        id="getBalanceButton"
                        class="btn btn-secondary"
                        prop:disabled=move || snapshot.with(|s| s.balance_disabled)
                        on:click=on_balance
                    >
                        "Get Balance"
                    </button>
                </div>
            </div>

            <div
                id="transactionSection"
                class="card transaction-section"
                style:display=move || if snapshot.with(|s| s.form_visible) { "block" } else { "none" }
            >
                <h2>"Send HBAR"</h2>
                <div class="form-group">
                    <label for="recipient">"Recipient Account ID"</label>
                    <input
                        id="recipient"
                        type="text"
                        placeholder="0.0.123456"
                        prop:value=move || signals.recipient.get()
                        on:input=move |ev| signals.recipient.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="amount">"Amount (HBAR)"</label>
                    <input
                        id="amount"
                        type="number"
                        min="0"
                        step="0.00000001"
                        placeholder="1.0"
                        prop:value=move || signals.amount.get()
                        on:input=move |ev| signals.amount.set(event_target_value(&ev))
                    />
                </div>
                <button
                    id="sendButton"
                    class="btn btn-primary"
                    prop:disabled=move || snapshot.with(|s| s.send_disabled)
                    on:click=on_send
                >
                    "Send Transaction"
                </button>
            </div>

            <StatusMessages messages=signals.messages on_dismiss=on_dismiss/>
        </div>
    }
    .into_any()
}
