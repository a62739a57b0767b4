//! Wallet notifications
//!
//! HashPack announces account and network switches as window events. Each
//! listener holds the connector directly and is removed again on drop.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Event, Window};

use crate::state::connector::HashPackConnector;
use crate::utils::constants::{ACCOUNT_CHANGED_EVENT, NETWORK_CHANGED_EVENT};

pub struct WalletEvents {
    window: Window,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl WalletEvents {
    /// Register the account and network listeners on `window`.
    pub fn attach(connector: Rc<HashPackConnector>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let mut events = Self {
            window,
            listeners: Vec::new(),
        };

        let on_account = connector.clone();
        events.listen(ACCOUNT_CHANGED_EVENT, move |detail| {
            on_account.on_account_changed(detail.as_deref())
        })?;

        let on_network = connector;
        events.listen(NETWORK_CHANGED_EVENT, move |detail| {
            on_network.on_network_changed(detail.as_deref())
        })?;

        Ok(events)
    }

    fn listen(
        &mut self,
        name: &'static str,
        handler: impl Fn(Option<String>) + 'static,
    ) -> Result<(), JsValue> {
        let closure =
            Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(event_detail(&event)));
        self.window
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        self.listeners.push((name, closure));
        Ok(())
    }
}

impl Drop for WalletEvents {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {} listener: {:?}", name, e);
            }
        }
    }
}

/// `event.detail` as JSON text, if the event carries one
fn event_detail(event: &Event) -> Option<String> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    if detail.is_undefined() || detail.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&detail)
        .ok()
        .and_then(|json| json.as_string())
}
