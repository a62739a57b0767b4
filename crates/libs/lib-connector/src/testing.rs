//! Test doubles for the connector seams: a scripted wallet, a view that
//! records what it was told, and a scheduler driven by a virtual clock.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use serde_json::Value;
use shared::{ProviderMethod, ProviderRequest};

use crate::error::ProviderError;
use crate::provider::WalletProvider;
use crate::scheduler::{Scheduler, TimerHandle, TimerRegistry};
use crate::transfer::TransferForm;
use crate::view::{ConnectorView, MessageId, StatusMessage, UiSnapshot};

type Response = Result<Value, ProviderError>;

enum Scripted {
    Ready(Response),
    Deferred(oneshot::Receiver<Response>),
}

/// Answers requests from a queue of scripted responses, in order.
#[derive(Default)]
pub struct MockProvider {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<ProviderRequest>>,
}

impl MockProvider {
    pub fn respond_ok(&self, value: Value) {
        self.script.borrow_mut().push_back(Scripted::Ready(Ok(value)));
    }

    pub fn respond_err(&self, error: ProviderError) {
        self.script.borrow_mut().push_back(Scripted::Ready(Err(error)));
    }

    /// Queue a response the test completes later through the returned sender.
    pub fn respond_later(&self) -> oneshot::Sender<Response> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.borrow().clone()
    }

    pub fn methods(&self) -> Vec<ProviderMethod> {
        self.requests.borrow().iter().map(|r| r.method).collect()
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    async fn request(&self, request: ProviderRequest) -> Result<Value, ProviderError> {
        self.requests.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(response)) => response,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ProviderError::new("response dropped"))),
            None => Err(ProviderError::new("no scripted response")),
        }
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub snapshot: RefCell<Option<UiSnapshot>>,
    pub renders: Cell<usize>,
    pub balance: RefCell<String>,
    /// (disabled, label)
    pub connect_control: RefCell<(bool, String)>,
    /// Messages currently on screen
    pub visible: RefCell<Vec<StatusMessage>>,
    /// Every message ever pushed
    pub history: RefCell<Vec<StatusMessage>>,
    /// Every label the connect control showed, in order
    pub connect_labels: RefCell<Vec<String>>,
    pub form: RefCell<TransferForm>,
}

impl RecordingView {
    pub fn set_form(&self, recipient: &str, amount: &str) {
        *self.form.borrow_mut() = TransferForm::new(recipient, amount);
    }

    pub fn last_message(&self) -> Option<StatusMessage> {
        self.history.borrow().last().cloned()
    }

    pub fn last_text(&self) -> String {
        self.last_message().map(|m| m.text).unwrap_or_default()
    }

    pub fn visible_texts(&self) -> Vec<String> {
        self.visible.borrow().iter().map(|m| m.text.clone()).collect()
    }

    pub fn snapshot(&self) -> UiSnapshot {
        self.snapshot.borrow().clone().expect("view was never rendered")
    }
}

impl ConnectorView for RecordingView {
    fn render(&self, snapshot: &UiSnapshot) {
        if let Some(balance) = &snapshot.balance {
            *self.balance.borrow_mut() = balance.clone();
        }
        self.set_connect_control(snapshot.connect_disabled, &snapshot.connect_label);
        *self.snapshot.borrow_mut() = Some(snapshot.clone());
        self.renders.set(self.renders.get() + 1);
    }

    fn set_balance(&self, text: &str) {
        *self.balance.borrow_mut() = text.to_string();
    }

    fn set_connect_control(&self, disabled: bool, label: &str) {
        *self.connect_control.borrow_mut() = (disabled, label.to_string());
        self.connect_labels.borrow_mut().push(label.to_string());
    }

    fn push_message(&self, message: StatusMessage) {
        self.history.borrow_mut().push(message.clone());
        self.visible.borrow_mut().push(message);
    }

    fn remove_message(&self, id: MessageId) {
        self.visible.borrow_mut().retain(|m| m.id != id);
    }

    fn transfer_form(&self) -> TransferForm {
        self.form.borrow().clone()
    }

    fn clear_transfer_form(&self) {
        *self.form.borrow_mut() = TransferForm::default();
    }
}

struct Entry {
    due: Duration,
    seq: u64,
    task: LocalBoxFuture<'static, ()>,
}

/// Runs scheduled tasks only when the test advances the clock.
#[derive(Default)]
pub struct ManualScheduler {
    registry: TimerRegistry,
    now: Cell<Duration>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Entry>>,
}

impl ManualScheduler {
    /// Timers that have neither fired nor been cancelled
    pub fn pending(&self) -> usize {
        self.registry.pending()
    }

    /// Move the clock forward, running every task that falls due in order.
    /// Tasks scheduled along the way run too if they fall due in the window.
    pub async fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        while let Some(entry) = self.pop_due(target) {
            self.now.set(entry.due);
            entry.task.await;
        }
        self.now.set(target);
    }

    fn pop_due(&self, target: Duration) -> Option<Entry> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(index, _)| index)?;
        Some(queue.swap_remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) -> TimerHandle {
        let (handle, task) = self.registry.track(task);
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Entry {
            due: self.now.get() + delay,
            seq,
            task,
        });
        handle
    }

    fn cancel_all(&self) {
        self.registry.cancel_all();
    }
}
