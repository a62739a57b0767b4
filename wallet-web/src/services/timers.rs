//! Browser timers for the connector

use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use lib_connector::{Scheduler, TimerHandle, TimerRegistry};

/// Runs tasks after a `setTimeout` delay on the local executor.
#[derive(Default)]
pub struct GlooScheduler {
    registry: TimerRegistry,
}

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // The delay is inside the tracked future so cancelling also ends the wait
        let (handle, delayed) = self.registry.track(async move {
            TimeoutFuture::new(millis).await;
            task.await;
        });
        wasm_bindgen_futures::spawn_local(delayed);
        handle
    }

    fn cancel_all(&self) {
        self.registry.cancel_all();
    }
}

impl Drop for GlooScheduler {
    fn drop(&mut self) {
        self.registry.cancel_all();
    }
}
