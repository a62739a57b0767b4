//! # Timer Scheduling
//!
//! Status messages dismiss themselves and a successful transfer refreshes the
//! balance later. Both go through [`Scheduler`], which hands back a
//! [`TimerHandle`] per timer. [`TimerRegistry`] tracks the pending ones so a
//! torn-down view can abort them all at once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{abortable, AbortHandle, LocalBoxFuture};
use futures::FutureExt;

/// Handle to a scheduled task
#[derive(Debug, Clone)]
pub struct TimerHandle {
    id: u64,
    abort: AbortHandle,
    registry: TimerRegistry,
}

impl TimerHandle {
    /// Abort the task if it has not run yet
    pub fn cancel(&self) {
        self.abort.abort();
        self.registry.release(self.id);
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

pub trait Scheduler {
    /// Run `task` once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) -> TimerHandle;

    /// Abort every pending task.
    fn cancel_all(&self);
}

impl<T: Scheduler + ?Sized> Scheduler for Rc<T> {
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) -> TimerHandle {
        (**self).schedule(delay, task)
    }

    fn cancel_all(&self) {
        (**self).cancel_all()
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    pending: HashMap<u64, AbortHandle>,
}

/// Pending-timer bookkeeping shared by scheduler implementations
#[derive(Debug, Clone, Default)]
pub struct TimerRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `task` abortable and register it.
    ///
    /// The returned future must be driven by the scheduler (after its delay,
    /// or wrapping the delay). It releases its registry slot when it finishes
    /// or is aborted.
    pub fn track<F>(&self, task: F) -> (TimerHandle, LocalBoxFuture<'static, ()>)
    where
        F: Future<Output = ()> + 'static,
    {
        let (task, abort) = abortable(task);

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.pending.insert(id, abort.clone());
            id
        };

        let registry = self.clone();
        let tracked = async move {
            if task.await.is_err() {
                log::trace!("timer {} aborted", id);
            }
            registry.release(id);
        }
        .boxed_local();

        let handle = TimerHandle {
            id,
            abort,
            registry: self.clone(),
        };
        (handle, tracked)
    }

    fn release(&self, id: u64) {
        self.inner.borrow_mut().pending.remove(&id);
    }

    /// Number of timers that have neither fired nor been cancelled
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn cancel_all(&self) {
        let pending: Vec<AbortHandle> = self
            .inner
            .borrow_mut()
            .pending
            .drain()
            .map(|(_, abort)| abort)
            .collect();

        if !pending.is_empty() {
            log::debug!("cancelling {} pending timers", pending.len());
        }
        for abort in pending {
            abort.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_tracked_task_runs_and_releases() {
        let registry = TimerRegistry::new();
        let ran = Rc::new(Cell::new(false));

        let flag = ran.clone();
        let (_handle, task) = registry.track(async move { flag.set(true) });
        assert_eq!(registry.pending(), 1);

        task.await;
        assert!(ran.get());
        assert_eq!(registry.pending(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_task_never_runs() {
        let registry = TimerRegistry::new();
        let ran = Rc::new(Cell::new(false));

        let flag = ran.clone();
        let (handle, task) = registry.track(async move { flag.set(true) });
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(registry.pending(), 0);

        task.await;
        assert!(!ran.get());
        assert_eq!(registry.pending(), 0);
    }

    #[tokio::test]
    async fn test_cancel_all() {
        let registry = TimerRegistry::new();
        let runs = Rc::new(Cell::new(0));

        let tasks: Vec<_> = (0..3)
            .map(|_| {
                let runs = runs.clone();
                registry.track(async move { runs.set(runs.get() + 1) }).1
            })
            .collect();
        assert_eq!(registry.pending(), 3);

        registry.cancel_all();
        assert_eq!(registry.pending(), 0);

        for task in tasks {
            task.await;
        }
        assert_eq!(runs.get(), 0);
    }
}
