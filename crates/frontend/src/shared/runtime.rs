//! Task spawning and timers for the single-threaded client.
//!
//! Everything in the console runs on the browser event loop. The controller
//! and the debounce timer never touch `wasm_bindgen_futures` or `gloo_timers`
//! directly, they go through [`Runtime`] so the same code runs under a manual
//! clock in tests.

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use std::time::Duration;

pub trait Runtime {
    /// Run `task` to completion on the local event loop.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Call `callback` once after `delay`. Dropping the returned handle
    /// cancels the timer if it has not fired yet.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owner of a scheduled timer.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Browser event loop: `spawn_local` for tasks, `setTimeout` for timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Timeout clears itself on drop
        let timeout = Timeout::new(millis, callback);
        TimerHandle::new(move || drop(timeout))
    }
}
