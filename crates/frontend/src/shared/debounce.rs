use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::runtime::{Runtime, TimerHandle};

/// Задержка по умолчанию для текстового поиска
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Collapses a burst of values into a single downstream call.
///
/// Every [`push`](DebounceTimer::push) cancels the pending timer and arms a new
/// one, so `on_settle` only sees the last value once the source has been quiet
/// for the full period. Dropping the timer cancels whatever is pending.
pub struct DebounceTimer<T> {
    runtime: Rc<dyn Runtime>,
    quiet_period: Duration,
    on_settle: Rc<dyn Fn(T)>,
    state: Rc<RefCell<DebounceState<T>>>,
}

struct DebounceState<T> {
    settled: Option<T>,
    pending: Option<TimerHandle>,
}

impl<T: Clone + 'static> DebounceTimer<T> {
    pub fn new(
        runtime: Rc<dyn Runtime>,
        quiet_period: Duration,
        on_settle: impl Fn(T) + 'static,
    ) -> Self {
        Self {
            runtime,
            quiet_period,
            on_settle: Rc::new(on_settle),
            state: Rc::new(RefCell::new(DebounceState {
                settled: None,
                pending: None,
            })),
        }
    }

    pub fn push(&self, value: T) {
        let state = Rc::downgrade(&self.state);
        let on_settle = self.on_settle.clone();
        let handle = self.runtime.schedule(
            self.quiet_period,
            Box::new(move || {
                let Some(state) = state.upgrade() else {
                    return;
                };
                let fired = {
                    let mut state = state.borrow_mut();
                    state.settled = Some(value.clone());
                    state.pending.take()
                };
                drop(fired);
                on_settle(value);
            }),
        );

        let superseded = self.state.borrow_mut().pending.replace(handle);
        if let Some(superseded) = superseded {
            superseded.cancel();
        }
    }

    pub fn cancel(&self) {
        let pending = self.state.borrow_mut().pending.take();
        if let Some(pending) = pending {
            pending.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    /// Last value that made it through the quiet period.
    pub fn settled(&self) -> Option<T> {
        self.state.borrow().settled.clone()
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::ManualRuntime;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value: String| sink.borrow_mut().push(value))
    }

    #[test]
    fn test_burst_fires_once_with_last_value() {
        let runtime = ManualRuntime::new();
        let (seen, on_settle) = recorder();
        let timer = DebounceTimer::new(runtime.handle(), DEFAULT_QUIET_PERIOD, on_settle);

        for value in ["c", "ca", "cat", "cats"] {
            timer.push(value.to_string());
            runtime.advance(Duration::from_millis(200));
        }
        assert!(seen.borrow().is_empty());
        assert!(timer.is_pending());

        runtime.advance(Duration::from_millis(300));
        assert_eq!(*seen.borrow(), vec!["cats".to_string()]);
        assert_eq!(timer.settled().as_deref(), Some("cats"));
        assert!(!timer.is_pending());
        assert_eq!(runtime.pending_timers(), 0);
    }

    #[test]
    fn test_superseded_timers_are_cancelled() {
        let runtime = ManualRuntime::new();
        let (_seen, on_settle) = recorder();
        let timer = DebounceTimer::new(runtime.handle(), DEFAULT_QUIET_PERIOD, on_settle);

        timer.push("a".to_string());
        timer.push("b".to_string());
        timer.push("c".to_string());
        assert_eq!(runtime.pending_timers(), 1);
    }

    #[test]
    fn test_cancel_and_drop_release_the_timer() {
        let runtime = ManualRuntime::new();
        let (seen, on_settle) = recorder();
        let timer = DebounceTimer::new(runtime.handle(), DEFAULT_QUIET_PERIOD, on_settle);

        timer.push("x".to_string());
        timer.cancel();
        assert_eq!(runtime.pending_timers(), 0);

        timer.push("y".to_string());
        drop(timer);
        assert_eq!(runtime.pending_timers(), 0);

        runtime.advance(Duration::from_secs(2));
        assert!(seen.borrow().is_empty());
    }
}
