//! Test doubles: manual clock runtime, recording presenters, scripted APIs.

use async_trait::async_trait;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use super::api_utils::ConsoleConfig;
use super::context::ConsoleContext;
use super::error::ApiError;
use super::list::ListApi;
use super::mutation::{MutationApi, Refresh};
use super::notify::{ConfirmPrompt, Notifier};
use super::runtime::{Runtime, TimerHandle};
use crate::system::auth::session::MemorySession;

// ---------------------------------------------------------------------------
// Runtime
// ---------------------------------------------------------------------------

/// Deterministic event loop: tasks run on a `LocalPool`, timers fire only
/// when the test advances the clock.
pub struct ManualRuntime {
    pool: RefCell<LocalPool>,
    inner: Rc<ManualInner>,
}

struct ManualInner {
    spawner: LocalSpawner,
    clock: Rc<RefCell<Clock>>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<(Duration, u64), Box<dyn FnOnce()>>,
}

impl ManualRuntime {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            pool: RefCell::new(pool),
            inner: Rc::new(ManualInner {
                spawner,
                clock: Rc::new(RefCell::new(Clock::default())),
            }),
        }
    }

    pub fn handle(&self) -> Rc<dyn Runtime> {
        self.inner.clone()
    }

    pub fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    /// Move the clock forward, firing due timers in order and draining the
    /// task queue after each one.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.clock.borrow().now + by;
        loop {
            self.run_until_stalled();
            let due = {
                let mut clock = self.inner.clock.borrow_mut();
                match clock.timers.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        clock.now = key.0;
                        clock.timers.remove(&key)
                    }
                    _ => None,
                }
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.inner.clock.borrow_mut().now = target;
        self.run_until_stalled();
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.clock.borrow().timers.len()
    }
}

impl Runtime for ManualInner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("local pool is alive for the whole test");
    }

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let key = {
            let mut clock = self.clock.borrow_mut();
            clock.next_id += 1;
            let key = (clock.now + delay, clock.next_id);
            clock.timers.insert(key, callback);
            key
        };
        let clock = Rc::downgrade(&self.clock);
        TimerHandle::new(move || {
            if let Some(clock) = clock.upgrade() {
                let removed = clock.borrow_mut().timers.remove(&key);
                drop(removed);
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Presenters
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn show_success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

pub struct ScriptedConfirm {
    pub answer: Cell<bool>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, description: &str) -> bool {
        self.asked.borrow_mut().push(description.to_string());
        self.answer.get()
    }
}

#[derive(Default)]
pub struct CountingRefresh {
    pub calls: Cell<usize>,
}

impl Refresh for CountingRefresh {
    fn refresh(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

// ---------------------------------------------------------------------------
// List API
// ---------------------------------------------------------------------------

type ListResult = Result<ListResponse<String>, ApiError>;

/// List API whose responses are released by the test, in any order.
#[derive(Default)]
pub struct ScriptedListApi {
    requests: RefCell<Vec<ListQuery>>,
    waiting: RefCell<VecDeque<oneshot::Sender<ListResult>>>,
}

impl ScriptedListApi {
    pub fn requests(&self) -> Vec<ListQuery> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<ListQuery> {
        self.requests.borrow().last().cloned()
    }

    pub fn in_flight(&self) -> usize {
        self.waiting.borrow().len()
    }

    /// Answer the oldest outstanding request.
    pub fn respond(&self, result: ListResult) {
        let sender = self
            .waiting
            .borrow_mut()
            .pop_front()
            .expect("no request is waiting for a response");
        let _ = sender.send(result);
    }

    /// Answer the most recent outstanding request.
    pub fn respond_latest(&self, result: ListResult) {
        let sender = self
            .waiting
            .borrow_mut()
            .pop_back()
            .expect("no request is waiting for a response");
        let _ = sender.send(result);
    }
}

#[async_trait(?Send)]
impl ListApi for ScriptedListApi {
    type Item = String;

    async fn fetch_page(&self, query: &ListQuery) -> ListResult {
        let (sender, receiver) = oneshot::channel();
        self.requests.borrow_mut().push(query.clone());
        self.waiting.borrow_mut().push_back(sender);
        receiver
            .await
            .unwrap_or_else(|_| Err(ApiError::General("request dropped".to_string())))
    }
}

/// Page of `count` labelled items plus metadata.
pub fn page_of(prefix: &str, count: usize, page: usize, total_page: usize) -> ListResult {
    let items = (1..=count).map(|i| format!("{prefix}-{i}")).collect();
    Ok(ListResponse::new(
        items,
        PageMeta {
            page_number: page,
            page_size: 10,
            total_page,
            total_item: total_page * 10,
        },
    ))
}

// ---------------------------------------------------------------------------
// Mutation API
// ---------------------------------------------------------------------------

/// Mutation API answering every call with the next queued result.
#[derive(Default)]
pub struct ScriptedMutationApi {
    pub calls: RefCell<Vec<String>>,
    results: RefCell<VecDeque<Result<String, ApiError>>>,
}

impl ScriptedMutationApi {
    pub fn will_return(&self, result: Result<String, ApiError>) {
        self.results.borrow_mut().push_back(result);
    }

    fn next(&self, call: String) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(call);
        self.results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("ok".to_string()))
    }
}

#[async_trait(?Send)]
impl MutationApi for ScriptedMutationApi {
    type Record = String;
    type Payload = String;

    async fn create(&self, payload: &String) -> Result<String, ApiError> {
        self.next(format!("create:{payload}"))
    }

    async fn update(&self, id: &str, payload: &String) -> Result<String, ApiError> {
        self.next(format!("update:{id}:{payload}"))
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.next(format!("delete:{id}")).map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Context over `runtime` with a signed-in session and recording presenters.
pub fn test_context(
    runtime: &ManualRuntime,
    notifier: Rc<RecordingNotifier>,
    confirm: bool,
) -> ConsoleContext {
    ConsoleContext::new(
        ConsoleConfig::default().with_api_base("http://localhost:3000"),
        Rc::new(MemorySession::new("token")),
        runtime.handle(),
        notifier,
        Rc::new(ScriptedConfirm::answering(confirm)),
    )
}
