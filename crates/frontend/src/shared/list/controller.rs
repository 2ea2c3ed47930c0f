use contracts::shared::list::{ListQuery, ListResponse};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::state::{FilterValue, ListSnapshot, SortState};
use super::ListApi;
use crate::shared::api_utils::{ConsoleConfig, DEFAULT_PAGE_SIZE};
use crate::shared::debounce::{DebounceTimer, DEFAULT_QUIET_PERIOD};
use crate::shared::error::ApiError;
use crate::shared::mutation::Refresh;
use crate::shared::notify::Notifier;
use crate::shared::runtime::Runtime;

/// Per-table settings of a [`ListQueryController`].
#[derive(Clone, Debug)]
pub struct ListOptions {
    pub page_size: usize,
    pub sort: SortState,
    /// Free-text filter whose fetch is debounced.
    pub search_key: Option<String>,
    pub quiet_period: Duration,
}

impl ListOptions {
    pub fn new(sort: SortState) -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort,
            search_key: None,
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }

    pub fn from_config(config: &ConsoleConfig, sort: SortState) -> Self {
        Self {
            page_size: config.page_size,
            sort,
            search_key: None,
            quiet_period: config.search_debounce,
        }
    }

    pub fn with_search_key(mut self, key: &str) -> Self {
        self.search_key = Some(key.to_string());
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Rc<dyn Fn(&ListSnapshot<T>)>;

/// Single source of truth for what page of which filtered, sorted data is
/// requested and displayed.
///
/// Every fetch is tagged with a sequence number; a response is applied only
/// if no newer request was issued in the meantime. Failed fetches keep the
/// last good page on screen and go to the error notifier.
pub struct ListQueryController<A: ListApi> {
    inner: Rc<Inner<A>>,
}

impl<A: ListApi> Clone for ListQueryController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct Inner<A: ListApi> {
    api: Rc<A>,
    runtime: Rc<dyn Runtime>,
    notifier: Rc<dyn Notifier>,
    search_key: Option<String>,
    state: RefCell<ListSnapshot<A::Item>>,
    issued: Cell<u64>,
    search: DebounceTimer<String>,
    observers: RefCell<Vec<(SubscriptionId, Observer<A::Item>)>>,
    next_subscription: Cell<u64>,
    disposed: Cell<bool>,
}

impl<A: ListApi + 'static> ListQueryController<A> {
    pub fn new(
        api: A,
        runtime: Rc<dyn Runtime>,
        notifier: Rc<dyn Notifier>,
        options: ListOptions,
    ) -> Self {
        let inner = Rc::new_cyclic(|this: &Weak<Inner<A>>| {
            let this = this.clone();
            let search = DebounceTimer::new(
                runtime.clone(),
                options.quiet_period,
                move |text: String| {
                    if let Some(inner) = this.upgrade() {
                        log::debug!("search settled on {:?}", text);
                        ListQueryController { inner }.issue_fetch();
                    }
                },
            );
            Inner {
                api: Rc::new(api),
                runtime,
                notifier,
                search_key: options.search_key,
                state: RefCell::new(ListSnapshot::new(options.sort, options.page_size)),
                issued: Cell::new(0),
                search,
                observers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
                disposed: Cell::new(false),
            }
        });
        Self { inner }
    }

    pub fn api(&self) -> &A {
        &self.inner.api
    }

    // --- commands -----------------------------------------------------------

    /// Update one filter and go back to page 1.
    ///
    /// The search key is stored right away but its fetch waits for the
    /// quiet period; any other key fetches immediately. While the search is
    /// pending the list stays loading and responses to earlier requests are
    /// dropped, they no longer match the filters on screen.
    pub fn set_filter(&self, key: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        let input = value.as_input();
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let changed = state.filters.set(key, value);
            if changed {
                state.pagination.page = 1;
            }
            changed
        };
        if !changed {
            return;
        }

        if self.inner.search_key.as_deref() == Some(key) {
            self.supersede_in_flight();
            self.emit();
            self.inner.search.push(input);
        } else {
            self.issue_fetch();
        }
    }

    /// Several filters at once (date or amount ranges), one fetch.
    pub fn set_filters<K, V, I>(&self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FilterValue>,
    {
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let mut changed = false;
            for (key, value) in values {
                changed |= state.filters.set(key.as_ref(), value.into());
            }
            if changed {
                state.pagination.page = 1;
            }
            changed
        };
        if changed {
            self.issue_fetch();
        }
    }

    pub fn set_sort(&self, field: &str) {
        {
            let mut state = self.inner.state.borrow_mut();
            state.sort.toggle(field);
            state.pagination.page = 1;
        }
        self.issue_fetch();
    }

    /// Out-of-range pages are clamped, not rejected.
    pub fn set_page(&self, page: usize) {
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let target = state.pagination.clamp(page);
            if target == state.pagination.page && state.is_loaded {
                false
            } else {
                state.pagination.page = target;
                true
            }
        };
        if changed {
            self.issue_fetch();
        }
    }

    /// No-op on the last page.
    pub fn next_page(&self) {
        let next = {
            let state = self.inner.state.borrow();
            state
                .pagination
                .has_next()
                .then(|| state.pagination.page + 1)
        };
        if let Some(page) = next {
            self.set_page(page);
        }
    }

    /// No-op on the first page.
    pub fn previous_page(&self) {
        let previous = {
            let state = self.inner.state.borrow();
            state
                .pagination
                .has_previous()
                .then(|| state.pagination.page - 1)
        };
        if let Some(page) = previous {
            self.set_page(page);
        }
    }

    pub fn set_page_size(&self, size: usize) {
        let size = size.max(1);
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            if state.pagination.size == size {
                false
            } else {
                state.pagination.size = size;
                state.pagination.page = 1;
                true
            }
        };
        if changed {
            self.issue_fetch();
        }
    }

    pub fn reset_filters(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            state.filters.clear();
            state.pagination.page = 1;
        }
        self.issue_fetch();
    }

    /// Re-fetch the current page without touching any state.
    pub fn refresh(&self) {
        self.issue_fetch();
    }

    /// Screen teardown: cancel the pending search, drop observers and ignore
    /// responses still in flight.
    pub fn dispose(&self) {
        self.inner.disposed.set(true);
        self.inner.search.cancel();
        self.inner.observers.borrow_mut().clear();
    }

    // --- observation --------------------------------------------------------

    pub fn subscribe(&self, observer: impl Fn(&ListSnapshot<A::Item>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get() + 1);
        self.inner.next_subscription.set(id.0);
        let observer: Observer<A::Item> = Rc::new(observer);
        self.inner.observers.borrow_mut().push((id, observer));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .observers
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }

    pub fn snapshot(&self) -> ListSnapshot<A::Item> {
        self.inner.state.borrow().clone()
    }

    pub fn filter_value(&self, key: &str) -> FilterValue {
        self.inner.state.borrow().filters.get(key).clone()
    }

    /// Descriptor the next fetch would send.
    pub fn request_descriptor(&self) -> ListQuery {
        build_query(&self.inner.state.borrow())
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    // --- fetch protocol -----------------------------------------------------

    /// Invalidate outstanding requests without issuing a new one yet.
    fn supersede_in_flight(&self) {
        let seq = self.inner.issued.get() + 1;
        self.inner.issued.set(seq);
        self.inner.state.borrow_mut().loading = true;
        log::debug!("list requests before #{} superseded by pending search", seq);
    }

    fn issue_fetch(&self) {
        if self.inner.disposed.get() {
            return;
        }
        // the request below already carries the latest search text
        self.inner.search.cancel();

        let seq = self.inner.issued.get() + 1;
        self.inner.issued.set(seq);
        let query = {
            let mut state = self.inner.state.borrow_mut();
            state.loading = true;
            build_query(&state)
        };
        log::debug!("list request #{}: {:?}", seq, query);
        self.emit();

        let api = self.inner.api.clone();
        let this = Rc::downgrade(&self.inner);
        self.inner.runtime.spawn(Box::pin(async move {
            let result = api.fetch_page(&query).await;
            if let Some(inner) = this.upgrade() {
                ListQueryController { inner }.complete(seq, result);
            }
        }));
    }

    fn complete(&self, seq: u64, result: Result<ListResponse<A::Item>, ApiError>) {
        if self.inner.disposed.get() {
            return;
        }
        let latest = self.inner.issued.get();
        if seq != latest {
            log::debug!("dropping stale list response #{} (latest #{})", seq, latest);
            return;
        }

        match result {
            Ok(response) => {
                let out_of_range = {
                    let mut state = self.inner.state.borrow_mut();
                    let requested = state.pagination.page;
                    state.items = response.items;
                    state.pagination.apply_meta(&response.pagination);
                    state.loading = false;
                    state.is_loaded = true;
                    state.error = None;
                    state.pagination.page != requested
                };
                self.emit();
                if out_of_range {
                    log::debug!("page out of range after request #{}, reloading", seq);
                    self.issue_fetch();
                }
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("list request #{} failed: {}", seq, message);
                {
                    let mut state = self.inner.state.borrow_mut();
                    state.loading = false;
                    state.error = Some(message.clone());
                }
                self.emit();
                self.inner.notifier.show_error(&message);
            }
        }
    }

    fn emit(&self) {
        let observers: Vec<Observer<A::Item>> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        if observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in observers {
            observer(&snapshot);
        }
    }
}

impl<A: ListApi + 'static> Refresh for ListQueryController<A> {
    fn refresh(&self) {
        self.issue_fetch();
    }
}

fn build_query<T>(state: &ListSnapshot<T>) -> ListQuery {
    ListQuery {
        page: state.pagination.page,
        size: state.pagination.size,
        sort_by: state.sort.field.clone(),
        sort: state.sort.order,
        filters: state.filters.to_params(),
    }
}
