use chrono::NaiveDate;
use contracts::shared::list::{PageMeta, SortOrder};
use std::collections::BTreeMap;

/// Value of a single list filter.
///
/// `Empty` and blank text both mean "no constraint" and never reach the
/// request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterValue {
    #[default]
    Empty,
    Text(String),
    Flag(bool),
    Number(f64),
    Date(NaiveDate),
}

static NO_CONSTRAINT: FilterValue = FilterValue::Empty;

impl FilterValue {
    pub fn is_empty(&self) -> bool {
        self.to_param().is_none()
    }

    /// Query string form, `None` for unconstrained values.
    pub fn to_param(&self) -> Option<String> {
        match self {
            FilterValue::Empty => None,
            FilterValue::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            FilterValue::Flag(flag) => Some(flag.to_string()),
            FilterValue::Number(n) if n.is_finite() => Some(n.to_string()),
            FilterValue::Number(_) => None,
            FilterValue::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        }
    }

    /// Raw text for binding back into an input.
    pub fn as_input(&self) -> String {
        match self {
            FilterValue::Text(text) => text.clone(),
            other => other.to_param().unwrap_or_default(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        FilterValue::Date(value)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Current filter values of one list screen, keyed by query parameter name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn get(&self, key: &str) -> &FilterValue {
        self.values.get(key).unwrap_or(&NO_CONSTRAINT)
    }

    /// Returns `false` when the stored value was already equal.
    pub fn set(&mut self, key: &str, value: FilterValue) -> bool {
        if self.get(key) == &value {
            return false;
        }
        self.values.insert(key.to_string(), value);
        true
    }

    /// Every known key back to `Empty`.
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            *value = FilterValue::Empty;
        }
    }

    pub fn is_constrained(&self) -> bool {
        self.values.values().any(|v| !v.is_empty())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Constrained keys only, ready for the request.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .filter_map(|(key, value)| value.to_param().map(|p| (key.clone(), p)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn descending(mut self) -> Self {
        self.order = SortOrder::Desc;
        self
    }

    /// Same field flips the order, a new field starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.order = self.order.toggled();
        } else {
            self.field = field.to_string();
            self.order = SortOrder::Asc;
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.order == SortOrder::Asc
    }
}

/// Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
    pub total_elements: usize,
}

impl PaginationState {
    pub fn new(size: usize) -> Self {
        Self {
            page: 1,
            size: size.max(1),
            total_pages: 0,
            total_elements: 0,
        }
    }

    pub fn last_page(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.last_page())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Take totals from a response and pull `page` back into range.
    ///
    /// Some endpoints only report the item count; pages are derived from it
    /// then.
    pub fn apply_meta(&mut self, meta: &PageMeta) {
        if meta.page_size > 0 {
            self.size = meta.page_size;
        }
        self.total_elements = meta.total_item;
        self.total_pages = if meta.total_page == 0 && meta.total_item > 0 {
            meta.total_item.div_ceil(self.size)
        } else {
            meta.total_page
        };
        self.page = self.clamp(self.page);
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(crate::shared::api_utils::DEFAULT_PAGE_SIZE)
    }
}

/// Everything a list screen renders, handed to subscribers on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub filters: FilterState,
    pub sort: SortState,
    pub pagination: PaginationState,
    pub loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
}

impl<T> ListSnapshot<T> {
    pub fn new(sort: SortState, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filters: FilterState::default(),
            sort,
            pagination: PaginationState::new(page_size),
            loading: false,
            is_loaded: false,
            error: None,
        }
    }
}
