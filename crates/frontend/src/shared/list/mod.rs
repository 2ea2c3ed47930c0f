//! Server-side paginated list screens.
//!
//! A screen owns one [`ListQueryController`] per table. Commands change
//! filter/sort/page state, the controller turns that state into a
//! [`ListQuery`] and fetches the page; subscribers get a [`ListSnapshot`]
//! after every change.

pub mod controller;
pub mod state;
pub mod view;

use async_trait::async_trait;
use contracts::shared::list::{ListQuery, ListResponse};

use super::error::ApiError;

pub use controller::{ListOptions, ListQueryController, SubscriptionId};
pub use state::{FilterState, FilterValue, ListSnapshot, PaginationState, SortState};
pub use view::use_list_controller;

/// Remote collection that can be read one page at a time.
#[async_trait(?Send)]
pub trait ListApi {
    type Item: Clone + 'static;

    async fn fetch_page(&self, query: &ListQuery) -> Result<ListResponse<Self::Item>, ApiError>;
}
