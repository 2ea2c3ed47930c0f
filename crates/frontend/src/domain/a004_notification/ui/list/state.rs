use crate::shared::context::ConsoleContext;
use crate::shared::list::{ListOptions, SortState};

pub const FILTER_QUERY: &str = "query";
/// system / promotion / booking / payment
pub const FILTER_TYPE: &str = "type";
pub const FILTER_IS_READ: &str = "isRead";

pub fn list_options(ctx: &ConsoleContext) -> ListOptions {
    ListOptions::from_config(&ctx.config, SortState::new("createdAt").descending())
        .with_search_key(FILTER_QUERY)
}
