use crate::shared::context::ConsoleContext;
use crate::shared::list::{ListOptions, SortState};

pub const FILTER_QUERY: &str = "query";
pub const FILTER_ACTIVE: &str = "active";

pub fn list_options(ctx: &ConsoleContext) -> ListOptions {
    ListOptions::from_config(&ctx.config, SortState::new("name")).with_search_key(FILTER_QUERY)
}
