use crate::shared::context::ConsoleContext;
use crate::shared::list::{ListOptions, SortState};

pub const FILTER_QUERY: &str = "query";
pub const FILTER_STATUS: &str = "status";

pub fn list_options(ctx: &ConsoleContext) -> ListOptions {
    ListOptions::from_config(&ctx.config, SortState::new("scheduledAt").descending())
        .with_search_key(FILTER_QUERY)
}
