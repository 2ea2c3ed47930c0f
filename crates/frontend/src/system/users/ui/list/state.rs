use crate::shared::context::ConsoleContext;
use crate::shared::list::{ListOptions, SortState};

pub const FILTER_QUERY: &str = "query";
/// customer / provider / admin
pub const FILTER_ROLE: &str = "role";
/// active / inactive
pub const FILTER_STATUS: &str = "status";

pub fn list_options(ctx: &ConsoleContext) -> ListOptions {
    ListOptions::from_config(&ctx.config, SortState::new("createdAt").descending())
        .with_search_key(FILTER_QUERY)
}
