use crate::shared::context::ConsoleContext;
use crate::shared::list::{ListOptions, SortState};

pub const FILTER_STATUS: &str = "status";
pub const FILTER_MIN_AMOUNT: &str = "minAmount";
pub const FILTER_MAX_AMOUNT: &str = "maxAmount";

pub const NOTE_FIELD: &str = "note";
pub const NOTE_REQUIRED: &str = "A reason is required to reject a withdrawal";

pub fn list_options(ctx: &ConsoleContext) -> ListOptions {
    ListOptions::from_config(&ctx.config, SortState::new("requestedAt").descending())
}
