//! Provider payout requests and their approval workflow.

pub mod api;
pub mod ui;

pub use ui::list::WithdrawalsPage;
