//! Push notifications sent to customers and providers.

pub mod api;
pub mod ui;

pub use ui::list::NotificationsPage;
