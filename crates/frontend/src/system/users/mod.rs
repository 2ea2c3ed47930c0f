//! Platform users: customers, providers and admins.

pub mod api;
pub mod ui;

pub use ui::list::UsersPage;
