//! Bookings: customer appointments with providers.

pub mod api;
pub mod ui;

pub use ui::list::BookingsPage;
