//! Service catalogue: grooming, boarding, vet visits and the like.

pub mod api;
pub mod ui;

pub use ui::list::ServicesPage;
