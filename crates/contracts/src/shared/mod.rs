pub mod error;
pub mod list;
