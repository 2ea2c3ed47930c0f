pub mod api_utils;
pub mod context;
pub mod debounce;
pub mod error;
pub mod http;
pub mod list;
pub mod list_utils;
pub mod mutation;
pub mod notify;
pub mod runtime;

#[cfg(test)]
pub(crate) mod testing;
