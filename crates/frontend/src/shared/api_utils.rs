//! API utilities for frontend-backend communication
//!
//! Provides the API base URL and the console-wide list settings.

use std::time::Duration;

use super::debounce::DEFAULT_QUIET_PERIOD;

/// Port the REST API listens on, next to the host serving the console.
pub const API_PORT: u16 = 3000;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleConfig {
    pub api_base: String,
    pub page_size: usize,
    pub search_debounce: Duration,
}

impl ConsoleConfig {
    /// Defaults with the API base taken from the browser location.
    pub fn from_location() -> Self {
        Self {
            api_base: api_base(),
            ..Self::default()
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust
    /// use petcare_admin::shared::api_utils::ConsoleConfig;
    ///
    /// let config = ConsoleConfig::default().with_api_base("http://localhost:3000/");
    /// assert_eq!(config.url("/api/users"), "http://localhost:3000/api/users");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: DEFAULT_QUIET_PERIOD,
        }
    }
}
