use std::cell::RefCell;

use super::storage;

/// Access to the signed-in admin's token.
///
/// Passed explicitly into the HTTP client instead of being read from
/// ambient storage.
pub trait SessionContext {
    fn token(&self) -> Option<String>;
    fn clear(&self);
}

/// Token kept in `localStorage`, surviving reloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl BrowserSession {
    pub fn store(&self, token: &str) {
        storage::save_access_token(token);
    }
}

impl SessionContext for BrowserSession {
    fn token(&self) -> Option<String> {
        storage::get_access_token().filter(|t| !t.is_empty())
    }

    fn clear(&self) {
        log::info!("clearing stored session");
        storage::clear_tokens();
    }
}

/// In-memory session, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
}

impl MemorySession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl SessionContext for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// `Authorization` header value for the current session.
pub fn bearer(session: &dyn SessionContext) -> Option<String> {
    session.token().map(|token| format!("Bearer {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session() {
        let session = MemorySession::new("abc");
        assert_eq!(bearer(&session).as_deref(), Some("Bearer abc"));
        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(bearer(&session), None);
    }
}
