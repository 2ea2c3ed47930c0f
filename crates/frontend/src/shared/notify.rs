//! User feedback capabilities used by list screens and forms.

use leptos::prelude::*;

pub trait Notifier {
    fn show_success(&self, message: &str);
    fn show_error(&self, message: &str);
}

/// Asked before destructive operations.
pub trait ConfirmPrompt {
    fn confirm(&self, description: &str) -> bool;
}

/// Notifier that only writes to the console log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_success(&self, message: &str) {
        log::info!("{}", message);
    }

    fn show_error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// `window.confirm`. Declines when there is no window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, description: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(description).ok())
            .unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Signal-backed toast list for the layout to render.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn show_success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn show_error(&self, message: &str) {
        log::warn!("{}", message);
        self.push(ToastKind::Error, message);
    }
}
