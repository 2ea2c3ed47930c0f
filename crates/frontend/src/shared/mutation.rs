//! Create/update/delete of a single record with outcome classification.

use async_trait::async_trait;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use super::error::{ApiError, FieldErrors, VALIDATION_PROMPT};
use super::notify::{ConfirmPrompt, Notifier};

pub const CREATED_MESSAGE: &str = "Created successfully";
pub const SAVED_MESSAGE: &str = "Saved successfully";
pub const DELETED_MESSAGE: &str = "Deleted successfully";

/// Something that can reload the data it displays.
pub trait Refresh {
    fn refresh(&self);
}

/// Write side of a REST collection.
#[async_trait(?Send)]
pub trait MutationApi {
    type Record;
    type Payload;

    async fn create(&self, payload: &Self::Payload) -> Result<Self::Record, ApiError>;
    async fn update(&self, id: &str, payload: &Self::Payload) -> Result<Self::Record, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Completed(T),
    /// Server (or a local pre-check) rejected individual fields.
    Invalid(FieldErrors),
    Failed(String),
    /// The user declined the confirmation prompt.
    Cancelled,
    /// Another mutation of the same form was still running, nothing was sent.
    Busy,
}

impl<T> MutationOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, MutationOutcome::Completed(_))
    }
}

#[derive(Debug, Default)]
struct FormErrors {
    fields: FieldErrors,
    general: Option<String>,
    pending: bool,
}

/// Runs one mutation at a time for a form or modal and keeps its errors.
///
/// On success the notifier gets one message and the bound list one
/// `refresh()`. Validation failures land in [`field_error`](Self::field_error)
/// with the fixed prompt as general text; anything else becomes the general
/// error and goes to the error notifier.
pub struct MutationCoordinator<M> {
    api: Rc<M>,
    list: Rc<dyn Refresh>,
    notifier: Rc<dyn Notifier>,
    confirm: Rc<dyn ConfirmPrompt>,
    errors: RefCell<FormErrors>,
}

impl<M> MutationCoordinator<M> {
    pub fn new(
        api: Rc<M>,
        list: Rc<dyn Refresh>,
        notifier: Rc<dyn Notifier>,
        confirm: Rc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            api,
            list,
            notifier,
            confirm,
            errors: RefCell::new(FormErrors::default()),
        }
    }

    pub fn api(&self) -> &M {
        &self.api
    }

    /// Run an arbitrary call (state transitions and the like) through the
    /// same success/failure handling as create/update/delete.
    ///
    /// One call at a time: while a mutation is pending further calls return
    /// [`MutationOutcome::Busy`] without polling `call`.
    pub async fn perform<T, F>(&self, success_message: &str, call: F) -> MutationOutcome<T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        {
            let mut errors = self.errors.borrow_mut();
            if errors.pending {
                log::debug!("mutation ignored, previous one still pending");
                return MutationOutcome::Busy;
            }
            errors.fields.clear();
            errors.general = None;
            errors.pending = true;
        }

        let result = call.await;
        self.errors.borrow_mut().pending = false;

        match result {
            Ok(value) => {
                self.notifier.show_success(success_message);
                self.list.refresh();
                MutationOutcome::Completed(value)
            }
            Err(ApiError::Validation(fields)) => {
                log::debug!("validation failed on {:?}", fields.keys().collect::<Vec<_>>());
                self.invalidate(fields.clone());
                MutationOutcome::Invalid(fields)
            }
            Err(ApiError::General(message)) => {
                self.fail(&message);
                MutationOutcome::Failed(message)
            }
        }
    }

    /// Annotate fields without a server round-trip.
    pub fn invalidate(&self, fields: FieldErrors) {
        {
            let mut errors = self.errors.borrow_mut();
            errors.fields = fields;
            errors.general = Some(VALIDATION_PROMPT.to_string());
        }
        self.notifier.show_error(VALIDATION_PROMPT);
    }

    /// Report a general failure.
    pub fn fail(&self, message: &str) {
        log::warn!("mutation failed: {}", message);
        self.errors.borrow_mut().general = Some(message.to_string());
        self.notifier.show_error(message);
    }

    /// The user edited `field`; its error goes away immediately.
    pub fn clear_field_error(&self, field: &str) -> bool {
        let mut errors = self.errors.borrow_mut();
        let removed = errors.fields.remove(field).is_some();
        if removed && errors.fields.is_empty() {
            errors.general = None;
        }
        removed
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.borrow().fields.get(field).cloned()
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.errors.borrow().fields.clone()
    }

    pub fn general_error(&self) -> Option<String> {
        self.errors.borrow().general.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.errors.borrow().pending
    }

    /// Forget all errors, e.g. when the modal closes.
    pub fn reset(&self) {
        *self.errors.borrow_mut() = FormErrors::default();
    }
}

impl<M: MutationApi> MutationCoordinator<M> {
    pub async fn create(&self, payload: &M::Payload) -> MutationOutcome<M::Record> {
        let api = self.api.clone();
        self.perform(CREATED_MESSAGE, api.create(payload)).await
    }

    pub async fn update(&self, id: &str, payload: &M::Payload) -> MutationOutcome<M::Record> {
        let api = self.api.clone();
        self.perform(SAVED_MESSAGE, api.update(id, payload)).await
    }

    /// Asks `description` first; nothing is sent if the user declines.
    pub async fn delete(&self, id: &str, description: &str) -> MutationOutcome<()> {
        if self.is_pending() {
            return MutationOutcome::Busy;
        }
        if !self.confirm.confirm(description) {
            return MutationOutcome::Cancelled;
        }
        let api = self.api.clone();
        self.perform(DELETED_MESSAGE, api.delete(id)).await
    }
}
