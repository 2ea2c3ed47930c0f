use std::rc::Rc;

use super::api_utils::ConsoleConfig;
use super::http::ApiClient;
use super::list::{ListApi, ListOptions, ListQueryController};
use super::mutation::{MutationCoordinator, Refresh};
use super::notify::{BrowserConfirm, ConfirmPrompt, Notifier};
use super::runtime::{BrowserRuntime, Runtime};
use crate::system::auth::session::SessionContext;

/// Collaborators a list screen needs, handed down explicitly.
#[derive(Clone)]
pub struct ConsoleContext {
    pub config: ConsoleConfig,
    pub client: Rc<ApiClient>,
    pub runtime: Rc<dyn Runtime>,
    pub notifier: Rc<dyn Notifier>,
    pub confirm: Rc<dyn ConfirmPrompt>,
}

impl ConsoleContext {
    pub fn new(
        config: ConsoleConfig,
        session: Rc<dyn SessionContext>,
        runtime: Rc<dyn Runtime>,
        notifier: Rc<dyn Notifier>,
        confirm: Rc<dyn ConfirmPrompt>,
    ) -> Self {
        let client = Rc::new(ApiClient::new(config.clone(), session));
        Self {
            config,
            client,
            runtime,
            notifier,
            confirm,
        }
    }

    /// Browser event loop and `window.confirm`.
    pub fn browser(
        config: ConsoleConfig,
        session: Rc<dyn SessionContext>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self::new(
            config,
            session,
            Rc::new(BrowserRuntime),
            notifier,
            Rc::new(BrowserConfirm),
        )
    }

    pub fn list_controller<A>(&self, api: A, options: ListOptions) -> ListQueryController<A>
    where
        A: ListApi + 'static,
    {
        ListQueryController::new(api, self.runtime.clone(), self.notifier.clone(), options)
    }

    /// Coordinator whose successes refresh `list`.
    pub fn coordinator<M>(&self, api: M, list: Rc<dyn Refresh>) -> MutationCoordinator<M> {
        MutationCoordinator::new(
            Rc::new(api),
            list,
            self.notifier.clone(),
            self.confirm.clone(),
        )
    }
}
