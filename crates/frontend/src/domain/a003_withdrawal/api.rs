use async_trait::async_trait;
use contracts::domain::a003_withdrawal::{TransitionRequest, Withdrawal, WithdrawalAction};
use contracts::shared::list::{ListQuery, ListResponse};
use std::rc::Rc;

use crate::shared::error::ApiError;
use crate::shared::http::{ApiClient, RestCollection};
use crate::shared::list::ListApi;

pub const WITHDRAWALS_PATH: &str = "/api/withdrawals";

/// Withdrawals are never created or edited from the console, only moved
/// through their statuses.
#[derive(Clone)]
pub struct WithdrawalsApi {
    collection: RestCollection<Withdrawal, TransitionRequest>,
}

impl WithdrawalsApi {
    pub fn new(client: &Rc<ApiClient>) -> Self {
        Self {
            collection: RestCollection::new(client.clone(), WITHDRAWALS_PATH),
        }
    }

    /// `PATCH /api/withdrawals/{id}/{action}`
    pub fn transition_path(&self, id: &str, action: WithdrawalAction) -> String {
        format!("{}/{}", self.collection.record_path(id), action.as_path())
    }

    pub async fn transition(
        &self,
        id: &str,
        action: WithdrawalAction,
        note: Option<String>,
    ) -> Result<Withdrawal, ApiError> {
        let path = self.transition_path(id, action);
        log::debug!("withdrawal {} -> {}", id, action.target().as_str());
        self.collection
            .client()
            .patch_json(&path, &TransitionRequest { note })
            .await
    }
}

#[async_trait(?Send)]
impl ListApi for WithdrawalsApi {
    type Item = Withdrawal;

    async fn fetch_page(&self, query: &ListQuery) -> Result<ListResponse<Withdrawal>, ApiError> {
        self.collection.fetch_page(query).await
    }
}
