pub mod state;

use chrono::NaiveDate;
use contracts::domain::a003_withdrawal::{Withdrawal, WithdrawalAction};
use std::rc::Rc;

use crate::domain::a003_withdrawal::api::WithdrawalsApi;
use crate::shared::context::ConsoleContext;
use crate::shared::error::FieldErrors;
use crate::shared::list::ListQueryController;
use crate::shared::list_utils::set_date_range;
use crate::shared::mutation::{MutationCoordinator, MutationOutcome};
use state::{list_options, FILTER_MAX_AMOUNT, FILTER_MIN_AMOUNT, NOTE_FIELD, NOTE_REQUIRED};

fn success_message(action: WithdrawalAction) -> &'static str {
    match action {
        WithdrawalAction::Approve => "Withdrawal approved",
        WithdrawalAction::Reject => "Withdrawal rejected",
        WithdrawalAction::Complete => "Withdrawal marked as completed",
    }
}

/// Apply `action` to `withdrawal` through `coordinator`.
///
/// Transitions not allowed from the current status fail without a request;
/// rejecting needs a non-blank note.
pub async fn apply_action(
    coordinator: &MutationCoordinator<WithdrawalsApi>,
    withdrawal: &Withdrawal,
    action: WithdrawalAction,
    note: Option<String>,
) -> MutationOutcome<Withdrawal> {
    if !action.allowed_from(withdrawal.status) {
        let message = format!(
            "Cannot {} a {} withdrawal",
            action.as_path(),
            withdrawal.status.as_str()
        );
        coordinator.fail(&message);
        return MutationOutcome::Failed(message);
    }

    let note = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    if action.requires_note() && note.is_none() {
        let mut fields = FieldErrors::new();
        fields.insert(NOTE_FIELD.to_string(), NOTE_REQUIRED.to_string());
        coordinator.invalidate(fields.clone());
        return MutationOutcome::Invalid(fields);
    }

    let api = coordinator.api();
    coordinator
        .perform(
            success_message(action),
            api.transition(&withdrawal.id, action, note),
        )
        .await
}

pub struct WithdrawalsPage {
    pub list: ListQueryController<WithdrawalsApi>,
    pub actions: MutationCoordinator<WithdrawalsApi>,
}

impl WithdrawalsPage {
    pub fn new(ctx: &ConsoleContext) -> Self {
        let list = ctx.list_controller(WithdrawalsApi::new(&ctx.client), list_options(ctx));
        let actions = ctx.coordinator(WithdrawalsApi::new(&ctx.client), Rc::new(list.clone()));
        Self { list, actions }
    }

    pub fn set_amount_range(&self, min: Option<f64>, max: Option<f64>) {
        let (min, max) = match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
            other => other,
        };
        self.list
            .set_filters([(FILTER_MIN_AMOUNT, min), (FILTER_MAX_AMOUNT, max)]);
    }

    pub fn set_requested_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        set_date_range(&self.list, from, to);
    }

    pub async fn apply(
        &self,
        withdrawal: &Withdrawal,
        action: WithdrawalAction,
        note: Option<String>,
    ) -> MutationOutcome<Withdrawal> {
        apply_action(&self.actions, withdrawal, action, note).await
    }
}
