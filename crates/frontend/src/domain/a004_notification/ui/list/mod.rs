pub mod state;

use contracts::domain::a004_notification::{Notification, SendNotificationDto};
use std::rc::Rc;

use crate::domain::a004_notification::api::{notifications_api, validate, NotificationsApi};
use crate::shared::context::ConsoleContext;
use crate::shared::list::ListQueryController;
use crate::shared::mutation::{MutationCoordinator, MutationOutcome};
use state::list_options;

pub struct NotificationsPage {
    pub list: ListQueryController<NotificationsApi>,
    pub composer: MutationCoordinator<NotificationsApi>,
}

impl NotificationsPage {
    pub fn new(ctx: &ConsoleContext) -> Self {
        let list = ctx.list_controller(notifications_api(&ctx.client), list_options(ctx));
        let composer = ctx.coordinator(notifications_api(&ctx.client), Rc::new(list.clone()));
        Self { list, composer }
    }

    /// Blank recipient means broadcast.
    pub async fn send(&self, mut dto: SendNotificationDto) -> MutationOutcome<Notification> {
        dto.recipient_id = dto
            .recipient_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        let errors = validate(&dto);
        if !errors.is_empty() {
            self.composer.invalidate(errors.clone());
            return MutationOutcome::Invalid(errors);
        }
        self.composer.create(&dto).await
    }

    pub async fn delete(&self, notification: &Notification) -> MutationOutcome<()> {
        let description = format!("Delete notification \"{}\"?", notification.title);
        self.composer.delete(&notification.id, &description).await
    }
}
