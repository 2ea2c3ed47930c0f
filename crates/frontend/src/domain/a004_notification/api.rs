use contracts::domain::a004_notification::{Notification, SendNotificationDto};
use std::rc::Rc;

use crate::shared::error::FieldErrors;
use crate::shared::http::{ApiClient, RestCollection};

pub const NOTIFICATIONS_PATH: &str = "/api/notifications";

pub type NotificationsApi = RestCollection<Notification, SendNotificationDto>;

pub fn notifications_api(client: &Rc<ApiClient>) -> NotificationsApi {
    RestCollection::new(client.clone(), NOTIFICATIONS_PATH)
}

pub fn validate(dto: &SendNotificationDto) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if dto.title.trim().is_empty() {
        errors.insert("title".to_string(), "Title is required".to_string());
    }
    if dto.body.trim().is_empty() {
        errors.insert("body".to_string(), "Message is required".to_string());
    }
    errors
}
