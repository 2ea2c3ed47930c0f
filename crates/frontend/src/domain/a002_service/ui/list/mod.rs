pub mod state;

use contracts::domain::a002_service::{Service, ServiceDto};
use std::rc::Rc;

use crate::domain::a002_service::api::{services_api, validate, ServicesApi};
use crate::shared::context::ConsoleContext;
use crate::shared::list::ListQueryController;
use crate::shared::mutation::{MutationCoordinator, MutationOutcome};
use state::list_options;

pub struct ServicesPage {
    pub list: ListQueryController<ServicesApi>,
    pub editor: MutationCoordinator<ServicesApi>,
}

impl ServicesPage {
    pub fn new(ctx: &ConsoleContext) -> Self {
        let list = ctx.list_controller(services_api(&ctx.client), list_options(ctx));
        let editor = ctx.coordinator(services_api(&ctx.client), Rc::new(list.clone()));
        Self { list, editor }
    }

    /// Create when `id` is `None`, update otherwise. Local field errors stop
    /// the request.
    pub async fn save(&self, id: Option<&str>, dto: &ServiceDto) -> MutationOutcome<Service> {
        let errors = validate(dto);
        if !errors.is_empty() {
            self.editor.invalidate(errors.clone());
            return MutationOutcome::Invalid(errors);
        }
        match id {
            Some(id) => self.editor.update(id, dto).await,
            None => self.editor.create(dto).await,
        }
    }

    pub async fn delete(&self, service: &Service) -> MutationOutcome<()> {
        let description = format!("Delete service \"{}\"?", service.name);
        self.editor.delete(&service.id, &description).await
    }
}
