pub mod state;

use contracts::system::users::User;
use std::rc::Rc;

use crate::system::users::api::{users_api, UsersApi};
use crate::shared::context::ConsoleContext;
use crate::shared::list::ListQueryController;
use crate::shared::mutation::{MutationCoordinator, MutationOutcome};
use state::list_options;

/// Users table plus the edit/delete modal behind it.
pub struct UsersPage {
    pub list: ListQueryController<UsersApi>,
    pub editor: MutationCoordinator<UsersApi>,
}

impl UsersPage {
    pub fn new(ctx: &ConsoleContext) -> Self {
        let list = ctx.list_controller(users_api(&ctx.client), list_options(ctx));
        let editor = ctx.coordinator(users_api(&ctx.client), Rc::new(list.clone()));
        Self { list, editor }
    }

    pub async fn delete(&self, user: &User) -> MutationOutcome<()> {
        let description = format!("Delete user {} ({})?", user.full_name, user.email);
        self.editor.delete(&user.id, &description).await
    }
}
