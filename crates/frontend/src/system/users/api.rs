use contracts::system::users::{UpdateUserDto, User};
use std::rc::Rc;

use crate::shared::http::{ApiClient, RestCollection};
use crate::shared::mutation::{MutationCoordinator, MutationOutcome};

pub const USERS_PATH: &str = "/api/users";

pub type UsersApi = RestCollection<User, UpdateUserDto>;

pub fn users_api(client: &Rc<ApiClient>) -> UsersApi {
    RestCollection::new(client.clone(), USERS_PATH)
}

/// Activate or block an account, keeping the rest of the profile as is.
pub async fn set_active(
    coordinator: &MutationCoordinator<UsersApi>,
    user: &User,
    active: bool,
) -> MutationOutcome<User> {
    let mut dto = UpdateUserDto::from(user);
    dto.is_active = active;
    coordinator.update(&user.id, &dto).await
}
