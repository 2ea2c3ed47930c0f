//! Wire contracts shared by the admin console and the pet-care REST API.

pub mod domain;
pub mod shared;
pub mod system;
