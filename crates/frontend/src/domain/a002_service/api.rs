use contracts::domain::a002_service::{Service, ServiceDto};
use std::rc::Rc;

use crate::shared::error::FieldErrors;
use crate::shared::http::{ApiClient, RestCollection};

pub const SERVICES_PATH: &str = "/api/services";

pub type ServicesApi = RestCollection<Service, ServiceDto>;

pub fn services_api(client: &Rc<ApiClient>) -> ServicesApi {
    RestCollection::new(client.clone(), SERVICES_PATH)
}

/// Checks the form can catch before a round-trip.
pub fn validate(dto: &ServiceDto) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if dto.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }
    if !dto.price.is_finite() || dto.price < 0.0 {
        errors.insert("price".to_string(), "Price must be zero or more".to_string());
    }
    if dto.duration_minutes == 0 {
        errors.insert(
            "durationMinutes".to_string(),
            "Duration must be at least one minute".to_string(),
        );
    }
    errors
}
