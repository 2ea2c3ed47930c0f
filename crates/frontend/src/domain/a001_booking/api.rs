use contracts::domain::a001_booking::{Booking, UpdateBookingDto};
use std::rc::Rc;

use crate::shared::http::{ApiClient, RestCollection};

pub const BOOKINGS_PATH: &str = "/api/bookings";

pub type BookingsApi = RestCollection<Booking, UpdateBookingDto>;

pub fn bookings_api(client: &Rc<ApiClient>) -> BookingsApi {
    RestCollection::new(client.clone(), BOOKINGS_PATH)
}
