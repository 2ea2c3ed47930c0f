pub mod state;

use chrono::NaiveDate;
use contracts::domain::a001_booking::{Booking, UpdateBookingDto};
use std::rc::Rc;

use crate::domain::a001_booking::api::{bookings_api, BookingsApi};
use crate::shared::context::ConsoleContext;
use crate::shared::list::ListQueryController;
use crate::shared::list_utils::set_date_range;
use crate::shared::mutation::{MutationCoordinator, MutationOutcome};
use state::list_options;

pub struct BookingsPage {
    pub list: ListQueryController<BookingsApi>,
    pub editor: MutationCoordinator<BookingsApi>,
}

impl BookingsPage {
    pub fn new(ctx: &ConsoleContext) -> Self {
        let list = ctx.list_controller(bookings_api(&ctx.client), list_options(ctx));
        let editor = ctx.coordinator(bookings_api(&ctx.client), Rc::new(list.clone()));
        Self { list, editor }
    }

    pub fn set_scheduled_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        set_date_range(&self.list, from, to);
    }

    /// Move a booking to `status`, keeping its note unless a new one is given.
    pub async fn change_status(
        &self,
        booking: &Booking,
        status: &str,
        note: Option<String>,
    ) -> MutationOutcome<Booking> {
        let dto = UpdateBookingDto {
            status: status.to_string(),
            note: note.or_else(|| booking.note.clone()),
        };
        self.editor.update(&booking.id, &dto).await
    }
}
