use std::sync::Arc;
use tracing::info;

use staybite_client::api::BookingApi;
use staybite_client::SessionStore;
use staybite_core::booking::Booking;

use crate::error::FlowError;

/// What came of a cancel attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    /// The user dismissed the confirmation dialog; nothing was sent.
    Declined,
    /// The booking is already CANCELLED; the action is a no-op with no
    /// network call.
    NotCancellable,
}

/// The "My Bookings" page: the user's own bookings plus an optional open
/// detail view.
pub struct MyBookingsFlow {
    api: Arc<dyn BookingApi>,
    session: Arc<SessionStore>,
    bookings: Vec<Booking>,
    selected: Option<String>,
}

impl MyBookingsFlow {
    pub fn new(api: Arc<dyn BookingApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            bookings: Vec::new(),
            selected: None,
        }
    }

    fn require_token(&self) -> Result<String, FlowError> {
        self.session.token().ok_or_else(|| FlowError::LoginRequired {
            message: "Please login to view your bookings".to_owned(),
            redirect_to_sign_in: false,
        })
    }

    /// Fetch the full list. The server expands each booking's PG/Room/Food
    /// reference for display.
    pub async fn load(&mut self) -> Result<(), FlowError> {
        let token = self.require_token()?;
        self.bookings = self.api.my_bookings(&token).await?;
        Ok(())
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Whether the detail view renders a cancel button for this booking.
    pub fn can_cancel(booking: &Booking) -> bool {
        booking.status.can_cancel()
    }

    pub fn open_detail(&mut self, id: &str) {
        if self.bookings.iter().any(|b| b.id == id) {
            self.selected = Some(id.to_owned());
        }
    }

    pub fn detail(&self) -> Option<&Booking> {
        let id = self.selected.as_deref()?;
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Cancel a booking. `confirmed` is the answer to the "are you sure?"
    /// dialog; without it nothing happens. On success the whole list is
    /// refetched (no optimistic patch) and an open detail view for that
    /// booking is closed.
    pub async fn cancel(&mut self, id: &str, confirmed: bool) -> Result<CancelOutcome, FlowError> {
        if !confirmed {
            return Ok(CancelOutcome::Declined);
        }
        let booking = self
            .bookings
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| FlowError::validation("Unknown booking"))?;
        if !booking.status.can_cancel() {
            return Ok(CancelOutcome::NotCancellable);
        }

        let token = self.require_token()?;
        self.api.cancel_booking(&token, id).await?;
        info!(booking = %id, "booking cancelled");

        self.bookings = self.api.my_bookings(&token).await?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Ok(CancelOutcome::Cancelled)
    }
}
