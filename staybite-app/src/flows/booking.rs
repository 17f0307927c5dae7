//! The booking request builders: date selection, validation, price
//! computation, submission. Shared by the PG and Room detail pages; the food
//! page uses the date-free variant.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use staybite_client::api::BookingApi;
use staybite_client::app_config::BookingPolicy;
use staybite_client::SessionStore;
use staybite_core::booking::CreateBookingRequest;
use staybite_core::catalog::{FoodItem, PgListing, RoomListing};
use staybite_core::pricing::{estimate_total, RateBasis};
use staybite_core::stay::{night_count, StayRange};

use crate::error::FlowError;

/// The date-picker state a detail page owns. Cleared automatically after a
/// successful submission.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BookingForm {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.check_in = None;
        self.check_out = None;
    }

    /// Nights as shown while the user is still picking: 0 when either date is
    /// missing or the range is inverted.
    pub fn nights(&self) -> i64 {
        night_count(self.check_in, self.check_out)
    }

    /// The "Total (est.)" line under the date pickers. None until a positive
    /// night count exists. Display only — the submitted amount is the
    /// listing's flat price, not this figure.
    pub fn estimated_total(&self, price: i64, basis: RateBasis) -> Option<i64> {
        let nights = self.nights();
        if nights > 0 {
            Some(estimate_total(price, basis, nights))
        } else {
            None
        }
    }
}

pub struct BookingFlow {
    api: Arc<dyn BookingApi>,
    session: Arc<SessionStore>,
    policy: BookingPolicy,
}

impl BookingFlow {
    pub fn new(api: Arc<dyn BookingApi>, session: Arc<SessionStore>, policy: BookingPolicy) -> Self {
        Self {
            api,
            session,
            policy,
        }
    }

    fn require_token(&self, message: &str, redirect: bool) -> Result<String, FlowError> {
        self.session.token().ok_or_else(|| FlowError::LoginRequired {
            message: message.to_owned(),
            redirect_to_sign_in: redirect,
        })
    }

    /// Book a PG stay. Validation short-circuits before any network call:
    /// auth, then both dates present, then check-out after check-in. One
    /// attempt; on success the form is cleared.
    pub async fn book_pg(&self, pg: &PgListing, form: &mut BookingForm) -> Result<(), FlowError> {
        let token =
            self.require_token("Please login to book this PG", self.policy.stay_login_redirect)?;
        let stay = StayRange::new(form.check_in, form.check_out)
            .map_err(|e| FlowError::Validation(e.to_string()))?;
        let amount = pg
            .flat_amount()
            .map_err(|e| FlowError::Validation(e.to_string()))?;

        let request = CreateBookingRequest::for_pg(&pg.id, amount, &stay);
        self.api.create_booking(&token, &request).await?;
        form.clear();
        info!(pg = %pg.id, amount, nights = stay.nights(), "PG booked");
        Ok(())
    }

    /// Same chain for a room; only the price source and the login message
    /// differ.
    pub async fn book_room(
        &self,
        room: &RoomListing,
        form: &mut BookingForm,
    ) -> Result<(), FlowError> {
        let token = self.require_token(
            "Please login to book this room",
            self.policy.stay_login_redirect,
        )?;
        let stay = StayRange::new(form.check_in, form.check_out)
            .map_err(|e| FlowError::Validation(e.to_string()))?;
        let amount = room
            .flat_amount()
            .map_err(|e| FlowError::Validation(e.to_string()))?;

        let request = CreateBookingRequest::for_room(&room.id, amount, &stay);
        self.api.create_booking(&token, &request).await?;
        form.clear();
        info!(room = %room.id, amount, nights = stay.nights(), "room booked");
        Ok(())
    }

    /// Order a food item: auth gate only, no dates, amount is the item's
    /// price verbatim. Fire-and-forget single POST.
    pub async fn order_food(&self, food: &FoodItem) -> Result<(), FlowError> {
        let token =
            self.require_token("Please login to order food", self.policy.food_login_redirect)?;

        let request = CreateBookingRequest::for_food(&food.id, food.price);
        self.api.create_booking(&token, &request).await?;
        info!(food = %food.id, amount = food.price, "food ordered");
        Ok(())
    }
}
