use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use staybite_shared::models::UserProfile;

use crate::catalog::{FoodItem, PgListing, RoomListing};
use crate::stay::StayRange;

/// Booking lifecycle. Created PENDING by the client; moved by admin action
/// (confirm/reject) or by the owning user (cancel).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// The cancel affordance is shown only for non-terminal states.
    pub fn can_cancel(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Admin accept/reject buttons render only while a booking is PENDING.
    pub fn awaiting_admin_action(self) -> bool {
        self == BookingStatus::Pending
    }

    /// Transitions observed in the UI. CANCELLED is terminal, and CONFIRMED
    /// never moves back to PENDING.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// Which catalog entity a booking points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingType {
    Pg,
    Room,
    Food,
}

/// A booking as `/api/bookings` returns it: the referenced PG/Room/Food (and
/// owning user, on admin listings) come back expanded for display. `amount`
/// is snapshotted at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
    pub booking_type: BookingType,
    pub amount: i64,
    #[serde(default)]
    pub pg: Option<PgListing>,
    #[serde(default)]
    pub room: Option<RoomListing>,
    #[serde(default)]
    pub food: Option<FoodItem>,
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Display name of whichever entity this booking references.
    pub fn item_name(&self) -> Option<&str> {
        match self.booking_type {
            BookingType::Pg => self.pg.as_ref().map(|p| p.name.as_str()),
            BookingType::Room => self.room.as_ref().map(|r| r.name.as_str()),
            BookingType::Food => self.food.as_ref().map(|f| f.name.as_str()),
        }
    }
}

/// Payload for `POST /api/bookings`. Exactly one of pg/room/food is set,
/// matching `booking_type`; dates travel only for stays.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
    pub booking_type: BookingType,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
}

impl CreateBookingRequest {
    pub fn for_pg(pg_id: &str, amount: i64, stay: &StayRange) -> Self {
        Self {
            pg: Some(pg_id.to_owned()),
            room: None,
            food: None,
            booking_type: BookingType::Pg,
            amount,
            check_in: Some(stay.check_in()),
            check_out: Some(stay.check_out()),
        }
    }

    pub fn for_room(room_id: &str, amount: i64, stay: &StayRange) -> Self {
        Self {
            pg: None,
            room: Some(room_id.to_owned()),
            food: None,
            booking_type: BookingType::Room,
            amount,
            check_in: Some(stay.check_in()),
            check_out: Some(stay.check_out()),
        }
    }

    pub fn for_food(food_id: &str, amount: i64) -> Self {
        Self {
            pg: None,
            room: None,
            food: Some(food_id.to_owned()),
            booking_type: BookingType::Food,
            amount,
            check_in: None,
            check_out: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_offered_for_pending_and_confirmed_only() {
        assert!(BookingStatus::Pending.can_cancel());
        assert!(BookingStatus::Confirmed.can_cancel());
        assert!(!BookingStatus::Cancelled.can_cancel());
    }

    #[test]
    fn cancelled_is_terminal() {
        for next in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert!(!BookingStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn confirmed_never_returns_to_pending() {
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
    }

    #[test]
    fn pg_request_serializes_without_food_or_room_keys() {
        let stay = StayRange::new(
            Some("2024-05-01".parse().unwrap()),
            Some("2024-05-04".parse().unwrap()),
        )
        .unwrap();
        let req = CreateBookingRequest::for_pg("665f1c2e9b1d2a0012a4e222", 6000, &stay);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["bookingType"], "PG");
        assert_eq!(json["amount"], 6000);
        assert_eq!(json["checkIn"], "2024-05-01");
        assert_eq!(json["checkOut"], "2024-05-04");
        assert!(json.get("room").is_none());
        assert!(json.get("food").is_none());
    }

    #[test]
    fn food_request_carries_no_dates() {
        let req = CreateBookingRequest::for_food("665f1c2e9b1d2a0012a4e333", 249);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["bookingType"], "FOOD");
        assert!(json.get("checkIn").is_none());
        assert!(json.get("checkOut").is_none());
    }

    #[test]
    fn booking_deserializes_expanded_wire_shape() {
        let json = r#"{
            "_id": "665f1c2e9b1d2a0012a4e444",
            "bookingType": "FOOD",
            "amount": 249,
            "food": {
                "_id": "665f1c2e9b1d2a0012a4e333",
                "name": "Butter Chicken",
                "price": 249,
                "type": "Non-Veg",
                "category": "Dinner"
            },
            "status": "PENDING",
            "createdAt": "2024-05-01T10:15:00.000Z"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.item_name(), Some("Butter Chicken"));
        assert!(booking.check_in.is_none());
    }
}
