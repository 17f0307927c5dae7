use serde::{Deserialize, Serialize};

use crate::pricing;
use crate::{CoreError, CoreResult};

/// PG occupancy type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PgType {
    Boys,
    Girls,
    #[serde(rename = "Co-Living")]
    CoLiving,
}

/// Room configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Triple,
}

/// Dietary type of a food item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FoodType {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

/// Meal category of a food item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FoodCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Beverages,
}

/// A PG listing as the catalog endpoints return it. Rent is a
/// display-formatted string ("₹6,527"); `price` is the canonical numeric
/// field when the server carries one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PgListing {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub location: Option<String>,
    pub rent: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(rename = "type")]
    pub pg_type: PgType,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PgListing {
    /// Amount recorded against a booking of this PG. Flat per listing; the
    /// nights-scaled figure on the booking card is an estimate only.
    pub fn flat_amount(&self) -> CoreResult<i64> {
        pricing::flat_amount(self.price, &self.rent)
            .ok_or_else(|| CoreError::PriceError(format!("PG {:?} rent {:?}", self.id, self.rent)))
    }
}

/// A room listing. `price` is the display string; `numeric_price` the
/// canonical nightly rate when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListing {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub price: String,
    #[serde(default)]
    pub numeric_price: Option<i64>,
    #[serde(rename = "type", default)]
    pub room_type: Option<RoomType>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RoomListing {
    pub fn flat_amount(&self) -> CoreResult<i64> {
        pricing::flat_amount(self.numeric_price, &self.price).ok_or_else(|| {
            CoreError::PriceError(format!("room {:?} price {:?}", self.id, self.price))
        })
    }
}

/// A food item. Price is numeric on the wire and submitted verbatim when
/// ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub food_type: FoodType,
    pub category: FoodCategory,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Admin create/update payload for a PG. Image URLs are already split out of
/// the comma-separated form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PgDraft {
    pub name: String,
    pub city: String,
    pub location: String,
    pub rent: String,
    #[serde(rename = "type")]
    pub pg_type: PgType,
    pub images: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDraft {
    pub name: String,
    pub price: String,
    pub city: String,
    pub location: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    pub images: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDraft {
    pub name: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub food_type: FoodType,
    pub category: FoodCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pg(rent: &str, price: Option<i64>) -> PgListing {
        PgListing {
            id: "665f1c2e9b1d2a0012a4e222".into(),
            name: "Sunrise PG".into(),
            city: "Pune".into(),
            location: Some("Kothrud".into()),
            rent: rent.into(),
            price,
            pg_type: PgType::Boys,
            images: vec![],
            features: vec![],
            rating: Some(4.5),
            reviews: vec![],
            description: None,
        }
    }

    #[test]
    fn pg_amount_prefers_numeric_field() {
        assert_eq!(pg("₹6,527", Some(7000)).flat_amount().unwrap(), 7000);
        assert_eq!(pg("₹6,527", None).flat_amount().unwrap(), 6527);
    }

    #[test]
    fn pg_without_digits_anywhere_is_an_error() {
        let err = pg("negotiable", None).flat_amount().unwrap_err();
        assert!(matches!(err, CoreError::PriceError(_)));
    }

    #[test]
    fn listing_deserializes_from_wire_shape() {
        let json = r#"{
            "_id": "665f1c2e9b1d2a0012a4e222",
            "name": "Sunrise PG",
            "city": "Pune",
            "rent": "₹6,527",
            "type": "Co-Living",
            "images": ["a.jpg"],
            "features": ["Wi-Fi", "AC"],
            "rating": 4.5
        }"#;
        let listing: PgListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.pg_type, PgType::CoLiving);
        assert_eq!(listing.flat_amount().unwrap(), 6527);
        assert!(listing.reviews.is_empty());
    }

    #[test]
    fn food_type_uses_hyphenated_wire_name() {
        let json = r#"{
            "_id": "665f1c2e9b1d2a0012a4e333",
            "name": "Butter Chicken",
            "price": 249,
            "type": "Non-Veg",
            "category": "Dinner"
        }"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.food_type, FoodType::NonVeg);
        assert_eq!(item.category, FoodCategory::Dinner);
    }
}
