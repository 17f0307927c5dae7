//! Typed REST contracts, one async trait per concern. Flows depend on these
//! traits rather than on the HTTP implementation so they can be exercised
//! against in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use staybite_core::booking::{Booking, BookingStatus, CreateBookingRequest};
use staybite_core::catalog::{FoodDraft, FoodItem, PgDraft, PgListing, RoomDraft, RoomListing};
use staybite_core::contact::{ContactDraft, ContactMessage, ContactStatus};
use staybite_shared::models::UserProfile;
use staybite_shared::pii::Masked;

use crate::ClientError;

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Masked<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: Masked<String>,
}

/// Both auth endpoints return the token alongside the user fields in one
/// flat object; the whole user half is what gets persisted.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: UserProfile,
}

/// Read-only list/detail retrieval, unauthenticated.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_pgs(&self) -> Result<Vec<PgListing>, ClientError>;
    async fn get_pg(&self, id: &str) -> Result<PgListing, ClientError>;
    async fn list_rooms(&self) -> Result<Vec<RoomListing>, ClientError>;
    async fn get_room(&self, id: &str) -> Result<RoomListing, ClientError>;
    async fn list_food(&self) -> Result<Vec<FoodItem>, ClientError>;
    async fn get_food(&self, id: &str) -> Result<FoodItem, ClientError>;
}

/// A user's own bookings. Creation ignores the response body on success,
/// exactly as the pages did; failures surface the server message.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn create_booking(
        &self,
        token: &str,
        request: &CreateBookingRequest,
    ) -> Result<(), ClientError>;
    async fn my_bookings(&self, token: &str) -> Result<Vec<Booking>, ClientError>;
    async fn cancel_booking(&self, token: &str, id: &str) -> Result<(), ClientError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError>;
}

/// The public contact form.
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn submit_contact(&self, draft: &ContactDraft) -> Result<(), ClientError>;
}

/// Admin console operations. Authorization is enforced server-side; the
/// client only gates the UI by role.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn all_bookings(&self, token: &str) -> Result<Vec<Booking>, ClientError>;
    async fn set_booking_status(
        &self,
        token: &str,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), ClientError>;

    async fn create_pg(&self, token: &str, draft: &PgDraft) -> Result<(), ClientError>;
    async fn update_pg(&self, token: &str, id: &str, draft: &PgDraft) -> Result<(), ClientError>;
    async fn delete_pg(&self, token: &str, id: &str) -> Result<(), ClientError>;

    async fn create_room(&self, token: &str, draft: &RoomDraft) -> Result<(), ClientError>;
    async fn update_room(&self, token: &str, id: &str, draft: &RoomDraft)
        -> Result<(), ClientError>;
    async fn delete_room(&self, token: &str, id: &str) -> Result<(), ClientError>;

    async fn create_food(&self, token: &str, draft: &FoodDraft) -> Result<(), ClientError>;
    async fn update_food(&self, token: &str, id: &str, draft: &FoodDraft)
        -> Result<(), ClientError>;
    async fn delete_food(&self, token: &str, id: &str) -> Result<(), ClientError>;

    async fn list_contacts(&self, token: &str) -> Result<Vec<ContactMessage>, ClientError>;
    async fn set_contact_status(
        &self,
        token: &str,
        id: &str,
        status: ContactStatus,
    ) -> Result<(), ClientError>;
    async fn delete_contact(&self, token: &str, id: &str) -> Result<(), ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_flattens_user_fields() {
        let json = r#"{
            "token": "jwt-abc",
            "_id": "665f1c2e9b1d2a0012a4e111",
            "fullName": "Asha Verma",
            "email": "asha@example.com",
            "role": "USER"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "jwt-abc");
        assert_eq!(resp.user.full_name, "Asha Verma");
    }

    #[test]
    fn login_request_never_debugs_the_password() {
        let req = LoginRequest {
            email: "asha@example.com".into(),
            password: Masked("hunter2".into()),
        };
        let debugged = format!("{:?}", req);
        assert!(!debugged.contains("hunter2"));
        // The wire payload still carries it.
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("hunter2"));
    }
}
