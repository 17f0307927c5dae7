//! reqwest-backed implementation of the API traits.
//!
//! One client with a request timeout, a single attempt per call (no retry,
//! no backoff), bearer token attached where a flow supplies one. Non-2xx
//! responses are decoded as `{"message": ...}` when possible so the
//! server-supplied text can reach the user.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

use staybite_core::booking::{Booking, BookingStatus, CreateBookingRequest};
use staybite_core::catalog::{FoodDraft, FoodItem, PgDraft, PgListing, RoomDraft, RoomListing};
use staybite_core::contact::{ContactDraft, ContactMessage, ContactStatus};

use crate::api::{
    AdminApi, AuthApi, AuthResponse, BookingApi, CatalogApi, ContactApi, LoginRequest,
    RegisterRequest,
};
use crate::app_config::ApiConfig;
use crate::ClientError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
        request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Pass 2xx responses through; otherwise pull the server's message out of
    /// the body, log, and fail typed.
    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        error!(status = status.as_u16(), ?message, "API call failed");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!(path, "GET");
        let response = Self::send(self.client.get(self.url(path))).await?;
        Self::expect_json(response).await
    }

    async fn get_json_auth<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, ClientError> {
        debug!(path, "GET (authenticated)");
        let response = Self::send(self.client.get(self.url(path)).bearer_auth(token)).await?;
        Self::expect_json(response).await
    }

    /// POST that only cares about success/failure; the pages never read the
    /// created entity back.
    async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(), ClientError> {
        debug!(path, "POST");
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Self::check(Self::send(request).await?).await?;
        Ok(())
    }

    async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError> {
        debug!(path, "PUT");
        let mut request = self.client.put(self.url(path)).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::check(Self::send(request).await?).await?;
        Ok(())
    }

    async fn delete_unit(&self, path: &str, token: &str) -> Result<(), ClientError> {
        debug!(path, "DELETE");
        let request = self.client.delete(self.url(path)).bearer_auth(token);
        Self::check(Self::send(request).await?).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for HttpApi {
    async fn list_pgs(&self) -> Result<Vec<PgListing>, ClientError> {
        self.get_json("/api/pgs").await
    }

    async fn get_pg(&self, id: &str) -> Result<PgListing, ClientError> {
        self.get_json(&format!("/api/pgs/{id}")).await
    }

    async fn list_rooms(&self) -> Result<Vec<RoomListing>, ClientError> {
        self.get_json("/api/rooms").await
    }

    async fn get_room(&self, id: &str) -> Result<RoomListing, ClientError> {
        self.get_json(&format!("/api/rooms/{id}")).await
    }

    async fn list_food(&self) -> Result<Vec<FoodItem>, ClientError> {
        self.get_json("/api/food").await
    }

    async fn get_food(&self, id: &str) -> Result<FoodItem, ClientError> {
        self.get_json(&format!("/api/food/{id}")).await
    }
}

#[async_trait]
impl BookingApi for HttpApi {
    async fn create_booking(
        &self,
        token: &str,
        request: &CreateBookingRequest,
    ) -> Result<(), ClientError> {
        self.post_unit("/api/bookings", Some(token), request).await
    }

    async fn my_bookings(&self, token: &str) -> Result<Vec<Booking>, ClientError> {
        self.get_json_auth("/api/bookings/my-bookings", token).await
    }

    async fn cancel_booking(&self, token: &str, id: &str) -> Result<(), ClientError> {
        self.put_unit::<()>(&format!("/api/bookings/cancel/{id}"), token, None)
            .await
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        debug!("POST /api/auth/login");
        let response = Self::send(self.client.post(self.url("/api/auth/login")).json(request)).await?;
        Self::expect_json(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        debug!("POST /api/auth/register");
        let response =
            Self::send(self.client.post(self.url("/api/auth/register")).json(request)).await?;
        Self::expect_json(response).await
    }
}

#[async_trait]
impl ContactApi for HttpApi {
    async fn submit_contact(&self, draft: &ContactDraft) -> Result<(), ClientError> {
        self.post_unit("/api/contacts", None, draft).await
    }
}

#[async_trait]
impl AdminApi for HttpApi {
    async fn all_bookings(&self, token: &str) -> Result<Vec<Booking>, ClientError> {
        self.get_json_auth("/api/bookings", token).await
    }

    async fn set_booking_status(
        &self,
        token: &str,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), ClientError> {
        self.put_unit(
            &format!("/api/bookings/{id}"),
            token,
            Some(&json!({ "status": status })),
        )
        .await
    }

    async fn create_pg(&self, token: &str, draft: &PgDraft) -> Result<(), ClientError> {
        self.post_unit("/api/pgs", Some(token), draft).await
    }

    async fn update_pg(&self, token: &str, id: &str, draft: &PgDraft) -> Result<(), ClientError> {
        self.put_unit(&format!("/api/pgs/{id}"), token, Some(draft))
            .await
    }

    async fn delete_pg(&self, token: &str, id: &str) -> Result<(), ClientError> {
        self.delete_unit(&format!("/api/pgs/{id}"), token).await
    }

    async fn create_room(&self, token: &str, draft: &RoomDraft) -> Result<(), ClientError> {
        self.post_unit("/api/rooms", Some(token), draft).await
    }

    async fn update_room(
        &self,
        token: &str,
        id: &str,
        draft: &RoomDraft,
    ) -> Result<(), ClientError> {
        self.put_unit(&format!("/api/rooms/{id}"), token, Some(draft))
            .await
    }

    async fn delete_room(&self, token: &str, id: &str) -> Result<(), ClientError> {
        self.delete_unit(&format!("/api/rooms/{id}"), token).await
    }

    async fn create_food(&self, token: &str, draft: &FoodDraft) -> Result<(), ClientError> {
        self.post_unit("/api/food", Some(token), draft).await
    }

    async fn update_food(
        &self,
        token: &str,
        id: &str,
        draft: &FoodDraft,
    ) -> Result<(), ClientError> {
        self.put_unit(&format!("/api/food/{id}"), token, Some(draft))
            .await
    }

    async fn delete_food(&self, token: &str, id: &str) -> Result<(), ClientError> {
        self.delete_unit(&format!("/api/food/{id}"), token).await
    }

    async fn list_contacts(&self, token: &str) -> Result<Vec<ContactMessage>, ClientError> {
        self.get_json_auth("/api/contacts", token).await
    }

    async fn set_contact_status(
        &self,
        token: &str,
        id: &str,
        status: ContactStatus,
    ) -> Result<(), ClientError> {
        self.put_unit(
            &format!("/api/contacts/{id}"),
            token,
            Some(&json!({ "status": status })),
        )
        .await
    }

    async fn delete_contact(&self, token: &str, id: &str) -> Result<(), ClientError> {
        self.delete_unit(&format!("/api/contacts/{id}"), token)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpApi::new(&ApiConfig {
            base_url: "http://localhost:5000/".into(),
            timeout_seconds: 30,
        })
        .unwrap();
        assert_eq!(api.url("/api/pgs"), "http://localhost:5000/api/pgs");
    }

    #[test]
    fn error_body_decodes_server_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Booking failed"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Booking failed"));
        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none());
    }
}
