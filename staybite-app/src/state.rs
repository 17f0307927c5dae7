use std::sync::Arc;

use staybite_client::api::{AdminApi, AuthApi, BookingApi, CatalogApi, ContactApi};
use staybite_client::app_config::BookingPolicy;
use staybite_client::{HttpApi, SessionStore};

use crate::flows::admin::AdminConsole;
use crate::flows::auth::AuthFlow;
use crate::flows::booking::BookingFlow;
use crate::flows::contact::ContactFlow;
use crate::flows::home::HomeFlow;
use crate::flows::my_bookings::MyBookingsFlow;

/// Shared application state handed to every page. One API client and one
/// session store behind trait objects, so tests can swap in fakes per
/// concern.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogApi>,
    pub bookings: Arc<dyn BookingApi>,
    pub auth: Arc<dyn AuthApi>,
    pub contacts: Arc<dyn ContactApi>,
    pub admin: Arc<dyn AdminApi>,
    pub session: Arc<SessionStore>,
    pub policy: BookingPolicy,
}

impl AppState {
    /// Wire every concern to the one HTTP client.
    pub fn new(api: Arc<HttpApi>, session: Arc<SessionStore>, policy: BookingPolicy) -> Self {
        Self {
            catalog: api.clone(),
            bookings: api.clone(),
            auth: api.clone(),
            contacts: api.clone(),
            admin: api,
            session,
            policy,
        }
    }

    pub fn home(&self) -> HomeFlow {
        HomeFlow::new(self.catalog.clone())
    }

    pub fn booking(&self) -> BookingFlow {
        BookingFlow::new(self.bookings.clone(), self.session.clone(), self.policy.clone())
    }

    pub fn my_bookings(&self) -> MyBookingsFlow {
        MyBookingsFlow::new(self.bookings.clone(), self.session.clone())
    }

    pub fn auth(&self) -> AuthFlow {
        AuthFlow::new(self.auth.clone(), self.session.clone())
    }

    pub fn contact(&self) -> ContactFlow {
        ContactFlow::new(self.contacts.clone())
    }

    pub fn admin_console(&self) -> AdminConsole {
        AdminConsole::new(self.admin.clone(), self.catalog.clone(), self.session.clone())
    }
}
