use std::sync::Arc;
use tracing::info;

use staybite_client::api::{AuthApi, LoginRequest, RegisterRequest};
use staybite_client::SessionStore;
use staybite_shared::pii::Masked;

use crate::error::FlowError;

/// Where the app navigates after a successful sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingRoute {
    Home,
    AdminDashboard,
}

#[derive(Debug, Default, Clone)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Clone)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct AuthFlow {
    api: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
}

impl AuthFlow {
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    /// Sign in, persist the session, and pick the landing route by role.
    pub async fn sign_in(&self, form: SignInForm) -> Result<LandingRoute, FlowError> {
        if form.email.is_empty() || form.password.is_empty() {
            return Err(FlowError::validation("All fields are required"));
        }

        let response = self
            .api
            .login(&LoginRequest {
                email: form.email,
                password: Masked(form.password),
            })
            .await?;

        let route = if response.user.is_admin() {
            LandingRoute::AdminDashboard
        } else {
            LandingRoute::Home
        };
        self.session.sign_in(response.token, response.user)?;
        info!("signed in");
        Ok(route)
    }

    /// Register a new account and persist the returned session. New accounts
    /// always land on home.
    pub async fn sign_up(&self, form: SignUpForm) -> Result<LandingRoute, FlowError> {
        if form.name.is_empty()
            || form.email.is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(FlowError::validation("All fields are required"));
        }
        if form.password != form.confirm_password {
            return Err(FlowError::validation("Passwords do not match"));
        }

        let response = self
            .api
            .register(&RegisterRequest {
                full_name: form.name,
                email: form.email,
                password: Masked(form.password),
            })
            .await?;

        self.session.sign_in(response.token, response.user)?;
        info!("account created");
        Ok(LandingRoute::Home)
    }

    /// Clear both persisted keys; later authenticated flows fail their
    /// pre-flight login gate.
    pub fn sign_out(&self) -> Result<(), FlowError> {
        self.session.sign_out()?;
        Ok(())
    }
}
