use staybite_client::ClientError;

/// Everything a page flow can fail with, split the way the UI treats them:
/// validation and login gates are raised before any network call, API errors
/// carry whatever the server said.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    LoginRequired {
        message: String,
        redirect_to_sign_in: bool,
    },
    #[error(transparent)]
    Api(#[from] ClientError),
    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

impl FlowError {
    pub fn validation(message: impl Into<String>) -> Self {
        FlowError::Validation(message.into())
    }

    /// The toast text. Internal details never reach the user.
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Validation(message) => message.clone(),
            FlowError::LoginRequired { message, .. } => message.clone(),
            FlowError::Api(e) => e.user_message(),
            FlowError::Internal(e) => {
                tracing::error!("internal error surfaced to user: {e}");
                "Something went wrong".to_string()
            }
        }
    }

    /// Whether the failing flow also navigates to the sign-in page. Policy,
    /// not a hard rule: the food flow redirects, the stay flows do not.
    pub fn wants_sign_in_redirect(&self) -> bool {
        matches!(
            self,
            FlowError::LoginRequired {
                redirect_to_sign_in: true,
                ..
            }
        )
    }
}

impl From<staybite_client::session::SessionError> for FlowError {
    fn from(e: staybite_client::session::SessionError) -> Self {
        FlowError::Internal(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_surfaces_server_message() {
        let err = FlowError::Api(ClientError::Api {
            status: 400,
            message: Some("Booking failed".into()),
        });
        assert_eq!(err.user_message(), "Booking failed");
    }

    #[test]
    fn undecodable_api_error_falls_back_to_generic_text() {
        let err = FlowError::Api(ClientError::Network("connection refused".into()));
        assert_eq!(err.user_message(), "Something went wrong");
    }
}
