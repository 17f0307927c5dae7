pub mod api;
pub mod app_config;
pub mod http;
pub mod session;

pub use http::HttpApi;
pub use session::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("API error ({status}): {message:?}")]
    Api { status: u16, message: Option<String> },
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// The string a page surfaces to the user: the server-supplied message
    /// when one was decodable, otherwise a generic fallback. Never a raw
    /// error chain.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => "Something went wrong".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
