pub mod boundary;
pub mod error;
pub mod flows;
pub mod state;

pub use error::FlowError;
pub use state::AppState;
