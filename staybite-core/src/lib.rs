pub mod booking;
pub mod catalog;
pub mod contact;
pub mod forms;
pub mod pricing;
pub mod stay;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Listing has no usable price: {0}")]
    PriceError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
