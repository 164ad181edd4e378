use thiserror::Error;

/// Errors raised by products, the store, and the store service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{0} is inactive and cannot be purchased")]
    InactiveProduct(String),
    #[error("Not enough stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u64,
        available: u32,
    },
    #[error("Product not found in store: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
