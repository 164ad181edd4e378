//! Cloneable handles for talking to services.

#[macro_use]
mod macros;
mod store_client;

pub use store_client::*;
