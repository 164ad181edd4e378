//! # Store Engine
//!
//! An in-memory inventory and ordering engine.
//!
//! - **Domain** - [`Product`](domain::Product) keeps stock and active state;
//!   [`Store`](domain::Store) is the ordered registry and processes
//!   multi-line orders with a validate-then-commit protocol.
//! - **Service** - [`StoreService`](actors::StoreService) owns a store in a
//!   tokio task and handles one request at a time, so concurrent callers
//!   never interleave inside an order.
//! - **Client** - [`StoreClient`](clients::StoreClient) is the cloneable
//!   handle with one traced async method per request.
//! - **System** - [`StoreSystem`](app_system::StoreSystem) wires startup,
//!   configuration, and shutdown; [`Menu`](cli::Menu) is the text front end.
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use store_engine::app_system::{seed_catalog, StoreConfig, StoreSystem};
//! use store_engine::domain::OrderLine;
//!
//! let system = StoreSystem::new(&StoreConfig::default(), seed_catalog()?);
//! let products = system.store_client.list_products().await?;
//! let total = system
//!     .store_client
//!     .order(vec![OrderLine::new(products[0].id, 1)])
//!     .await?;
//! println!("paid {}", total);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod messages;
pub mod clients;
pub mod actors;
pub mod app_system;
pub mod cli;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
