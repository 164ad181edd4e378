//! System orchestration, configuration, startup, and shutdown logic.

pub mod store_system;
pub mod config;
pub mod logging;

pub use store_system::*;
pub use config::*;
pub use logging::*;
