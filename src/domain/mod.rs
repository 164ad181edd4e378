pub mod product;
pub mod store;
pub mod order;

pub use product::*;
pub use store::*;
pub use order::*;
