//! The store engine and the handle consumers reach it through.

mod error;
mod slot;
#[allow(clippy::module_inception)]
mod store;

pub use error::UsageError;
pub use slot::StoreSlot;
pub use store::{Store, StoreId};
