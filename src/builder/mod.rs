//! Lifecycle wrapper: turning a caller's callbacks into a store.
//!
//! A store is parameterized by four callbacks (initial-model provider,
//! optional initial effect, transition, optional per-dispatch effect). This
//! module offers three equivalent ways to supply them:
//!
//! - [`StoreBuilder`]: fluent, validated construction
//! - [`StoreConfig`]: the plain record handed to [`Store::new`](crate::store::Store::new)
//! - [`StoreLogic`]: the callbacks as methods on one type, see [`create_store`]

pub mod config;
pub mod error;
pub mod logic;
pub mod store;

pub use config::{InitialModelFn, StoreConfig};
pub use error::BuildError;
pub use logic::{create_store, StoreLogic};
pub use store::StoreBuilder;
