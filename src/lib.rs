//! Unistate: a minimal unidirectional state container
//!
//! Unistate follows the "pure core, imperative shell" philosophy. A store owns
//! one model and replaces it wholesale through a pure transition function.
//! Side effects live in Stillwater effects that run after a transition and
//! may yield a follow-up action, which is dispatched in turn.
//!
//! # Core Concepts
//!
//! - **Model**: the state snapshot a [`Store`] owns
//! - **Action**: an intent dispatched to the store
//! - **Transition**: pure `(model, action) -> model`
//! - **Effect**: async step after a transition producing the next action, if any
//! - **Listener**: callback notified once per dispatch
//!
//! # Ordering
//!
//! `dispatch` finishes the transition and notifies every listener before it
//! returns. Effects run later as tokio local tasks, so a store with effects
//! must be driven inside a [`tokio::task::LocalSet`]. In-flight effects are
//! never cancelled; they resolve and dispatch against whatever the model has
//! become by then.
//!
//! # Example
//!
//! ```rust
//! use unistate::builder::StoreBuilder;
//! use unistate::effects::{next_action, no_action};
//!
//! #[derive(Debug)]
//! enum Counter {
//!     Increment,
//!     Decrement,
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let local = tokio::task::LocalSet::new();
//! local
//!     .run_until(async {
//!         let store = StoreBuilder::<i32, Counter>::new()
//!             .initial(0)
//!             .transition(|n: &i32, action: &Counter| match action {
//!                 Counter::Increment => n + 1,
//!                 Counter::Decrement => n - 1,
//!             })
//!             .effect(|n: &i32, _: &Counter| {
//!                 if *n < 3 {
//!                     next_action(Counter::Increment)
//!                 } else {
//!                     no_action()
//!                 }
//!             })
//!             .build()
//!             .unwrap();
//!
//!         store.dispatch(Counter::Increment);
//!         assert_eq!(store.model(), 1);
//!
//!         store.idle().await;
//!         assert_eq!(store.model(), 3);
//!     })
//!     .await;
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod store;

// Re-export commonly used types
pub use crate::builder::{create_store, BuildError, StoreBuilder, StoreConfig, StoreLogic};
pub use crate::core::{Listener, Subscription};
pub use crate::effects::{EffectError, NextAction};
pub use crate::store::{Store, StoreSlot, UsageError};
