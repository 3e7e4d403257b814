//! Pure building blocks of a store.
//!
//! This module contains the parts of the engine that perform no I/O:
//! - Transition functions and the left-fold that replays them
//! - The listener registry and its unsubscribe handles
//!
//! Everything effectful lives in [`crate::effects`].

mod listener;
mod transition;

pub use listener::{Listener, ListenerId, Listeners, Subscription};
pub use transition::{replay, transition, Transition};
