//! Effects run after state transitions using Stillwater 0.11.
//!
//! This module is the "imperative shell" around the pure transition core.
//! An effect is a Stillwater `BoxedEffect` that may suspend, read its
//! environment, and finally yield the next action to dispatch.
//!
//! # Key Concepts
//!
//! - **Initial effect**: runs once against the initial model
//! - **Per-dispatch effect**: runs after every transition with the new model
//!   and the action that caused it
//! - **Chaining**: an effect's resulting action is dispatched again, which may
//!   launch another effect
//!
//! Use the free-standing constructors [`no_action`], [`next_action`] and
//! [`effect_failed`], or Stillwater's own `pure()`, `fail()` and `from_fn()`.

mod effect;

pub use effect::{
    effect_failed, next_action, no_action, EffectError, EffectFn, InitialEffectFn, NextAction,
};
