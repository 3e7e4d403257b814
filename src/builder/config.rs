//! The four callbacks a store is parameterized by.

use crate::core::Transition;
use crate::effects::{EffectFn, InitialEffectFn, NextAction};
use std::fmt;
use std::rc::Rc;

/// Provider of the model a store starts from.
pub type InitialModelFn<T> = Box<dyn FnOnce() -> T>;

/// Everything needed to construct a [`Store`](crate::store::Store).
///
/// A plain record of function values: the initial-model provider, an
/// optional initial effect, the transition, and an optional per-dispatch
/// effect. Build one with [`StoreBuilder`](super::StoreBuilder),
/// [`StoreConfig::new`], or [`StoreConfig::from_logic`].
pub struct StoreConfig<T, U, Env = ()> {
    pub initial_model: InitialModelFn<T>,
    pub initial_effect: Option<InitialEffectFn<T, U, Env>>,
    pub transition: Transition<T, U>,
    pub effect: Option<EffectFn<T, U, Env>>,
}

impl<T: 'static, U: 'static, Env: 'static> StoreConfig<T, U, Env> {
    /// Configuration with no effects.
    pub fn new<M, F>(initial_model: M, transition: F) -> Self
    where
        M: FnOnce() -> T + 'static,
        F: Fn(&T, &U) -> T + 'static,
    {
        Self {
            initial_model: Box::new(initial_model),
            initial_effect: None,
            transition: Rc::new(transition),
            effect: None,
        }
    }

    /// Run `effect` once against the initial model.
    pub fn with_initial_effect<F>(mut self, effect: F) -> Self
    where
        F: FnOnce(&T) -> NextAction<U, Env> + 'static,
    {
        self.initial_effect = Some(Box::new(move |model: &T| Some(effect(model))));
        self
    }

    /// Run `effect` after every dispatch.
    pub fn with_effect<F>(mut self, effect: F) -> Self
    where
        F: Fn(&T, &U) -> NextAction<U, Env> + 'static,
    {
        self.effect = Some(Rc::new(move |model: &T, action: &U| {
            Some(effect(model, action))
        }));
        self
    }

    /// Check whether a per-dispatch effect is configured.
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    /// Check whether an initial effect is configured.
    pub fn has_initial_effect(&self) -> bool {
        self.initial_effect.is_some()
    }
}

impl<T, U, Env> fmt::Debug for StoreConfig<T, U, Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("initial_effect", &self.initial_effect.is_some())
            .field("effect", &self.effect.is_some())
            .finish_non_exhaustive()
    }
}
