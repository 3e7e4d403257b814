//! Builder for constructing stores.

use super::config::{InitialModelFn, StoreConfig};
use crate::builder::error::BuildError;
use crate::core::Transition;
use crate::effects::{EffectFn, InitialEffectFn, NextAction};
use crate::store::Store;
use std::rc::Rc;

/// Builder for constructing stores with a fluent API.
pub struct StoreBuilder<T, U, Env = ()> {
    initial_model: Option<InitialModelFn<T>>,
    initial_effect: Option<InitialEffectFn<T, U, Env>>,
    transition: Option<Transition<T, U>>,
    effect: Option<EffectFn<T, U, Env>>,
    env: Option<Env>,
}

impl<T: 'static, U: 'static, Env: 'static> StoreBuilder<T, U, Env> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial_model: None,
            initial_effect: None,
            transition: None,
            effect: None,
            env: None,
        }
    }

    /// Set the initial model (required, or use `initial_with`).
    pub fn initial(self, model: T) -> Self {
        self.initial_with(move || model)
    }

    /// Set a provider for the initial model, called once at build time.
    pub fn initial_with<F>(mut self, provider: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        self.initial_model = Some(Box::new(provider));
        self
    }

    /// Set the transition function (required).
    pub fn transition<F>(mut self, transition: F) -> Self
    where
        F: Fn(&T, &U) -> T + 'static,
    {
        self.transition = Some(Rc::new(transition));
        self
    }

    /// Set the effect run once against the initial model (optional).
    pub fn initial_effect<F>(mut self, effect: F) -> Self
    where
        F: FnOnce(&T) -> NextAction<U, Env> + 'static,
    {
        self.initial_effect = Some(Box::new(move |model: &T| Some(effect(model))));
        self
    }

    /// Set the effect run after every dispatch (optional).
    pub fn effect<F>(mut self, effect: F) -> Self
    where
        F: Fn(&T, &U) -> NextAction<U, Env> + 'static,
    {
        self.effect = Some(Rc::new(move |model: &T, action: &U| {
            Some(effect(model, action))
        }));
        self
    }

    /// Set the environment effects run in, used by `build()`.
    ///
    /// `build()` falls back to `Env::default()`. For an environment type
    /// without `Default`, pass it to `build_with_env` instead.
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Produce the configuration without constructing a store.
    pub fn config(self) -> Result<StoreConfig<T, U, Env>, BuildError> {
        let initial_model = self.initial_model.ok_or(BuildError::MissingInitialModel)?;
        let transition = self.transition.ok_or(BuildError::MissingTransition)?;

        Ok(StoreConfig {
            initial_model,
            initial_effect: self.initial_effect,
            transition,
            effect: self.effect,
        })
    }
}

impl<T, U, Env> StoreBuilder<T, U, Env>
where
    T: 'static,
    U: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Build the store with an explicit environment.
    /// Overrides any environment set with `.env()`.
    pub fn build_with_env(mut self, env: Env) -> Result<Store<T, U, Env>, BuildError> {
        self.env = None;
        Ok(Store::new(self.config()?, env))
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(mut self) -> Result<Store<T, U, Env>, BuildError>
    where
        Env: Default,
    {
        let env = self.env.take().unwrap_or_default();
        self.build_with_env(env)
    }
}

impl<T: 'static, U: 'static, Env: 'static> Default for StoreBuilder<T, U, Env> {
    fn default() -> Self {
        Self::new()
    }
}
