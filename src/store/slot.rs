//! Integration handle through which consumers reach a store.

use super::error::UsageError;
use super::store::Store;
use crate::core::{Listener, Subscription};
use std::cell::RefCell;
use std::fmt;

/// A named place a store is provided into and read from.
///
/// Consumers that go through an empty slot get
/// [`UsageError::Uninitialized`] immediately instead of silently reading
/// nothing.
///
/// # Example
///
/// ```rust
/// use unistate::builder::StoreBuilder;
/// use unistate::store::{StoreSlot, UsageError};
///
/// let slot: StoreSlot<i32, i32> = StoreSlot::new("counter");
/// assert!(matches!(slot.model(), Err(UsageError::Uninitialized { .. })));
///
/// let store = StoreBuilder::new()
///     .initial(0)
///     .transition(|n: &i32, d: &i32| n + d)
///     .build()
///     .unwrap();
/// slot.provide(store).unwrap();
///
/// slot.dispatch(4).unwrap();
/// assert_eq!(slot.model().unwrap(), 4);
/// ```
pub struct StoreSlot<T, U, Env = ()> {
    context: String,
    store: RefCell<Option<Store<T, U, Env>>>,
}

impl<T, U, Env> StoreSlot<T, U, Env> {
    /// Create an empty slot. `context` names it in error messages.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            store: RefCell::new(None),
        }
    }

    /// Put a store into the slot. A slot is provided at most once.
    pub fn provide(&self, store: Store<T, U, Env>) -> Result<(), UsageError> {
        let mut slot = self.store.borrow_mut();
        if slot.is_some() {
            return Err(UsageError::AlreadyProvided {
                context: self.context.clone(),
            });
        }
        *slot = Some(store);
        Ok(())
    }

    /// Check whether a store has been provided.
    pub fn is_provided(&self) -> bool {
        self.store.borrow().is_some()
    }

    /// Handle to the provided store.
    pub fn get(&self) -> Result<Store<T, U, Env>, UsageError> {
        self.store
            .borrow()
            .clone()
            .ok_or_else(|| UsageError::Uninitialized {
                context: self.context.clone(),
            })
    }

    /// Read the current model of the provided store.
    pub fn model(&self) -> Result<T, UsageError>
    where
        T: Clone,
    {
        Ok(self.get()?.model())
    }

    /// Register a listener on the provided store.
    pub fn add_listener(&self, listener: Listener) -> Result<Subscription, UsageError> {
        Ok(self.get()?.add_listener(listener))
    }
}

impl<T, U, Env> StoreSlot<T, U, Env>
where
    T: 'static,
    U: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Dispatch through the provided store.
    pub fn dispatch(&self, action: U) -> Result<(), UsageError> {
        self.get()?.dispatch(action);
        Ok(())
    }
}

impl<T, U, Env> fmt::Debug for StoreSlot<T, U, Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSlot")
            .field("context", &self.context)
            .field("provided", &self.is_provided())
            .finish()
    }
}
