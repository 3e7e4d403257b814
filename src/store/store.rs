//! The store engine: one model, its transition, and the effect chain.

use crate::builder::StoreConfig;
use crate::core::{Listener, Listeners, Subscription, Transition};
use crate::effects::{EffectFn, NextAction};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use stillwater::effect::Effect;
use tokio::sync::Notify;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Unique identity of a store, attached to its log events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StoreId(Uuid);

impl StoreId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where an effect was launched from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EffectOrigin {
    Initial,
    Dispatch { sequence: u64 },
}

impl fmt::Display for EffectOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Dispatch { sequence } => write!(f, "dispatch #{sequence}"),
        }
    }
}

struct Inner<T, U, Env> {
    id: StoreId,
    model: RefCell<Rc<T>>,
    transition: Transition<T, U>,
    effect: Option<EffectFn<T, U, Env>>,
    listeners: Listeners,
    env: Env,
    dispatches: Cell<u64>,
    in_flight: Cell<usize>,
    settled: Notify,
}

/// Single source of truth for one model.
///
/// `dispatch` runs the transition, replaces the model and notifies every
/// listener before returning. If an effect is configured it is then spawned
/// as a tokio local task; when it resolves to an action that action is
/// dispatched in turn. Effects therefore require the store to be driven from
/// inside a [`tokio::task::LocalSet`].
///
/// `Store` is a cheap handle: clones share the same model and listeners.
///
/// # Example
///
/// ```rust
/// use unistate::builder::StoreBuilder;
///
/// let store = StoreBuilder::<i32, i32>::new()
///     .initial(0)
///     .transition(|n, delta| n + delta)
///     .build()
///     .unwrap();
///
/// store.dispatch(2);
/// store.dispatch(3);
/// assert_eq!(store.model(), 5);
/// ```
pub struct Store<T, U, Env = ()> {
    inner: Rc<Inner<T, U, Env>>,
}

impl<T, U, Env> Clone for Store<T, U, Env> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, U, Env> Store<T, U, Env>
where
    T: 'static,
    U: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Construct a store from its configuration and effect environment.
    ///
    /// The initial model is created immediately. If an initial effect is
    /// configured it is launched but not awaited; construction returns first.
    pub fn new(config: StoreConfig<T, U, Env>, env: Env) -> Self {
        let StoreConfig {
            initial_model,
            initial_effect,
            transition,
            effect,
        } = config;

        let store = Self {
            inner: Rc::new(Inner {
                id: StoreId::new(),
                model: RefCell::new(Rc::new(initial_model())),
                transition,
                effect,
                listeners: Listeners::new(),
                env,
                dispatches: Cell::new(0),
                in_flight: Cell::new(0),
                settled: Notify::new(),
            }),
        };
        debug!(store = %store.id(), "Store created");

        if let Some(initial_effect) = initial_effect {
            let pending = initial_effect(&**store.inner.model.borrow());
            if let Some(pending) = pending {
                debug!(store = %store.id(), "Launching initial effect");
                store.launch(pending, EffectOrigin::Initial);
            }
        }

        store
    }

    /// Apply one action.
    ///
    /// The transition, model replacement and listener notification all
    /// complete before this returns. The effect factory is then called with
    /// the model this dispatch produced, even if a listener dispatched again
    /// in between. A transition that panics propagates the panic and leaves
    /// the model and listeners untouched.
    pub fn dispatch(&self, action: U) {
        let inner = &self.inner;

        let next = Rc::new((inner.transition)(&**inner.model.borrow(), &action));
        *inner.model.borrow_mut() = Rc::clone(&next);

        let sequence = inner.dispatches.get() + 1;
        inner.dispatches.set(sequence);

        let notified = inner.listeners.notify();
        trace!(store = %inner.id, sequence, notified, "Dispatched action");

        let pending = inner
            .effect
            .as_ref()
            .and_then(|effect| effect(&*next, &action));

        if let Some(pending) = pending {
            self.launch(pending, EffectOrigin::Dispatch { sequence });
        }
    }

    /// Compute an action from the current model and dispatch it.
    ///
    /// This is the entry point for pushing external state into the store,
    /// for example from a render pass.
    pub fn sync<F>(&self, f: F)
    where
        F: FnOnce(&T) -> U,
    {
        let action = self.with_model(f);
        self.dispatch(action);
    }

    fn launch(&self, pending: NextAction<U, Env>, origin: EffectOrigin) {
        let store = self.clone();
        tokio::task::spawn_local(async move {
            let _retire = EffectGuard {
                inner: Rc::clone(&store.inner),
            };

            match pending.run(&store.inner.env).await {
                Ok(Some(action)) => {
                    trace!(store = %store.inner.id, %origin, "Effect produced follow-up action");
                    store.dispatch(action);
                }
                Ok(None) => {
                    trace!(store = %store.inner.id, %origin, "Effect finished without action");
                }
                Err(e) => {
                    warn!(store = %store.inner.id, %origin, error = %e, "Effect failed, chain stopped");
                }
            }
        });

        // Counted only once the task exists; spawning outside a `LocalSet`
        // panics before this point.
        self.inner.in_flight.set(self.inner.in_flight.get() + 1);
        trace!(store = %self.inner.id, %origin, "Effect launched");
    }
}

impl<T, U, Env> Store<T, U, Env> {
    /// Identity used in this store's log events.
    pub fn id(&self) -> StoreId {
        self.inner.id
    }

    /// Current model.
    pub fn model(&self) -> T
    where
        T: Clone,
    {
        (**self.inner.model.borrow()).clone()
    }

    /// Borrow the current model without cloning it.
    pub fn with_model<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&**self.inner.model.borrow())
    }

    /// Register a listener invoked once after every dispatch.
    ///
    /// Registering the same `Rc` twice keeps a single registration.
    pub fn add_listener(&self, listener: Listener) -> Subscription {
        self.inner.listeners.add(listener)
    }

    /// Register a closure as a listener.
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.add_listener(Rc::new(f))
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Number of dispatches applied so far, including chained ones.
    pub fn dispatch_count(&self) -> u64 {
        self.inner.dispatches.get()
    }

    /// Number of effects launched but not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.get()
    }

    /// Wait until no effect of this store is in flight.
    ///
    /// A chained dispatch registers its own effect before the parent effect
    /// retires, so this only resolves once a whole chain has settled.
    pub async fn idle(&self) {
        loop {
            let settled = self.inner.settled.notified();
            if self.inner.in_flight.get() == 0 {
                return;
            }
            settled.await;
        }
    }
}

impl<T, U, Env> fmt::Debug for Store<T, U, Env>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("id", &self.inner.id)
            .field("model", &**self.inner.model.borrow())
            .field("listeners", &self.inner.listeners.len())
            .field("dispatches", &self.inner.dispatches.get())
            .field("in_flight", &self.inner.in_flight.get())
            .finish()
    }
}

/// Retires an in-flight effect even if its chained dispatch panics.
struct EffectGuard<T, U, Env> {
    inner: Rc<Inner<T, U, Env>>,
}

impl<T, U, Env> Drop for EffectGuard<T, U, Env> {
    fn drop(&mut self) {
        let remaining = self.inner.in_flight.get().saturating_sub(1);
        self.inner.in_flight.set(remaining);
        if remaining == 0 {
            self.inner.settled.notify_waiters();
        }
    }
}
