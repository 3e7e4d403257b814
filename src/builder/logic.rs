//! Trait form of a store's callbacks.

use super::config::StoreConfig;
use crate::effects::NextAction;
use crate::store::Store;
use std::rc::Rc;

/// The four callbacks of a store, implemented on one type.
///
/// Only [`initial_model`](StoreLogic::initial_model) and
/// [`update`](StoreLogic::update) are required. The callbacks are bound to a
/// shared instance, so methods may call other helpers on `self`.
///
/// # Example
///
/// ```rust
/// use unistate::builder::{create_store, StoreLogic};
///
/// struct Tally;
///
/// impl StoreLogic for Tally {
///     type Model = u32;
///     type Action = u32;
///     type Env = ();
///
///     fn initial_model(&self) -> u32 {
///         0
///     }
///
///     fn update(&self, model: &u32, action: &u32) -> u32 {
///         model + action
///     }
/// }
///
/// let store = create_store(Tally, ());
/// store.dispatch(2);
/// assert_eq!(store.model(), 2);
/// ```
pub trait StoreLogic: 'static {
    type Model: 'static;
    type Action: Send + 'static;
    type Env: Clone + Send + Sync + 'static;

    /// Model the store starts from.
    fn initial_model(&self) -> Self::Model;

    /// Effect run once at construction. `None` skips it.
    fn initial_effect(
        &self,
        _model: &Self::Model,
    ) -> Option<NextAction<Self::Action, Self::Env>> {
        None
    }

    /// Pure transition.
    fn update(&self, model: &Self::Model, action: &Self::Action) -> Self::Model;

    /// Effect run after each dispatch. `None` skips it for that dispatch.
    fn effect(
        &self,
        _model: &Self::Model,
        _action: &Self::Action,
    ) -> Option<NextAction<Self::Action, Self::Env>> {
        None
    }
}

impl<T: 'static, U: Send + 'static, Env: Clone + Send + Sync + 'static> StoreConfig<T, U, Env> {
    /// Bind the callbacks of `logic` into a configuration.
    pub fn from_logic<L>(logic: L) -> Self
    where
        L: StoreLogic<Model = T, Action = U, Env = Env>,
    {
        let logic = Rc::new(logic);

        let model_logic = Rc::clone(&logic);
        let initial_logic = Rc::clone(&logic);
        let transition_logic = Rc::clone(&logic);
        let effect_logic = logic;

        Self {
            initial_model: Box::new(move || model_logic.initial_model()),
            initial_effect: Some(Box::new(move |model: &T| {
                initial_logic.initial_effect(model)
            })),
            transition: Rc::new(move |model: &T, action: &U| {
                transition_logic.update(model, action)
            }),
            effect: Some(Rc::new(move |model: &T, action: &U| {
                effect_logic.effect(model, action)
            })),
        }
    }
}

/// Construct a store from a [`StoreLogic`] implementation.
pub fn create_store<L>(logic: L, env: L::Env) -> Store<L::Model, L::Action, L::Env>
where
    L: StoreLogic,
{
    Store::new(StoreConfig::from_logic(logic), env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{next_action, no_action};
    use std::cell::Cell;
    use tokio::task::LocalSet;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Step {
        Advance,
        Reset,
    }

    struct Stepper {
        limit: u32,
    }

    impl Stepper {
        fn below_limit(&self, model: &u32) -> bool {
            *model < self.limit
        }
    }

    impl StoreLogic for Stepper {
        type Model = u32;
        type Action = Step;
        type Env = ();

        fn initial_model(&self) -> u32 {
            0
        }

        fn initial_effect(&self, _model: &u32) -> Option<NextAction<Step, ()>> {
            Some(next_action(Step::Advance))
        }

        fn update(&self, model: &u32, action: &Step) -> u32 {
            match action {
                Step::Advance => model + 1,
                Step::Reset => 0,
            }
        }

        fn effect(&self, model: &u32, action: &Step) -> Option<NextAction<Step, ()>> {
            match action {
                Step::Advance if self.below_limit(model) => Some(next_action(Step::Advance)),
                Step::Advance => Some(no_action()),
                Step::Reset => None,
            }
        }
    }

    #[tokio::test]
    async fn logic_drives_initial_effect_and_chain() {
        LocalSet::new()
            .run_until(async {
                let store = create_store(Stepper { limit: 4 }, ());
                assert_eq!(store.model(), 0);

                store.idle().await;
                assert_eq!(store.model(), 4);
                assert_eq!(store.dispatch_count(), 4);
            })
            .await;
    }

    #[tokio::test]
    async fn effect_returning_none_launches_nothing() {
        LocalSet::new()
            .run_until(async {
                let store = create_store(Stepper { limit: 2 }, ());
                store.idle().await;

                store.dispatch(Step::Reset);
                assert_eq!(store.in_flight(), 0);
                assert_eq!(store.model(), 0);
            })
            .await;
    }

    struct Plain {
        built: Rc<Cell<usize>>,
    }

    impl StoreLogic for Plain {
        type Model = i64;
        type Action = i64;
        type Env = ();

        fn initial_model(&self) -> i64 {
            self.built.set(self.built.get() + 1);
            -1
        }

        fn update(&self, model: &i64, action: &i64) -> i64 {
            model * action
        }
    }

    #[test]
    fn default_callbacks_need_no_runtime() {
        let built = Rc::new(Cell::new(0));
        let store = create_store(
            Plain {
                built: Rc::clone(&built),
            },
            (),
        );

        store.dispatch(6);

        assert_eq!(store.model(), -6);
        assert_eq!(built.get(), 1);
        assert_eq!(store.in_flight(), 0);
    }
}
