//! Pure transition functions.
//!
//! A transition computes the next model from the current model and an
//! action. It must be total over the action space and free of side effects;
//! anything effectful belongs in an effect (see [`crate::effects`]).

use std::rc::Rc;

/// Shared transition function `(model, action) -> next model`.
pub type Transition<T, U> = Rc<dyn Fn(&T, &U) -> T>;

/// Wrap a closure as a [`Transition`].
///
/// # Example
///
/// ```rust
/// use unistate::core::transition;
///
/// let add = transition(|n: &i64, delta: &i64| n + delta);
/// assert_eq!(add(&1, &2), 3);
/// ```
pub fn transition<T, U, F>(f: F) -> Transition<T, U>
where
    F: Fn(&T, &U) -> T + 'static,
{
    Rc::new(f)
}

/// Left-fold a sequence of actions over an initial model.
///
/// This is the model a store reaches after dispatching `actions` in order,
/// ignoring any follow-up actions produced by effects.
///
/// # Example
///
/// ```rust
/// use unistate::core::replay;
///
/// let total = replay(0, [1, 2, 3], |n: &i32, a: &i32| n + a);
/// assert_eq!(total, 6);
/// ```
pub fn replay<T, U, I, F>(initial: T, actions: I, transition: F) -> T
where
    I: IntoIterator<Item = U>,
    F: Fn(&T, &U) -> T,
{
    actions
        .into_iter()
        .fold(initial, |model, action| transition(&model, &action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Counter {
        Increment,
        Decrement,
        Sync(i32),
    }

    fn update(n: &i32, action: &Counter) -> i32 {
        match action {
            Counter::Increment => n + 1,
            Counter::Decrement => n - 1,
            Counter::Sync(payload) => *payload,
        }
    }

    #[test]
    fn replay_of_nothing_is_initial() {
        let actions: Vec<Counter> = Vec::new();
        assert_eq!(replay(7, actions, update), 7);
    }

    #[test]
    fn replay_applies_actions_in_order() {
        let actions = vec![Counter::Increment, Counter::Increment, Counter::Decrement];
        assert_eq!(replay(0, actions, update), 1);
    }

    #[test]
    fn sync_replaces_model_wholesale() {
        let actions = vec![Counter::Increment, Counter::Sync(42), Counter::Decrement];
        assert_eq!(replay(0, actions, update), 41);
    }

    #[test]
    fn wrapped_transition_is_shareable() {
        let t: Transition<i32, Counter> = transition(update);
        let shared = Rc::clone(&t);
        assert_eq!(t(&0, &Counter::Increment), shared(&0, &Counter::Increment));
    }
}
