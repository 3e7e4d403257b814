//! Effect types produced after transitions.

use std::rc::Rc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Errors an effect may fail with.
///
/// Effect faults are recoverable: the store logs them and treats the effect
/// as having produced no follow-up action.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EffectError {
    #[error("Effect failed: {0}")]
    Failed(String),

    #[error("Effect rejected: {reason}")]
    Rejected { reason: String },
}

/// An effect resolving to the next action to dispatch, if any.
///
/// `Ok(Some(action))` chains another dispatch, `Ok(None)` ends the chain.
pub type NextAction<U, Env> = BoxedEffect<Option<U>, EffectError, Env>;

/// Per-dispatch effect factory.
///
/// Called with the post-transition model and the triggering action.
/// Returning `None` means no effect runs for that dispatch.
pub type EffectFn<T, U, Env> = Rc<dyn Fn(&T, &U) -> Option<NextAction<U, Env>>>;

/// Effect factory run once against the initial model.
pub type InitialEffectFn<T, U, Env> = Box<dyn FnOnce(&T) -> Option<NextAction<U, Env>>>;

/// Effect that resolves without a follow-up action.
pub fn no_action<U, Env>() -> NextAction<U, Env>
where
    U: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    pure(None).boxed()
}

/// Effect that resolves to `action`.
pub fn next_action<U, Env>(action: U) -> NextAction<U, Env>
where
    U: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    pure(Some(action)).boxed()
}

/// Effect that fails with [`EffectError::Failed`].
pub fn effect_failed<U, Env>(reason: impl Into<String>) -> NextAction<U, Env>
where
    U: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fail(EffectError::Failed(reason.into())).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillwater::effect::Effect;

    #[derive(Debug, PartialEq)]
    enum Ping {
        Pong,
    }

    #[tokio::test]
    async fn no_action_resolves_to_none() {
        let effect: NextAction<Ping, ()> = no_action();
        assert_eq!(effect.run(&()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn next_action_resolves_to_action() {
        let effect: NextAction<Ping, ()> = next_action(Ping::Pong);
        assert_eq!(effect.run(&()).await.unwrap(), Some(Ping::Pong));
    }

    #[tokio::test]
    async fn effect_failed_carries_reason() {
        let effect: NextAction<Ping, ()> = effect_failed("backend unavailable");
        let err = effect.run(&()).await.unwrap_err();
        assert_eq!(err, EffectError::Failed("backend unavailable".to_string()));
        assert_eq!(err.to_string(), "Effect failed: backend unavailable");
    }

    #[derive(Clone)]
    struct Gate {
        open: bool,
    }

    #[tokio::test]
    async fn effect_reads_environment() {
        let effect: NextAction<Ping, Gate> = from_fn(|env: &Gate| {
            if env.open {
                Ok(Some(Ping::Pong))
            } else {
                Err(EffectError::Rejected {
                    reason: "gate closed".to_string(),
                })
            }
        })
        .boxed();

        let closed = Gate { open: false };
        assert!(matches!(
            effect.run(&closed).await,
            Err(EffectError::Rejected { .. })
        ));
    }
}
