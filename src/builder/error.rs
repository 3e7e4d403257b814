//! Build errors for store configuration.

use thiserror::Error;

/// Errors that can occur when building a store configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial model not specified. Call .initial(model) or .initial_with(f) before .build()")]
    MissingInitialModel,

    #[error("Transition function not specified. Call .transition(f) before .build()")]
    MissingTransition,
}
