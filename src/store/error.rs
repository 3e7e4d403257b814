//! Usage errors raised by integration handles.

use thiserror::Error;

/// Wiring mistakes in the layer that hands stores to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("No store provided for '{context}'. Call .provide(store) before using it")]
    Uninitialized { context: String },

    #[error("A store was already provided for '{context}'")]
    AlreadyProvided { context: String },
}
