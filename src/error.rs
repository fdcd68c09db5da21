//! Public error taxonomy.

use thiserror::Error;

/// The only failures `perform_action` surfaces to its caller.
///
/// Everything else - unresolved modules, loader faults, missing
/// actions, failing handlers - is folded into not-found during
/// resolution or captured into the response envelope during
/// invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The path normalized to zero segments before any resolution
    /// attempt was made.
    #[error("CONTROLLER_NOT_SPECIFIED")]
    ControllerNotSpecified,
    /// Two-phase resolution exhausted its attempts without producing a
    /// controller/action pair.
    #[error("NOT_FOUND")]
    NotFound,
}
