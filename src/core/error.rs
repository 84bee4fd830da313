//! Core error types.

use thiserror::Error;

/// Error returned when a string names no phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown phase name '{0}'")]
pub struct ParsePhaseError(pub String);
