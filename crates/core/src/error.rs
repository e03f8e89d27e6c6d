//! Authorization error model.

use thiserror::Error;

/// Result type for gate decisions.
pub type GateResult = Result<(), AccessDenied>;

/// The single authorization failure kind.
///
/// Permission misses and role mismatches intentionally collapse into one
/// error; callers receive the same generic denial either way, and the
/// boundary layer decides how to terminate the request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("access denied")]
pub struct AccessDenied;
