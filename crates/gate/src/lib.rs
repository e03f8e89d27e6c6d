//! `warden-gate` — the authorization decision gate.
//!
//! Pure, synchronous decisions over an [`Actor`]'s granted permissions and
//! roles. Denial is returned as a value; the boundary layer (not this crate)
//! interprets it as a terminating response, consulting the gate's swappable
//! denial handler first.

pub mod actor;
pub mod enforcement;
pub mod gate;

pub use actor::{Actor, ResolvedActor};
pub use enforcement::EnforcementConfig;
pub use gate::{DenialOutcome, Gate};
