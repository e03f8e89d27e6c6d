//! `warden-core` — pure authorization domain primitives.
//!
//! Identifier newtypes and requirement expressions, free of transport,
//! storage, and identity-resolution concerns.

pub mod error;
pub mod expr;
pub mod id;
pub mod permission;
pub mod role;

pub use error::{AccessDenied, GateResult};
pub use expr::{PermissionExpr, RoleExpr};
pub use id::ActorId;
pub use permission::Permission;
pub use role::Role;
