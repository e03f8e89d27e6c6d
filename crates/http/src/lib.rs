//! `warden-http` — default denial boundary over axum.
//!
//! Interprets gate denials as terminating HTTP responses: a forbidden JSON
//! body for machine/background traffic, a rendered denial page for
//! interactive page loads, or a registered handler's response verbatim.

pub mod classify;
pub mod messages;
pub mod middleware;
pub mod respond;

pub use classify::{RequestKind, classify};
pub use messages::{DENY_KEY, DefaultMessages, MessageSource, StaticMessages};
pub use middleware::{GateState, Requirement, authorize};
pub use respond::{denial_page, denial_response, forbidden_response};
