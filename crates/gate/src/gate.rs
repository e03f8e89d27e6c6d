use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use warden_core::{AccessDenied, GateResult, PermissionExpr, Role, RoleExpr};

use crate::{Actor, EnforcementConfig};

/// Terminating outcome produced for a denial.
#[derive(Debug)]
pub enum DenialOutcome<A> {
    /// A registered handler produced the terminating action. The action is
    /// the payload as-is, not further interpreted.
    Custom(A),
    /// No handler registered; the boundary applies its default denial.
    Default,
}

type HandlerSlot<A> = RwLock<Option<Arc<dyn Fn() -> A + Send + Sync>>>;

/// The authorization gate.
///
/// `A` is the terminating action a denial handler produces (an HTTP response
/// at the axum boundary); the gate itself never interprets it, keeping the
/// decision core transport-free.
///
/// # Invariants
/// - The administrator override is evaluated first by every checking
///   operation and short-circuits all remaining evaluation.
/// - Checks are stateless per invocation; the only process-wide state is the
///   enforcement flag and the denial-handler slot.
pub struct Gate<A> {
    enforcement: Arc<EnforcementConfig>,
    administrator_role: Role,
    denial_handler: HandlerSlot<A>,
}

impl<A> Gate<A> {
    pub fn new(enforcement: Arc<EnforcementConfig>) -> Self {
        Self {
            enforcement,
            administrator_role: Role::ADMINISTRATOR,
            denial_handler: RwLock::new(None),
        }
    }

    /// Override the designated administrator role.
    pub fn with_administrator_role(mut self, role: Role) -> Self {
        self.administrator_role = role;
        self
    }

    /// Require every listed permission.
    ///
    /// Conjunction over the normalized sequence, fail-fast on the first
    /// missing permission. The empty collection trivially succeeds.
    pub fn check_permission(
        &self,
        actor: &dyn Actor,
        expr: impl Into<PermissionExpr>,
    ) -> GateResult {
        if self.is_administrator(actor) {
            return Ok(());
        }

        let expr = expr.into();
        for permission in expr.as_slice() {
            if !actor.has_permission(permission) {
                debug!(permission = %permission, "permission check failed");
                return Err(AccessDenied);
            }
        }

        Ok(())
    }

    /// Require at least one of the listed roles.
    pub fn allow(&self, actor: &dyn Actor, roles: impl Into<RoleExpr>) -> GateResult {
        if self.is_administrator(actor) {
            return Ok(());
        }

        let roles = roles.into();
        if roles.as_slice().iter().any(|role| actor.in_role(role)) {
            Ok(())
        } else {
            debug!("role allow-list check failed");
            Err(AccessDenied)
        }
    }

    /// Explicit "no authorization required" marker. Performs no checks and
    /// never inspects the actor.
    pub fn free(&self) -> GateResult {
        Ok(())
    }

    /// Deny when the actor holds any listed role. Administrators are exempt
    /// from deny-lists.
    pub fn deny(&self, actor: &dyn Actor, roles: impl Into<RoleExpr>) -> GateResult {
        if self.is_administrator(actor) {
            return Ok(());
        }

        let roles = roles.into();
        if roles.as_slice().iter().any(|role| actor.in_role(role)) {
            debug!("role deny-list check failed");
            Err(AccessDenied)
        } else {
            Ok(())
        }
    }

    /// True when enforcement is globally disabled, or the actor's
    /// administrator predicate holds for the designated administrator role.
    ///
    /// Pure query; usable independently by callers.
    pub fn is_administrator(&self, actor: &dyn Actor) -> bool {
        !self.enforcement.is_enabled() || actor.is_administrator(&self.administrator_role)
    }

    /// Replace the denial handler.
    ///
    /// Last writer wins; concurrent readers observe either the old or the
    /// new handler, never a torn one. Safe to call before any decision has
    /// been evaluated.
    pub fn register_denial_handler(&self, handler: impl Fn() -> A + Send + Sync + 'static) {
        let mut slot = self
            .denial_handler
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(handler));
        debug!("denial handler registered");
    }

    /// Produce the terminating outcome for a denial.
    ///
    /// Consults the registered handler first; without one the boundary layer
    /// resolves [`DenialOutcome::Default`] against the request shape.
    pub fn denial(&self) -> DenialOutcome<A> {
        let slot = self
            .denial_handler
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(handler) => DenialOutcome::Custom(handler()),
            None => DenialOutcome::Default,
        }
    }
}
