use warden_core::{ActorId, Permission, Role};

/// The authenticated principal under evaluation.
///
/// Implementations are supplied by the identity layer for the current
/// execution context; the gate only reads, never mutates.
pub trait Actor {
    fn has_permission(&self, permission: &Permission) -> bool;

    fn in_role(&self, role: &Role) -> bool;

    /// Whether this actor counts as an administrator for the designated role.
    fn is_administrator(&self, administrator_role: &Role) -> bool {
        self.in_role(administrator_role)
    }
}

/// A fully resolved actor: identity plus granted permissions and roles.
///
/// Construction is decoupled from storage and transport; hosts typically
/// derive one from session or token claims before dispatching to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedActor {
    pub id: ActorId,
    pub permissions: Vec<Permission>,
    pub roles: Vec<Role>,
}

impl ResolvedActor {
    pub fn new(id: ActorId) -> Self {
        Self {
            id,
            permissions: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Unauthenticated fallback. Empty grants, so every non-exempt check
    /// fails for it.
    pub fn anonymous() -> Self {
        Self::new(ActorId::new())
    }

    pub fn with_permissions(
        mut self,
        permissions: impl IntoIterator<Item = impl Into<Permission>>,
    ) -> Self {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = impl Into<Role>>) -> Self {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

impl Actor for ResolvedActor {
    fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions.iter().any(|held| held == permission)
    }

    fn in_role(&self, role: &Role) -> bool {
        self.roles.iter().any(|held| held == role)
    }
}
