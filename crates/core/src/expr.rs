//! Requirement expressions.
//!
//! Checks accept either a single identifier or a collection. Both forms are
//! captured in a typed union and normalized to a flat slice at the entry of
//! each gate operation, so evaluation is uniform.

use crate::{Permission, Role};

/// Permission requirement: one identifier or a conjunction of identifiers.
///
/// A collection means *all* listed permissions must be held. The empty
/// collection is a vacuous conjunction and is always satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionExpr {
    One(Permission),
    All(Vec<Permission>),
}

impl PermissionExpr {
    /// Normalized view over the required permissions.
    pub fn as_slice(&self) -> &[Permission] {
        match self {
            Self::One(permission) => core::slice::from_ref(permission),
            Self::All(permissions) => permissions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Permission> for PermissionExpr {
    fn from(permission: Permission) -> Self {
        Self::One(permission)
    }
}

impl From<&'static str> for PermissionExpr {
    fn from(name: &'static str) -> Self {
        Self::One(Permission::new(name))
    }
}

impl From<String> for PermissionExpr {
    fn from(name: String) -> Self {
        Self::One(Permission::new(name))
    }
}

impl From<Vec<Permission>> for PermissionExpr {
    fn from(permissions: Vec<Permission>) -> Self {
        Self::All(permissions)
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionExpr {
    fn from(permissions: [Permission; N]) -> Self {
        Self::All(permissions.into())
    }
}

impl<const N: usize> From<[&'static str; N]> for PermissionExpr {
    fn from(names: [&'static str; N]) -> Self {
        Self::All(names.into_iter().map(Permission::new).collect())
    }
}

impl FromIterator<Permission> for PermissionExpr {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self::All(iter.into_iter().collect())
    }
}

/// Role requirement: one identifier or a set of identifiers.
///
/// Allow-checks treat the set as a disjunction ("holds at least one");
/// deny-checks trigger when the actor holds at least one listed role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleExpr {
    One(Role),
    Any(Vec<Role>),
}

impl RoleExpr {
    /// Normalized view over the listed roles.
    pub fn as_slice(&self) -> &[Role] {
        match self {
            Self::One(role) => core::slice::from_ref(role),
            Self::Any(roles) => roles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Role> for RoleExpr {
    fn from(role: Role) -> Self {
        Self::One(role)
    }
}

impl From<&'static str> for RoleExpr {
    fn from(name: &'static str) -> Self {
        Self::One(Role::new(name))
    }
}

impl From<String> for RoleExpr {
    fn from(name: String) -> Self {
        Self::One(Role::new(name))
    }
}

impl From<Vec<Role>> for RoleExpr {
    fn from(roles: Vec<Role>) -> Self {
        Self::Any(roles)
    }
}

impl<const N: usize> From<[Role; N]> for RoleExpr {
    fn from(roles: [Role; N]) -> Self {
        Self::Any(roles.into())
    }
}

impl<const N: usize> From<[&'static str; N]> for RoleExpr {
    fn from(names: [&'static str; N]) -> Self {
        Self::Any(names.into_iter().map(Role::new).collect())
    }
}

impl FromIterator<Role> for RoleExpr {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self::Any(iter.into_iter().collect())
    }
}
