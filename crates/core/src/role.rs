use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for RBAC checks.
///
/// Roles are intentionally opaque strings at this layer; mapping roles to
/// permissions happens wherever the identity layer resolves actors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Designated administrator role, exempt from every check.
    pub const ADMINISTRATOR: Role = Role(Cow::Borrowed("administrator"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Role {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
