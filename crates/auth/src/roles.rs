use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role of a dashboard user, as reported by the backend.
///
/// Kept as an opaque string so roles the client does not know about still
/// deserialize; they simply get the non-privileged capability set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const EMPLOYEE: Role = Role(Cow::Borrowed("employee"));
    pub const MANAGER: Role = Role(Cow::Borrowed("manager"));
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));
    pub const FRONT_DESK: Role = Role(Cow::Borrowed("front desk"));
    pub const HOUSEKEEPING: Role = Role(Cow::Borrowed("housekeeping"));
    pub const MAINTENANCE: Role = Role(Cow::Borrowed("maintenance"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Manager and admin may manage stock directly; everyone else goes through
    /// update requests. Matching ignores case and surrounding whitespace.
    pub fn is_privileged(&self) -> bool {
        let name = self.0.trim();
        name.eq_ignore_ascii_case(Self::MANAGER.as_str())
            || name.eq_ignore_ascii_case(Self::ADMIN.as_str())
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::EMPLOYEE
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
