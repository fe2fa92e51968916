use serde::Serialize;
use thiserror::Error;

use stockroom_core::DomainError;

use crate::capabilities::{capabilities, Capability};
use crate::roles::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{role}' lacks '{capability}'")]
    Forbidden { role: String, capability: Capability },
}

impl From<AuthzError> for DomainError {
    fn from(err: AuthzError) -> Self {
        DomainError::unauthorized(err.to_string())
    }
}

/// Check that `role` holds `capability`.
///
/// - No IO
/// - No panics
pub fn authorize(role: &Role, capability: Capability) -> Result<(), AuthzError> {
    if capabilities(role).allows(capability) {
        Ok(())
    } else {
        tracing::debug!(role = %role, capability = %capability, "capability denied");
        Err(AuthzError::Forbidden {
            role: role.to_string(),
            capability,
        })
    }
}

/// Why a capability check came out the way it did.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationExplanation {
    pub role: String,
    pub capability: Capability,
    pub granted: bool,
    pub reason: String,
    pub granted_capabilities: Vec<Capability>,
}

/// Explain a capability decision, for audit output and denial messages.
pub fn explain(role: &Role, capability: Capability) -> AuthorizationExplanation {
    let caps = capabilities(role);
    let granted = caps.allows(capability);

    let reason = if granted && role.is_privileged() {
        format!("role '{role}' is privileged and holds every capability")
    } else if granted {
        format!("'{capability}' is granted to all staff roles")
    } else {
        format!("'{capability}' requires the manager or admin role; '{role}' is staff")
    };

    AuthorizationExplanation {
        role: role.to_string(),
        capability,
        granted,
        reason,
        granted_capabilities: caps.granted(),
    }
}
