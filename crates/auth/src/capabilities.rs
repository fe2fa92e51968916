use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// A single thing the dashboard may let a user do.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    View,
    CreateItems,
    EditItems,
    DeleteItems,
    EditThresholds,
    SubmitRequests,
    DecideRequests,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::View,
        Capability::CreateItems,
        Capability::EditItems,
        Capability::DeleteItems,
        Capability::EditThresholds,
        Capability::SubmitRequests,
        Capability::DecideRequests,
    ];

    /// Permission name in `module.action` form, used in logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::View => "inventory.read",
            Capability::CreateItems => "inventory.create",
            Capability::EditItems => "inventory.update",
            Capability::DeleteItems => "inventory.delete",
            Capability::EditThresholds => "inventory.thresholds.update",
            Capability::SubmitRequests => "inventory.requests.create",
            Capability::DecideRequests => "inventory.requests.decide",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability set for one role, shaped for the view layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_view: bool,
    pub can_create_items: bool,
    pub can_edit_items: bool,
    pub can_delete_items: bool,
    pub can_edit_thresholds: bool,
    pub can_submit_requests: bool,
    pub can_decide_requests: bool,
}

impl Capabilities {
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::View => self.can_view,
            Capability::CreateItems => self.can_create_items,
            Capability::EditItems => self.can_edit_items,
            Capability::DeleteItems => self.can_delete_items,
            Capability::EditThresholds => self.can_edit_thresholds,
            Capability::SubmitRequests => self.can_submit_requests,
            Capability::DecideRequests => self.can_decide_requests,
        }
    }

    /// Granted capabilities, in declaration order.
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.allows(*c))
            .collect()
    }
}

/// Map a role to what the dashboard lets it do.
///
/// Managers and admins get everything. Other staff can browse stock and
/// propose quantity changes, which a manager then approves or rejects.
pub fn capabilities(role: &Role) -> Capabilities {
    let privileged = role.is_privileged();
    Capabilities {
        can_view: true,
        can_create_items: privileged,
        can_edit_items: privileged,
        can_delete_items: privileged,
        can_edit_thresholds: privileged,
        can_submit_requests: true,
        can_decide_requests: privileged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managers_and_admins_get_everything() {
        for role in [Role::MANAGER, Role::ADMIN] {
            let caps = capabilities(&role);
            assert_eq!(caps.granted(), Capability::ALL.to_vec(), "role {role}");
        }
    }

    #[test]
    fn staff_roles_may_only_view_and_submit() {
        for role in [
            Role::EMPLOYEE,
            Role::FRONT_DESK,
            Role::HOUSEKEEPING,
            Role::MAINTENANCE,
            Role::new("contractor"),
        ] {
            let caps = capabilities(&role);
            assert_eq!(
                caps.granted(),
                vec![Capability::View, Capability::SubmitRequests],
                "role {role}"
            );
            assert!(!caps.can_delete_items);
            assert!(!caps.can_edit_thresholds);
        }
    }
}
