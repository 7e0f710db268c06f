use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::common::MemberId;

/// Platform roles
///
/// Staff review drafts and publish approved work; brands review pending
/// submissions against their own campaigns; creators submit content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Staff,
    Brand,
    Creator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Staff => write!(f, "staff"),
            Role::Brand => write!(f, "brand"),
            Role::Creator => write!(f, "creator"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "staff" => Ok(Role::Staff),
            "brand" => Ok(Role::Brand),
            "creator" => Ok(Role::Creator),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}

/// The acting member, as established by the identity context
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub member_id: MemberId,
    pub role: Role,
}

impl Actor {
    pub fn new(member_id: MemberId, role: Role) -> Self {
        Self { member_id, role }
    }

    /// Require a specific role, erroring otherwise
    pub fn require_role(&self, role: Role) -> Result<(), AuthError> {
        if self.role == role {
            Ok(())
        } else if role == Role::Staff {
            Err(AuthError::StaffRequired)
        } else {
            Err(AuthError::PermissionDenied(format!(
                "{} access required, actor is {}",
                role, self.role
            )))
        }
    }
}
