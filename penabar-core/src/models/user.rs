//! Member profile types.
//!
//! - [`User`] - The profile the backend returns from `/me`, `/login` and
//!   `/register`
//! - [`Role`] - Access level of a member

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Role
// ============================================================================

/// Access level of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular member: can browse the menu and place orders.
    Cliente,
    /// Staff: can additionally serve and cancel pending orders and manage
    /// the catalog.
    Admin,
    /// Owner role. Cannot be demoted or deleted through the client.
    Superadmin,
}

impl Role {
    /// Returns true for roles allowed into the staff screens
    /// (pending queue, catalog management, statistics).
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Superadmin)
    }

    /// Wire name of the role (lowercase, as the backend sends it).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cliente => "cliente",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// User
// ============================================================================

/// A member's profile as the backend reports it.
///
/// `balance` (wire: `saldo`) is the running tab: negative means the member
/// owes money. The backend serializes it as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier.
    pub id: i64,
    /// Display name. Unique across members.
    pub name: String,
    /// Access level.
    pub role: Role,
    /// Running tab balance. May be negative.
    #[serde(rename = "saldo")]
    pub balance: Decimal,
}

impl User {
    /// Returns true if this member may use the staff operations.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_staff_levels() {
        assert!(!Role::Cliente.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(Role::Superadmin.is_staff());
    }

    #[test]
    fn test_role_display_matches_wire_name() {
        assert_eq!(Role::Cliente.to_string(), "cliente");
        assert_eq!(Role::Superadmin.to_string(), "superadmin");
    }
}
