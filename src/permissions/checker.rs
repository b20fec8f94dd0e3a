//! Admin checking by services account.

use crate::utils::irc_eq;

/// Permission checker for admin-only commands.
///
/// A sender is an admin when the account they are logged in to (delivered
/// by the host framework as the `account` message tag) appears in the
/// configured admin list. An unidentified sender is never an admin.
#[derive(Debug, Clone)]
pub struct Permissions {
    admin_accounts: Vec<String>,
}

impl Permissions {
    /// Create a permission checker from the configured admin accounts.
    pub fn with_admins(admin_accounts: Vec<String>) -> Self {
        Self { admin_accounts }
    }

    /// Whether the sender is logged in to one of the admin accounts.
    ///
    /// Account names are compared under RFC 1459 casemapping, the same
    /// normalization used for all identifiers.
    pub fn is_admin(&self, account: Option<&str>) -> bool {
        let Some(account) = account else {
            return false;
        };
        self.admin_accounts.iter().any(|admin| irc_eq(admin, account))
    }
}
