//! Issuance authorization capability.
//!
//! Replaces role-based gating with an explicit predicate: the controller asks
//! the injected policy whether a caller holds the issuance capability and
//! nothing more. Who grants or revokes that capability is the host's concern.

use nova_types::AccountId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Capability predicate deciding who may trigger issuance.
pub trait IssuancePolicy: Send + Sync {
    fn can_issue(&self, caller: &AccountId) -> bool;
}

/// Explicit allowlist of accounts holding the issuance capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinterSet {
    minters: HashSet<AccountId>,
}

impl MinterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant the issuance capability to `account`.
    pub fn grant(&mut self, account: AccountId) {
        self.minters.insert(account);
    }

    /// Revoke the issuance capability from `account`.
    pub fn revoke(&mut self, account: &AccountId) {
        self.minters.remove(account);
    }

    pub fn is_minter(&self, account: &AccountId) -> bool {
        self.minters.contains(account)
    }
}

impl IssuancePolicy for MinterSet {
    fn can_issue(&self, caller: &AccountId) -> bool {
        self.is_minter(caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to derive an AccountId from a label for testing.
    fn test_account_id(s: &str) -> AccountId {
        let hash = blake3::hash(s.as_bytes());
        *hash.as_bytes()
    }

    #[test]
    fn grant_and_revoke_toggle_the_capability() {
        let minter = test_account_id("minter");
        let outsider = test_account_id("outsider");

        let mut set = MinterSet::new();
        assert!(!set.can_issue(&minter));

        set.grant(minter);
        assert!(set.can_issue(&minter));
        assert!(!set.can_issue(&outsider));

        set.revoke(&minter);
        assert!(!set.can_issue(&minter));
    }
}
