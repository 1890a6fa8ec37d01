//! Token ledger interface.
//!
//! The issuance controller never touches balances or total-supply bookkeeping
//! directly; it talks to this narrow trait, injected at construction. The
//! in-memory implementation backs the node runtime and tests; the mock
//! additionally records every call for assertion.

use anyhow::Result;
use nova_types::{AccountId, AttoNova};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Interface for the external fungible-token ledger.
pub trait Ledger: Send + Sync {
    /// Mint `amount` new units to `account`, growing the total supply.
    fn mint(&mut self, account: &AccountId, amount: AttoNova) -> Result<()>;

    /// Current total supply across all accounts.
    fn total_supply(&self) -> Result<AttoNova>;

    /// Balance held by `account`.
    fn balance_of(&self, account: &AccountId) -> Result<AttoNova>;
}

/// In-memory ledger for the node runtime and testing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryLedger {
    balances: HashMap<AccountId, AttoNova>,
    total_supply: AttoNova,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    /// Ledger whose total supply starts at `genesis_supply` (held outside any
    /// tracked account, as at chain genesis).
    pub fn with_supply(genesis_supply: AttoNova) -> Self {
        Self {
            balances: HashMap::new(),
            total_supply: genesis_supply,
        }
    }
}

impl Ledger for InMemoryLedger {
    fn mint(&mut self, account: &AccountId, amount: AttoNova) -> Result<()> {
        let new_total = self
            .total_supply
            .checked_add(amount)
            .ok_or_else(|| anyhow::anyhow!("total supply overflow"))?;
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance.saturating_add(amount);
        self.total_supply = new_total;
        Ok(())
    }

    fn total_supply(&self) -> Result<AttoNova> {
        Ok(self.total_supply)
    }

    fn balance_of(&self, account: &AccountId) -> Result<AttoNova> {
        Ok(self.balances.get(account).copied().unwrap_or(0))
    }
}

/// Mock ledger recording every mint for deterministic testing.
#[derive(Debug, Clone, Default)]
pub struct MockLedger {
    inner: InMemoryLedger,
    mint_calls: Vec<(AccountId, AttoNova)>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_supply(genesis_supply: AttoNova) -> Self {
        Self {
            inner: InMemoryLedger::with_supply(genesis_supply),
            mint_calls: Vec::new(),
        }
    }

    pub fn mint_calls(&self) -> &[(AccountId, AttoNova)] {
        &self.mint_calls
    }
}

impl Ledger for MockLedger {
    fn mint(&mut self, account: &AccountId, amount: AttoNova) -> Result<()> {
        self.mint_calls.push((*account, amount));
        self.inner.mint(account, amount)
    }

    fn total_supply(&self) -> Result<AttoNova> {
        self.inner.total_supply()
    }

    fn balance_of(&self, account: &AccountId) -> Result<AttoNova> {
        self.inner.balance_of(account)
    }
}
