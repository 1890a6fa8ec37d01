//! Issuance controller.
//!
//! The only stateful piece of the system. Owns the origin and last-issuance
//! times, gates issuance behind the injected capability policy, computes the
//! accrued amount with the economics engine, and commits it to the injected
//! ledger. The host execution model serializes calls; each one runs to
//! completion or leaves no trace.

use crate::errors::IssuanceError;
use crate::ledger::Ledger;
use crate::policy::IssuancePolicy;
use nova_economics::{accrual_detail, compute_accrual, RateSchedule, YearIndex};
use nova_types::{format_nova, short_account_hex, AccountId, AttoNova, UnixTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Record of one successful non-zero issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceEvent {
    pub beneficiary: AccountId,
    pub amount: AttoNova,
    pub issued_at: UnixTime,
}

/// Read-only snapshot of the controller and its collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuanceStatus {
    pub origin_time: UnixTime,
    pub last_issuance_time: UnixTime,
    pub current_year: YearIndex,
    pub current_rate_bps: u32,
    pub total_supply: AttoNova,
    pub pending_accrual: AttoNova,
}

/// Schedule-gated issuance against an external ledger.
pub struct IssuanceController {
    schedule: RateSchedule,
    origin_time: UnixTime,
    last_issuance_time: UnixTime,
    ledger: Box<dyn Ledger>,
    policy: Box<dyn IssuancePolicy>,
    events: Vec<IssuanceEvent>,
}

impl IssuanceController {
    /// Create a controller anchored at `origin_time`. The first accrual
    /// period starts there: `last_issuance_time` is initialized to it.
    pub fn new(
        schedule: RateSchedule,
        origin_time: UnixTime,
        ledger: Box<dyn Ledger>,
        policy: Box<dyn IssuancePolicy>,
    ) -> Self {
        Self {
            schedule,
            origin_time,
            last_issuance_time: origin_time,
            ledger,
            policy,
            events: Vec::new(),
        }
    }

    /// Amount accrued but not yet issued as of `now`. Read-only, open to all
    /// callers. The base amount is the ledger's current total supply.
    pub fn preview_accrual(&self, now: UnixTime) -> Result<AttoNova, IssuanceError> {
        let base = self.ledger.total_supply()?;
        Ok(compute_accrual(
            self.origin_time,
            self.last_issuance_time,
            now,
            base,
            &self.schedule,
        )?)
    }

    /// Mint everything accrued up to `now` to `beneficiary`, returning the
    /// amount issued.
    ///
    /// The caller must hold the issuance capability. A zero accrual succeeds
    /// as a no-op: nothing advances and no event is recorded, so two calls at
    /// the same instant cannot double-issue. The ledger mint commits before
    /// the state advance; a mint failure propagates with the controller
    /// untouched.
    pub fn issue(
        &mut self,
        now: UnixTime,
        caller: &AccountId,
        beneficiary: &AccountId,
    ) -> Result<AttoNova, IssuanceError> {
        if !self.policy.can_issue(caller) {
            return Err(IssuanceError::Unauthorized { caller: *caller });
        }

        let amount = self.preview_accrual(now)?;
        if amount == 0 {
            debug!(target: "issuance", now, "no accrual pending, issuance is a no-op");
            return Ok(0);
        }

        self.ledger.mint(beneficiary, amount)?;
        self.last_issuance_time = now;
        self.events.push(IssuanceEvent {
            beneficiary: *beneficiary,
            amount,
            issued_at: now,
        });

        info!(
            target: "issuance",
            beneficiary = %short_account_hex(beneficiary),
            amount = %format_nova(amount),
            issued_at = now,
            "issued accrued supply"
        );

        Ok(amount)
    }

    /// Snapshot of the controller and ledger observables as of `now`.
    pub fn status(&self, now: UnixTime) -> Result<IssuanceStatus, IssuanceError> {
        let total_supply = self.ledger.total_supply()?;
        let detail = accrual_detail(
            self.origin_time,
            self.last_issuance_time,
            now,
            total_supply,
            &self.schedule,
        )?;

        Ok(IssuanceStatus {
            origin_time: self.origin_time,
            last_issuance_time: self.last_issuance_time,
            current_year: detail.end_year,
            current_rate_bps: detail.end_year_rate_bps,
            total_supply,
            pending_accrual: detail.accrued,
        })
    }

    pub fn origin_time(&self) -> UnixTime {
        self.origin_time
    }

    pub fn last_issuance_time(&self) -> UnixTime {
        self.last_issuance_time
    }

    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Every non-zero issuance committed through this controller, in order.
    pub fn events(&self) -> &[IssuanceEvent] {
        &self.events
    }

    /// Total minted through this controller across all issuances.
    pub fn total_issued(&self) -> AttoNova {
        self.events.iter().map(|e| e.amount).sum()
    }

    /// Ledger collaborator, for queries.
    pub fn ledger(&self) -> &dyn Ledger {
        self.ledger.as_ref()
    }
}
