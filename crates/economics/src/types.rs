//! Core types and constants for the accrual engine.

use nova_types::AttoNova;
use serde::{Deserialize, Serialize};

/// Zero-based schedule-year index counted from the origin time.
pub type YearIndex = u64;

/// Basis-point denominator applied to every rate in the schedule.
pub const RATE_DENOMINATOR: u128 = 10_000;

/// Fixed length of a schedule year in seconds (365 days).
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Detailed view of one accrual computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualDetail {
    /// Amount newly accrued between the last issuance and `now`.
    pub accrued: AttoNova,
    /// Schedule year the interval starts in.
    pub start_year: YearIndex,
    /// Full schedule-year boundaries crossed by the interval.
    pub boundaries_crossed: u64,
    /// Base amount after compounding every crossed year.
    pub compounded_base: AttoNova,
    /// Schedule year the interval ends in.
    pub end_year: YearIndex,
    /// Rate applied to the final partial year, in basis points.
    pub end_year_rate_bps: u32,
    /// Seconds of the final partial year covered by the interval.
    pub partial_seconds: u64,
}
