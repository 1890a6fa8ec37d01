//! Annual inflation rate schedule.
//!
//! An ordered table mapping a zero-based schedule-year index to an inflation
//! rate in basis points. Years beyond the table resolve to the last entry,
//! the terminal rate, so lookups are total. The table is designed to be
//! serialized into chain config storage and is immutable once constructed.

use crate::errors::EconomicsError;
use crate::types::YearIndex;
use serde::{Deserialize, Serialize};

/// Reference schedule: 900 bps in year 0, decaying 15 % relative per year
/// (integer floor recurrence `rate * 85 / 100`) through year 10, then a
/// 150 bps terminal rate from year 11 on.
pub const REFERENCE_RATES_BPS: [u32; 12] =
    [900, 765, 650, 552, 469, 398, 338, 287, 243, 206, 175, 150];

/// Immutable per-year inflation rate table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct RateSchedule {
    rates_bps: Vec<u32>,
}

impl RateSchedule {
    /// Build a schedule from per-year rates. At least one entry is required;
    /// an empty table is a configuration error.
    pub fn new(rates_bps: Vec<u32>) -> Result<Self, EconomicsError> {
        if rates_bps.is_empty() {
            return Err(EconomicsError::EmptySchedule);
        }
        Ok(Self { rates_bps })
    }

    /// Rate for a schedule year, in basis points. Indices past the end of
    /// the table clamp to the terminal rate, so this never fails.
    pub fn rate_for_year(&self, year: YearIndex) -> u32 {
        let last = self.rates_bps.len() - 1;
        let idx = usize::try_from(year).map_or(last, |y| y.min(last));
        self.rates_bps[idx]
    }

    /// Rate applied to every year beyond the explicit table.
    pub fn terminal_rate(&self) -> u32 {
        self.rates_bps[self.rates_bps.len() - 1]
    }

    /// Number of explicit yearly entries.
    pub fn year_count(&self) -> usize {
        self.rates_bps.len()
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            rates_bps: REFERENCE_RATES_BPS.to_vec(),
        }
    }
}

impl TryFrom<Vec<u32>> for RateSchedule {
    type Error = EconomicsError;

    fn try_from(rates_bps: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(rates_bps)
    }
}

impl From<RateSchedule> for Vec<u32> {
    fn from(schedule: RateSchedule) -> Self {
        schedule.rates_bps
    }
}
