//! Compounding accrual core.
//!
//! Walks forward one schedule year at a time from the last issuance,
//! compounding the base amount by each crossed year's rate, then pro-rates
//! the final partial year by elapsed seconds. Multiplications always happen
//! before divisions so truncation loss is confined to the final floor, and
//! every intermediate step is overflow-checked.

use crate::errors::EconomicsError;
use crate::schedule::RateSchedule;
use crate::types::{AccrualDetail, YearIndex, RATE_DENOMINATOR, SECONDS_PER_YEAR};
use nova_types::{AttoNova, UnixTime};
use tracing::debug;

/// Amount newly accrued between `last_issuance_time` and `now`.
///
/// `base_amount` is the total issued supply at `last_issuance_time`; each
/// crossed year's rate applies to the already-grown amount, so a multi-year
/// gap reproduces bit-for-bit the result of issuing at every intermediate
/// year boundary.
pub fn compute_accrual(
    origin_time: UnixTime,
    last_issuance_time: UnixTime,
    now: UnixTime,
    base_amount: AttoNova,
    schedule: &RateSchedule,
) -> Result<AttoNova, EconomicsError> {
    Ok(accrual_detail(origin_time, last_issuance_time, now, base_amount, schedule)?.accrued)
}

/// [`compute_accrual`] plus the observables of the year walk.
pub fn accrual_detail(
    origin_time: UnixTime,
    last_issuance_time: UnixTime,
    now: UnixTime,
    base_amount: AttoNova,
    schedule: &RateSchedule,
) -> Result<AccrualDetail, EconomicsError> {
    if last_issuance_time < origin_time {
        return Err(EconomicsError::InvalidTimeOrdering {
            reference: origin_time,
            at: last_issuance_time,
        });
    }
    if now < last_issuance_time {
        return Err(EconomicsError::InvalidTimeOrdering {
            reference: last_issuance_time,
            at: now,
        });
    }

    let start_year: YearIndex = (last_issuance_time - origin_time) / SECONDS_PER_YEAR;
    let mut year = start_year;
    let mut cursor = last_issuance_time;
    let mut supply = base_amount;
    let mut accrued: AttoNova = 0;
    let mut boundaries_crossed = 0u64;

    // Full years first. The first iteration may cover less than a whole year
    // when the last issuance fell mid-year; every later one covers exactly
    // SECONDS_PER_YEAR.
    loop {
        let boundary = year_boundary(origin_time, year)?;
        if boundary > now {
            break;
        }
        let yearly = yearly_allotment(supply, schedule.rate_for_year(year))?;
        accrued = accrued
            .checked_add(prorate(yearly, boundary - cursor)?)
            .ok_or(EconomicsError::ArithmeticOverflow("accrued total"))?;
        supply = supply
            .checked_add(yearly)
            .ok_or(EconomicsError::ArithmeticOverflow("compounded base"))?;
        cursor = boundary;
        year += 1;
        boundaries_crossed += 1;
    }

    // Final partial year, pro-rated by elapsed seconds.
    let partial_seconds = now - cursor;
    let end_year_rate_bps = schedule.rate_for_year(year);
    if partial_seconds > 0 {
        let yearly = yearly_allotment(supply, end_year_rate_bps)?;
        accrued = accrued
            .checked_add(prorate(yearly, partial_seconds)?)
            .ok_or(EconomicsError::ArithmeticOverflow("accrued total"))?;
    }

    debug!(
        target: "economics",
        start_year,
        boundaries_crossed,
        partial_seconds,
        accrued,
        "computed accrual"
    );

    Ok(AccrualDetail {
        accrued,
        start_year,
        boundaries_crossed,
        compounded_base: supply,
        end_year: year,
        end_year_rate_bps,
        partial_seconds,
    })
}

/// Total supply at `now` had issuance been triggered there with none before
/// it: the genesis supply plus everything accrued since the origin.
pub fn projected_total_supply(
    origin_time: UnixTime,
    now: UnixTime,
    genesis_supply: AttoNova,
    schedule: &RateSchedule,
) -> Result<AttoNova, EconomicsError> {
    let accrued = compute_accrual(origin_time, origin_time, now, genesis_supply, schedule)?;
    genesis_supply
        .checked_add(accrued)
        .ok_or(EconomicsError::ArithmeticOverflow("projected supply"))
}

/// End of schedule year `year`: `origin + (year + 1) * SECONDS_PER_YEAR`.
fn year_boundary(origin_time: UnixTime, year: YearIndex) -> Result<UnixTime, EconomicsError> {
    year.checked_add(1)
        .and_then(|next| next.checked_mul(SECONDS_PER_YEAR))
        .and_then(|offset| origin_time.checked_add(offset))
        .ok_or(EconomicsError::ArithmeticOverflow("schedule year boundary"))
}

/// Full-year allotment at `rate_bps`: `floor(supply * rate / 10_000)`.
fn yearly_allotment(supply: AttoNova, rate_bps: u32) -> Result<AttoNova, EconomicsError> {
    supply
        .checked_mul(u128::from(rate_bps))
        .map(|scaled| scaled / RATE_DENOMINATOR)
        .ok_or(EconomicsError::ArithmeticOverflow("yearly allotment"))
}

/// Slice of a yearly allotment covering `seconds` of the year:
/// `floor(yearly * seconds / SECONDS_PER_YEAR)`.
fn prorate(yearly: AttoNova, seconds: u64) -> Result<AttoNova, EconomicsError> {
    yearly
        .checked_mul(u128::from(seconds))
        .map(|scaled| scaled / u128::from(SECONDS_PER_YEAR))
        .ok_or(EconomicsError::ArithmeticOverflow("pro-rated slice"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_types::novas;

    const ORIGIN: UnixTime = 1_700_000_000;
    const GENESIS: AttoNova = novas(1_000_000_000);

    fn schedule() -> RateSchedule {
        RateSchedule::default()
    }

    #[test]
    fn zero_interval_accrues_nothing() {
        let accrued =
            compute_accrual(ORIGIN, ORIGIN, ORIGIN, GENESIS, &schedule()).unwrap();
        assert_eq!(accrued, 0);

        // Same instant later in the timeline, mid-year.
        let t = ORIGIN + SECONDS_PER_YEAR / 3;
        let accrued = compute_accrual(ORIGIN, t, t, GENESIS, &schedule()).unwrap();
        assert_eq!(accrued, 0);
    }

    #[test]
    fn half_year_pays_half_the_allotment() {
        let now = ORIGIN + SECONDS_PER_YEAR / 2;
        let accrued = compute_accrual(ORIGIN, ORIGIN, now, GENESIS, &schedule()).unwrap();
        assert_eq!(accrued, GENESIS * 900 / 10_000 / 2);
    }

    #[test]
    fn full_first_year_pays_the_exact_allotment() {
        let now = ORIGIN + SECONDS_PER_YEAR;
        let detail = accrual_detail(ORIGIN, ORIGIN, now, GENESIS, &schedule()).unwrap();
        assert_eq!(detail.accrued, GENESIS * 900 / 10_000);
        assert_eq!(detail.boundaries_crossed, 1);
        assert_eq!(detail.partial_seconds, 0);
        assert_eq!(detail.compounded_base, GENESIS + GENESIS * 900 / 10_000);
    }

    #[test]
    fn mid_year_start_prorates_the_remainder() {
        // Last issuance at the half-year mark; the second half of year 0 pays
        // the other half of the allotment computed on the grown ledger total.
        let last = ORIGIN + SECONDS_PER_YEAR / 2;
        let base = GENESIS + GENESIS * 900 / 10_000 / 2;
        let now = ORIGIN + SECONDS_PER_YEAR;

        let accrued = compute_accrual(ORIGIN, last, now, base, &schedule()).unwrap();
        assert_eq!(accrued, (base * 900 / 10_000) * u128::from(SECONDS_PER_YEAR / 2)
            / u128::from(SECONDS_PER_YEAR));
    }

    #[test]
    fn rejects_inverted_intervals() {
        match compute_accrual(ORIGIN, ORIGIN + 10, ORIGIN + 5, GENESIS, &schedule()) {
            Err(EconomicsError::InvalidTimeOrdering { reference, at }) => {
                assert_eq!(reference, ORIGIN + 10);
                assert_eq!(at, ORIGIN + 5);
            }
            other => panic!("expected InvalidTimeOrdering, got {other:?}"),
        }

        match compute_accrual(ORIGIN, ORIGIN - 1, ORIGIN, GENESIS, &schedule()) {
            Err(EconomicsError::InvalidTimeOrdering { reference, at }) => {
                assert_eq!(reference, ORIGIN);
                assert_eq!(at, ORIGIN - 1);
            }
            other => panic!("expected InvalidTimeOrdering, got {other:?}"),
        }
    }

    #[test]
    fn reports_overflow_instead_of_wrapping() {
        let absurd = u128::MAX / 100;
        match compute_accrual(ORIGIN, ORIGIN, ORIGIN + 1, absurd, &schedule()) {
            Err(EconomicsError::ArithmeticOverflow(what)) => {
                assert_eq!(what, "yearly allotment");
            }
            other => panic!("expected ArithmeticOverflow, got {other:?}"),
        }
    }

    #[test]
    fn terminal_rate_applies_past_the_table() {
        // An interval entirely inside year 40 compounds 40 full years first,
        // then pays a slice at the terminal 150 bps.
        let last = ORIGIN + 40 * SECONDS_PER_YEAR;
        let now = last + SECONDS_PER_YEAR / 4;
        let detail = accrual_detail(ORIGIN, last, now, GENESIS, &schedule()).unwrap();
        assert_eq!(detail.start_year, 40);
        assert_eq!(detail.boundaries_crossed, 0);
        assert_eq!(detail.end_year_rate_bps, 150);
        assert_eq!(detail.accrued, (GENESIS * 150 / 10_000)
            * u128::from(SECONDS_PER_YEAR / 4)
            / u128::from(SECONDS_PER_YEAR));
    }

    #[test]
    fn projected_supply_adds_accrual_to_genesis() {
        let now = ORIGIN + SECONDS_PER_YEAR;
        let projected =
            projected_total_supply(ORIGIN, now, GENESIS, &schedule()).unwrap();
        assert_eq!(projected, GENESIS + GENESIS * 900 / 10_000);
    }
}
