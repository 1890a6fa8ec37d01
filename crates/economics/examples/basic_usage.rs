//! Basic usage example for the Nova economics crate
//!
//! Demonstrates schedule lookups, previewing accrual over arbitrary gaps,
//! and the projected supply curve.

use nova_economics::*;
use nova_types::{format_nova, novas};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schedule = RateSchedule::default();
    let origin = 1_700_000_000u64;
    let genesis = novas(1_000_000_000);

    println!("Nova Economics - Basic Usage Example\n");

    println!("Inflation Schedule:");
    for year in 0..schedule.year_count() as u64 {
        println!("  Year {year:>2}: {} bps", schedule.rate_for_year(year));
    }
    println!("  Every later year: {} bps (terminal)\n", schedule.terminal_rate());

    println!("Accrual from a genesis supply of {} NOVA:", format_nova(genesis));
    for (label, now) in [
        ("half a year", origin + SECONDS_PER_YEAR / 2),
        ("one year", origin + SECONDS_PER_YEAR),
        ("two years and a day", origin + 2 * SECONDS_PER_YEAR + 86_400),
        ("twenty years", origin + 20 * SECONDS_PER_YEAR),
    ] {
        let detail = accrual_detail(origin, origin, now, genesis, &schedule)?;
        println!(
            "  after {label}: {} NOVA accrued, {} year boundaries crossed",
            format_nova(detail.accrued),
            detail.boundaries_crossed
        );
    }

    let projected =
        projected_total_supply(origin, origin + 10 * SECONDS_PER_YEAR, genesis, &schedule)?;
    println!(
        "\nProjected total supply after ten years: {} NOVA",
        format_nova(projected)
    );

    Ok(())
}
