//! Nova fixed-point unit system.
//!
//! NOVA is stored as a fixed-point integer with 18 decimal places so that all
//! supply math stays in exact integer arithmetic. 1 NOVA = 10^18 atto-NOVA.

use core::fmt;

/// NOVA amounts are fixed-point integers with 18 decimal places.
pub type AttoNova = u128;

/// Number of decimal places of NOVA precision.
pub const NOVA_DECIMALS: u32 = 18;

/// Conversion factor: 1 NOVA = 10^18 atto-NOVA.
pub const ATTO_PER_NOVA: AttoNova = 10u128.pow(NOVA_DECIMALS);

/// Unix timestamp in seconds.
pub type UnixTime = u64;

/// Convert a whole-NOVA amount into atto-NOVA.
pub const fn novas(whole: u64) -> AttoNova {
    whole as AttoNova * ATTO_PER_NOVA
}

/// Format an atto-NOVA amount as a decimal NOVA string without using floats.
pub fn format_nova(amount: AttoNova) -> NovaDisplay {
    NovaDisplay { amount }
}

/// Display helper returned by [`format_nova`].
pub struct NovaDisplay {
    amount: AttoNova,
}

impl fmt::Display for NovaDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.amount / ATTO_PER_NOVA;
        let frac = self.amount % ATTO_PER_NOVA;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:018}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}
