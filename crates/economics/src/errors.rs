use nova_types::UnixTime;
use thiserror::Error;

/// Errors that can occur while computing accruals.
#[derive(Debug, Error)]
pub enum EconomicsError {
    #[error("inflation schedule must contain at least one yearly rate")]
    EmptySchedule,

    #[error("invalid time ordering: {at} precedes {reference}")]
    InvalidTimeOrdering { reference: UnixTime, at: UnixTime },

    #[error("arithmetic overflow while performing accrual calculation: {0}")]
    ArithmeticOverflow(&'static str),
}
