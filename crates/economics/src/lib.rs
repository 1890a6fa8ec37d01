//! Nova Economics - Decaying-Schedule Accrual Engine
//!
//! Deterministic compounding of a fixed annual inflation schedule over
//! arbitrary elapsed intervals, with per-second pro-ration of the final
//! partial year. All computation is exact integer arithmetic; overflow is
//! checked and reported, never wrapped.
//!
//! Monetary unit: atto-NOVA (aNOVA). 1 NOVA = 10^18 aNOVA.

pub mod accrual;
pub mod errors;
pub mod schedule;
pub mod types;

pub use accrual::*;
pub use errors::*;
pub use schedule::*;
pub use types::*;
