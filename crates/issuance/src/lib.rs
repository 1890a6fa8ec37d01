//! Nova Issuance Module
//!
//! The stateful half of the issuance system: a controller that gates minting
//! behind an injected capability policy, computes accruals with the economics
//! engine, and commits them to an external ledger collaborator.

pub mod controller;
pub mod errors;
pub mod ledger;
pub mod policy;

pub use controller::{IssuanceController, IssuanceEvent, IssuanceStatus};
pub use errors::IssuanceError;
pub use ledger::{InMemoryLedger, Ledger, MockLedger};
pub use policy::{IssuancePolicy, MinterSet};
