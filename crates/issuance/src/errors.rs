use nova_economics::EconomicsError;
use nova_types::AccountId;
use thiserror::Error;

/// Errors reported by the issuance controller.
#[derive(Debug, Error)]
pub enum IssuanceError {
    #[error("caller lacks the issuance capability")]
    Unauthorized { caller: AccountId },

    #[error(transparent)]
    Economics(#[from] EconomicsError),

    #[error("ledger operation failed: {0}")]
    Ledger(anyhow::Error),
}

impl From<anyhow::Error> for IssuanceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Ledger(err)
    }
}
