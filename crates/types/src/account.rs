//! Account identifiers used by the ledger and issuance layers.

/// Opaque 32-byte account identifier.
pub type AccountId = [u8; 32];

/// Render the leading bytes of an account id as lowercase hex for log lines.
pub fn short_account_hex(id: &AccountId) -> String {
    hex::encode(&id[..8])
}
