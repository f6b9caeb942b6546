//! Error types for the cart ledger codec

/// Failures while encoding or decoding the persisted ledger
///
/// Ledger mutations themselves are total and never construct these;
/// only the explicit [`to_json`](crate::CartLedger::to_json) /
/// [`from_json`](crate::CartLedger::from_json) codec does. The session
/// load path absorbs `Parse` into an empty cart.
#[derive(Debug, thiserror::Error)]
pub enum LedgerCodecError {
    /// Ledger could not be serialized
    #[error("ledger serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Stored value is not a well-formed ledger sequence
    #[error("stored ledger is malformed: {0}")]
    Parse(#[source] serde_json::Error),
}
