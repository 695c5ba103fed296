//! Bridge error taxonomy.
//!
//! Only `CapabilityUnavailable` and `EmptyPayload` are surfaced to the
//! caller, through the acknowledgment string. Handshake-phase failures are
//! classified into [`crate::outcome::OperationResult`] and logged; they never
//! propagate back through the entry points.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The caller handle is not a host activity, or its sender was never
    /// initialized. Checked synchronously, before any background work.
    #[error("activity capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// Message signing requires at least one authorized account in the
    /// session. Raised locally, before any signing request goes out.
    #[error("no authorized account in session")]
    NoAuthorizedAccount,

    /// Sign operations require non-empty input bytes.
    #[error("empty {0} payload")]
    EmptyPayload(&'static str),
}
