use thiserror::Error;

/// Errors a transport may report when handing off a datagram. None of them
/// are retried; the datagram simply counts as lost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No remote peer is currently reachable
    #[error("No remote peer is reachable")]
    Unreachable,

    /// The datagram is larger than the transport accepts
    #[error("Datagram of {length} bytes exceeds the transport limit of {max} bytes")]
    DatagramTooLarge { length: usize, max: usize },

    /// Any other failure reported by the underlying transport
    #[error("Transport failed to send: {reason}")]
    SendFailed { reason: String },
}
