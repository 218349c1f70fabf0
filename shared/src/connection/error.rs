use thiserror::Error;

use replicast_serde::SerdeErr;

use crate::types::Sequence;

/// Structural problems found while decoding a packet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPacket {
    #[error("declares {count} inputs, more than the maximum of {max}")]
    TooManyInputs { count: usize, max: usize },

    #[error("declares {count} state updates, more than the maximum of {max}")]
    TooManyUpdates { count: usize, max: usize },

    #[error("has {count} unread bytes after the last record")]
    TrailingBytes { count: usize },
}

/// Errors that can occur while decoding a received datagram. Both are
/// recoverable: the datagram is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer bytes remain than a declared count requires
    #[error("Packet truncated: needed {needed} bytes but only {remaining} remain")]
    Truncated { needed: usize, remaining: usize },

    /// The packet is structurally invalid
    #[error("Malformed packet: {0}")]
    Malformed(#[from] MalformedPacket),
}

impl From<SerdeErr> for DecodeError {
    fn from(error: SerdeErr) -> Self {
        match error {
            SerdeErr::UnexpectedEnd { needed, remaining } => {
                DecodeError::Truncated { needed, remaining }
            }
        }
    }
}

/// Errors that can occur while encoding a packet that breaks protocol maxima
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Packet carries {count} inputs, more than the maximum of {max}")]
    TooManyInputs { count: usize, max: usize },

    #[error("Packet carries {count} state updates, more than the maximum of {max}")]
    TooManyUpdates { count: usize, max: usize },

    #[error("Input {sequence} carries a {length} byte payload, more than the maximum of {max}")]
    PayloadTooLarge {
        sequence: Sequence,
        length: usize,
        max: usize,
    },
}
