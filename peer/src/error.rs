use thiserror::Error;

use replicast_shared::{InputError, RegistryError, Role};

/// Errors raised by the clock handshake
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NegotiationError {
    /// Data arrived before this peer knew whether it is the host
    #[error("Protocol violation: received data while still awaiting a role")]
    ProtocolViolation,

    /// The role can only be confirmed once per session
    #[error("Role was already confirmed as {role:?}")]
    RoleAlreadyConfirmed { role: Role },
}

/// Errors surfaced by a Peer to its caller. Decode and transport failures are
/// not in here: those packets are logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeerError {
    #[error("Negotiation error: {0}")]
    Negotiation(#[from] NegotiationError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}
