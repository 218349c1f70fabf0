//! # Replicast Peer
//! A session endpoint that owns one write and one read synchronizer, drives
//! them from a render/simulation loop, and negotiates when its clocks start.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod election;
mod error;
mod negotiation;
mod peer;
mod peer_config;
mod receive_handle;
pub mod transport;

pub use election::{elect_role, HostElection, LowestPeerId};
pub use error::{NegotiationError, PeerError};
pub use negotiation::{NegotiationState, RoleNegotiation};
pub use peer::{Peer, TickReport};
pub use peer_config::PeerConfig;
pub use receive_handle::{ReceiveHandle, Received};
pub use transport::PacketSender;

pub use replicast_shared as shared;
