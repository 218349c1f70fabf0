use std::{
    ops::RangeInclusive,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::warn;

use replicast_shared::{
    DecodeError, Instant, JitterBuffer, JitterBufferConfig, Packet, Role, Sequence, Tick,
};

use crate::{
    error::{NegotiationError, PeerError},
    negotiation::{NegotiationState, RoleNegotiation},
};

/// Outcome of handing one datagram to a `ReceiveHandle`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Received {
    /// Decoded and stored in the jitter buffer
    Buffered(Sequence),
    /// Could not be decoded, logged and discarded
    Dropped(DecodeError),
}

struct Inbound {
    negotiation: RoleNegotiation,
    jitter_buffer: JitterBuffer,
}

/// Inbound side of a Peer, handed to the transport's receive callback.
///
/// Negotiation state and the jitter buffer sit behind one lock: the transport
/// thread pushes into them and the render loop reads them, but never both at
/// once.
#[derive(Clone)]
pub struct ReceiveHandle {
    inner: Arc<Mutex<Inbound>>,
}

impl ReceiveHandle {
    pub(crate) fn new(config: &JitterBufferConfig, ticks_per_second: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inbound {
                negotiation: RoleNegotiation::new(ticks_per_second),
                jitter_buffer: JitterBuffer::new(config),
            })),
        }
    }

    /// Handles one datagram received at `now`.
    ///
    /// Returns an error only for data that arrives before the local role is
    /// known. Undecodable datagrams are dropped without touching the
    /// negotiation, so garbage can never start the local clock.
    pub fn on_data(&self, now: &Instant, payload: &[u8]) -> Result<Received, PeerError> {
        let mut inbound = self.lock();
        if inbound.negotiation.state() == NegotiationState::AwaitingRole {
            return Err(NegotiationError::ProtocolViolation.into());
        }

        let packet = match Packet::decode(payload) {
            Ok(packet) => packet,
            Err(error) => {
                warn!("Dropping undecodable packet of {} bytes: {}", payload.len(), error);
                return Ok(Received::Dropped(error));
            }
        };

        let sequence = packet.sequence;
        inbound.negotiation.on_data(now, sequence)?;
        inbound.jitter_buffer.push(packet);
        Ok(Received::Buffered(sequence))
    }

    pub fn state(&self) -> NegotiationState {
        self.lock().negotiation.state()
    }

    pub(crate) fn confirm_role(&self, role: Role, now: &Instant) -> Result<(), NegotiationError> {
        self.lock().negotiation.confirm_role(role, now)
    }

    /// Takes every packet scheduled for the remote ticks in `ticks`
    pub(crate) fn take_range(&self, ticks: RangeInclusive<Tick>) -> Vec<Packet> {
        let mut inbound = self.lock();
        ticks
            .filter_map(|tick| inbound.jitter_buffer.take(tick))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inbound> {
        // Inbound holds plain data, a panic elsewhere cannot leave it half-updated
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
