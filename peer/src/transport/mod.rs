use replicast_shared::TransportError;

/// Outbound half of an unreliable, unordered datagram transport that
/// broadcasts to every remote peer. Inbound datagrams are delivered through
/// a `ReceiveHandle`.
pub trait PacketSender: Send {
    fn send(&self, payload: &[u8]) -> Result<(), TransportError>;
}

