use std::hash::Hash;

use log::{debug, warn};

use replicast_shared::{
    InputInterpreter, Instant, ObjectId, Priority, ReadSynchronizer, Role, SequenceClock, Tick,
    WorldMutType, WriteSynchronizer,
};

use crate::{
    error::PeerError,
    negotiation::NegotiationState,
    peer_config::PeerConfig,
    receive_handle::ReceiveHandle,
    transport::PacketSender,
};

/// What one call to `Peer::tick` did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Local tick a packet was written for, if one was
    pub written: Option<Tick>,
    pub packets_sent: usize,
    pub packets_applied: usize,
    pub inputs_applied: usize,
    pub updates_applied: usize,
}

/// One end of a replicated session
pub struct Peer<H: Eq + Hash + Clone, S: PacketSender> {
    config: PeerConfig,
    writer: WriteSynchronizer<H>,
    reader: ReadSynchronizer<H>,
    inbound: ReceiveHandle,
    sender: S,
    last_written: Option<Tick>,
    last_read: Option<Tick>,
}

impl<H: Eq + Hash + Clone, S: PacketSender> Peer<H, S> {
    pub fn new(config: PeerConfig, sender: S) -> Self {
        let inbound = ReceiveHandle::new(&config.jitter_buffer, config.ticks_per_second);
        Self {
            writer: WriteSynchronizer::new(config.sync.clone()),
            reader: ReadSynchronizer::new(&config.sync),
            inbound,
            sender,
            config,
            last_written: None,
            last_read: None,
        }
    }

    pub fn config(&self) -> &PeerConfig {
        &self.config
    }

    /// Handle to pass to the transport's receive callback
    pub fn receive_handle(&self) -> ReceiveHandle {
        self.inbound.clone()
    }

    pub fn state(&self) -> NegotiationState {
        self.inbound.state()
    }

    /// Call once host election has finished
    pub fn confirm_role(&mut self, role: Role, now: &Instant) -> Result<(), PeerError> {
        self.inbound.confirm_role(role, now)?;
        Ok(())
    }

    pub fn writer(&self) -> &WriteSynchronizer<H> {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut WriteSynchronizer<H> {
        &mut self.writer
    }

    pub fn reader(&self) -> &ReadSynchronizer<H> {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut ReadSynchronizer<H> {
        &mut self.reader
    }

    /// Registers a locally owned object for replication
    pub fn register(&mut self, handle: H, priority: Priority) -> Result<ObjectId, PeerError> {
        Ok(self.writer.try_register(handle, priority)?)
    }

    /// Queues an input for delivery to the remote peer
    pub fn input(&mut self, payload: Vec<u8>) -> Result<(), PeerError> {
        Ok(self.writer.input(payload)?)
    }

    /// Drives the session from the render/simulation loop.
    ///
    /// Writes and sends at most one packet per send tick, then applies every
    /// remote packet released by the jitter buffer since the last call, going
    /// back at most `catch_up_limit` ticks.
    pub fn tick<W, I>(&mut self, now: &Instant, world: &mut W, interpreter: &mut I) -> TickReport
    where
        W: WorldMutType<H>,
        I: InputInterpreter<H, W>,
    {
        let mut report = TickReport::default();
        let (origin, remote_origin) = match self.inbound.state() {
            NegotiationState::AwaitingRole | NegotiationState::Listening => return report,
            NegotiationState::Sending { origin } => (origin, None),
            NegotiationState::SendingAndReceiving {
                origin,
                remote_origin,
            } => (origin, Some(remote_origin)),
        };

        let ticks_per_second = self.config.ticks_per_second;
        let tick = SequenceClock::new(origin, ticks_per_second).tick_at(now);
        if self.is_send_tick(tick) {
            self.write(tick, world, &mut report);
        }

        if let Some(remote_origin) = remote_origin {
            let remote_tick = SequenceClock::new(remote_origin, ticks_per_second).tick_at(now);
            self.read(remote_tick, world, interpreter, &mut report);
        }

        report
    }

    fn is_send_tick(&self, tick: Tick) -> bool {
        let interval = Tick::from(self.config.send_interval.max(1));
        match self.last_written {
            None => true,
            Some(last) => tick >= last + interval,
        }
    }

    fn write<W: WorldMutType<H>>(&mut self, tick: Tick, world: &W, report: &mut TickReport) {
        let packet = self.writer.packet(tick, world);
        self.last_written = Some(tick);
        report.written = Some(tick);

        let bytes = match packet.try_encode() {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!("Could not encode packet {}: {}", packet.sequence, error);
                return;
            }
        };
        match self.sender.send(&bytes) {
            Ok(()) => report.packets_sent += 1,
            Err(error) => warn!("Could not send packet {}: {}", packet.sequence, error),
        }
    }

    fn read<W, I>(&mut self, remote_tick: Tick, world: &mut W, interpreter: &mut I, report: &mut TickReport)
    where
        W: WorldMutType<H>,
        I: InputInterpreter<H, W>,
    {
        let oldest = remote_tick.saturating_sub(Tick::from(self.config.catch_up_limit));
        let first = match self.last_read {
            Some(last) if last >= remote_tick => return,
            Some(last) => (last + 1).max(oldest),
            None => oldest,
        };
        self.last_read = Some(remote_tick);

        for packet in self.inbound.take_range(first..=remote_tick) {
            let applied = self.reader.apply(packet, world, interpreter);
            report.packets_applied += 1;
            report.inputs_applied += applied.inputs_applied;
            report.updates_applied += applied.updates_applied;
        }
        if report.packets_applied > 1 {
            debug!("Caught up on {} remote packets at tick {}", report.packets_applied, remote_tick);
        }
    }
}
