use std::hash::Hash;

use log::{debug, warn};
use replicast_serde::{ConstByteLength, Serde};

use crate::{
    connection::packet::Packet,
    messages::{
        error::InputError, input_window_buffer::InputWindowBuffer,
        input_write_queue::InputWriteQueue,
    },
    sequence_clock::SequenceClock,
    sync::config::SyncConfig,
    types::{ObjectId, Tick},
    world::{
        error::RegistryError,
        node_state::{FullNodeState, NodeState},
        priority::{Priority, PriorityAccumulator},
        registry::WriteRegistry,
        transform::Transform,
        world_type::WorldRefType,
    },
};

/// Produces one packet per tick from the locally owned objects and inputs.
///
/// Calls must be serialized by the caller; nothing in here locks.
pub struct WriteSynchronizer<H: Eq + Hash + Clone> {
    config: SyncConfig,
    registry: WriteRegistry<H>,
    accumulator: PriorityAccumulator,
    input_queue: InputWriteQueue,
    input_window: InputWindowBuffer,
    reference: Option<H>,
}

impl<H: Eq + Hash + Clone> WriteSynchronizer<H> {
    pub fn new(config: SyncConfig) -> Self {
        let input_window = InputWindowBuffer::new(config.input_window_capacity);
        Self {
            config,
            registry: WriteRegistry::new(),
            accumulator: PriorityAccumulator::new(),
            input_queue: InputWriteQueue::new(),
            input_window,
            reference: None,
        }
    }

    pub fn registry(&self) -> &WriteRegistry<H> {
        &self.registry
    }

    pub fn try_register(&mut self, handle: H, priority: Priority) -> Result<ObjectId, RegistryError> {
        self.registry.try_register(handle, priority)
    }

    /// # Panics
    ///
    /// Panics once the 16-bit id space is exhausted.
    pub fn register(&mut self, handle: H, priority: Priority) -> ObjectId {
        self.registry.register(handle, priority)
    }

    /// Stops replicating the object. Its id is retired, not recycled.
    pub fn remove(&mut self, id: &ObjectId) -> Option<H> {
        let handle = self.registry.remove(id)?;
        self.accumulator.reset(id);
        Some(handle)
    }

    /// Snapshots are taken relative to this object's transform when set
    pub fn set_reference(&mut self, reference: Option<H>) {
        self.reference = reference;
    }

    /// Queues an application input for the next produced packets
    pub fn input(&mut self, payload: Vec<u8>) -> Result<(), InputError> {
        self.input_queue.push(payload)
    }

    pub fn pending_inputs(&self) -> usize {
        self.input_queue.len()
    }

    /// Builds the packet for `tick`.
    ///
    /// The encoded packet never exceeds the configured byte budget. Updates
    /// are sized to leave room for the newest input, then the oldest inputs
    /// are left out until the packet fits.
    pub fn packet<W: WorldRefType<H>>(&mut self, tick: Tick, world: &W) -> Packet {
        let sequence = SequenceClock::sequence_of(tick);
        let byte_budget = self.config.packet_byte_budget();

        self.input_queue.write(&mut self.input_window, sequence);
        let inputs = self.input_window.top(self.config.input_budget(), sequence);

        let newest_input = inputs.last().map_or(0, Serde::byte_length);
        let update_room = byte_budget.saturating_sub(Packet::HEADER_BYTES + newest_input)
            / FullNodeState::const_byte_length();
        let update_budget = self.config.state_update_budget().min(update_room);

        self.accumulator.accumulate(self.registry.iter());
        let selected = self.accumulator.select_top(update_budget, self.registry.iter());

        let frame = self.reference_frame(world);
        let mut updates = Vec::with_capacity(selected.len());
        for id in selected {
            let Some(handle) = self.registry.handle(&id) else {
                continue;
            };
            let Some(transform) = world.transform(handle) else {
                warn!("Object {} is registered but missing from the world, skipping it", id.value());
                continue;
            };
            let transform = match &frame {
                Some(frame) => transform.relative_to(frame),
                None => transform,
            };
            updates.push(NodeState::snapshot(
                id,
                transform,
                world.velocity(handle),
                world.is_resting(handle),
            ));
        }

        let mut packet = Packet::with_updates(sequence, inputs, updates);
        let mut trimmed = 0;
        while packet.byte_length() > byte_budget && packet.inputs.len() > 1 {
            packet.inputs.remove(0);
            trimmed += 1;
        }
        if trimmed > 0 {
            debug!(
                "Left {} older inputs out of packet {} to stay within {} bytes",
                trimmed, sequence, byte_budget
            );
        }
        packet
    }

    fn reference_frame<W: WorldRefType<H>>(&self, world: &W) -> Option<Transform> {
        let reference = self.reference.as_ref()?;
        let frame = world.transform(reference);
        if frame.is_none() {
            warn!("Reference object is missing from the world, sending world-space transforms");
        }
        frame
    }
}
