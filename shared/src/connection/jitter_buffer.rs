use log::debug;

use crate::{
    connection::{jitter_buffer_config::JitterBufferConfig, packet::Packet},
    sequence_clock::SequenceClock,
    types::{Sequence, Tick},
    wrapping_number::{sequence_greater_than, sequence_max},
};

/// Receive-side ring that releases packets in sequence order, a fixed number
/// of ticks after their sequence, regardless of arrival order.
pub struct JitterBuffer {
    slots: Vec<Option<Packet>>,
    min_delay: u16,
    last_received: Option<Sequence>,
}

impl JitterBuffer {
    pub fn new(config: &JitterBufferConfig) -> Self {
        Self::with_capacity(config.capacity, config.min_delay)
    }

    pub fn with_capacity(capacity: usize, min_delay: u16) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            min_delay,
            last_received: None,
        }
    }

    pub fn min_delay(&self) -> u16 {
        self.min_delay
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Newest sequence pushed so far, compared with wraparound
    pub fn last_received(&self) -> Option<Sequence> {
        self.last_received
    }

    pub fn push(&mut self, packet: Packet) {
        let sequence = packet.sequence;
        let index = self.index(sequence);

        if let Some(existing) = &self.slots[index] {
            if sequence_greater_than(existing.sequence, sequence) {
                debug!(
                    "Dropping packet {} which arrived after newer packet {} took its slot",
                    sequence, existing.sequence
                );
                return;
            }
        }

        self.slots[index] = Some(packet);
        self.last_received = Some(match self.last_received {
            Some(last) => sequence_max(last, sequence),
            None => sequence,
        });
    }

    /// Releases the packet due at local `tick`, the one sequenced
    /// `tick - min_delay`. Each packet is released at most once.
    pub fn take(&mut self, tick: Tick) -> Option<Packet> {
        let target = tick.checked_sub(Tick::from(self.min_delay))?;
        let target = SequenceClock::sequence_of(target);

        let last_received = self.last_received?;
        if sequence_greater_than(target, last_received) {
            return None;
        }

        let index = self.index(target);
        match &self.slots[index] {
            Some(packet) if packet.sequence == target => self.slots[index].take(),
            _ => None,
        }
    }

    fn index(&self, sequence: Sequence) -> usize {
        usize::from(sequence) % self.slots.len()
    }
}
