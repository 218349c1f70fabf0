use std::default::Default;

use replicast_serde::MTU_SIZE_BYTES;

use crate::{
    connection::packet::Packet,
    constants::{MAX_INPUTS_PER_PACKET, MAX_INPUT_PAYLOAD_BYTES, MAX_STATE_UPDATES_PER_PACKET},
};

// Room for the header and one input of the largest size
const SMALLEST_PACKET_BYTES: usize = Packet::HEADER_BYTES + 2 + 1 + MAX_INPUT_PAYLOAD_BYTES;

/// Contains Config properties shared by the write and read synchronizers
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Most state updates written into one packet. Clamped to
    /// `MAX_STATE_UPDATES_PER_PACKET`.
    pub max_state_updates: usize,
    /// Most inputs written into one packet, which is also the number of ticks
    /// each input is repeated for. Clamped to `MAX_INPUTS_PER_PACKET`.
    pub max_inputs: usize,
    /// Slots in the write-side input ring
    pub input_window_capacity: usize,
    /// Slots in the read-side dedup ring. Must be at least `max_inputs`.
    pub dedup_capacity: usize,
    /// Largest encoded packet the writer produces. Older inputs are left out
    /// of a packet before it grows past this. Clamped to `MTU_SIZE_BYTES`.
    pub max_packet_bytes: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_state_updates: MAX_STATE_UPDATES_PER_PACKET,
            max_inputs: MAX_INPUTS_PER_PACKET,
            input_window_capacity: 1024,
            dedup_capacity: 64,
            max_packet_bytes: MTU_SIZE_BYTES,
        }
    }
}

impl SyncConfig {
    pub(crate) fn state_update_budget(&self) -> usize {
        self.max_state_updates.min(MAX_STATE_UPDATES_PER_PACKET)
    }

    pub(crate) fn input_budget(&self) -> usize {
        self.max_inputs.min(MAX_INPUTS_PER_PACKET)
    }

    pub(crate) fn packet_byte_budget(&self) -> usize {
        self.max_packet_bytes.clamp(SMALLEST_PACKET_BYTES, MTU_SIZE_BYTES)
    }
}
