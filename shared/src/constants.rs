// Protocol maxima, shared by the encoder and the decoder

/// Upper bound on inputs carried by a single packet. Also the number of ticks
/// an input is retransmitted for.
pub const MAX_INPUTS_PER_PACKET: usize = 32;

/// Upper bound on compact + full state updates carried by a single packet
pub const MAX_STATE_UPDATES_PER_PACKET: usize = 64;

/// Largest payload a single input may carry, bounded by its 1-byte length prefix
pub const MAX_INPUT_PAYLOAD_BYTES: usize = u8::MAX as usize;

/// Size of the dense per-object tables indexed by id
pub const OBJECT_ID_SPACE: usize = u16::MAX as usize + 1;
