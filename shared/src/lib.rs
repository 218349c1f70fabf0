//! # Replicast Shared
//! Core of the replicast state-replication protocol: object registries,
//! priority scheduling, the packet codec, input windowing, jitter buffering
//! and the write/read synchronizers that tie them together each tick.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

cfg_if! {
    if #[cfg(target_arch = "wasm32")]
    {
        compile_error!("replicast_shared has no wasm32 time backend yet");
    }
}

pub use replicast_serde::{
    ByteCounter, ByteReader, ByteWrite, ByteWriter, ConstByteLength, Serde, SerdeErr,
    MTU_SIZE_BYTES,
};

mod backends;
mod connection;
mod constants;
mod messages;
mod sequence_clock;
mod sync;
mod transport;
mod types;
mod world;
mod wrapping_number;

pub use backends::Instant;
pub use connection::{
    error::{DecodeError, EncodeError, MalformedPacket},
    jitter_buffer::JitterBuffer,
    jitter_buffer_config::JitterBufferConfig,
    packet::Packet,
};
pub use constants::{
    MAX_INPUTS_PER_PACKET, MAX_INPUT_PAYLOAD_BYTES, MAX_STATE_UPDATES_PER_PACKET,
    OBJECT_ID_SPACE,
};
pub use messages::{
    error::InputError, input::Input, input_deduper::InputDeduper,
    input_window_buffer::InputWindowBuffer, input_write_queue::InputWriteQueue,
};
pub use sequence_clock::SequenceClock;
pub use sync::{
    config::SyncConfig,
    input_interpreter::{InputInterpreter, MissingObject, NilInterpreter},
    read_synchronizer::{ApplyReport, ReadSynchronizer},
    write_synchronizer::WriteSynchronizer,
};
pub use transport::error::TransportError;
pub use types::{ObjectId, Role, Sequence, Tick};
pub use world::{
    error::RegistryError,
    node_state::{CompactNodeState, FullNodeState, NodeState},
    priority::{Priority, PriorityAccumulator},
    registry::{ReadRegistry, WriteRegistration, WriteRegistry},
    transform::{Quat, Transform, Vec3, Velocity},
    world_type::{WorldMutType, WorldRefType},
};
pub use wrapping_number::{sequence_greater_than, sequence_less_than, sequence_max, wrapping_diff};
