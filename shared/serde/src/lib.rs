//! # Replicast Serde
//! Fixed-width, little-endian byte serialization for the replicast wire format.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod byte_reader;
mod byte_writer;
mod error;
mod number;
mod serde;

pub use byte_reader::ByteReader;
pub use byte_writer::{ByteCounter, ByteWrite, ByteWriter};
pub use error::SerdeErr;
pub use serde::{ConstByteLength, Serde};

/// Largest datagram the replication layer is expected to produce, in bytes.
pub const MTU_SIZE_BYTES: usize = 8192;
