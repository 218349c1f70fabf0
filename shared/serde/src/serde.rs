use crate::{
    byte_reader::ByteReader,
    byte_writer::{ByteCounter, ByteWrite},
    error::SerdeErr,
};

/// A type that can be written to and read from the wire.
pub trait Serde: Sized {
    /// Writes the value into the given writer
    fn ser(&self, writer: &mut dyn ByteWrite);

    /// Parses a value out of the reader, advancing its cursor
    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    /// Number of bytes `ser` will produce for this value
    fn byte_length(&self) -> usize {
        let mut counter = ByteCounter::new();
        self.ser(&mut counter);
        counter.bytes_written()
    }
}

/// Implemented by types whose encoded size never depends on their value.
pub trait ConstByteLength {
    fn const_byte_length() -> usize;
}
