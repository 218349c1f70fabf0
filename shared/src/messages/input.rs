use replicast_serde::{ByteReader, ByteWrite, Serde, SerdeErr};

use crate::{constants::MAX_INPUT_PAYLOAD_BYTES, types::Sequence};

/// An application-defined command stamped with the tick it was issued on.
/// The payload is opaque to the protocol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Input {
    pub sequence: Sequence,
    pub payload: Vec<u8>,
}

impl Input {
    pub fn new(sequence: Sequence, payload: Vec<u8>) -> Self {
        Self { sequence, payload }
    }

    fn wire_payload(&self) -> &[u8] {
        &self.payload[..self.payload.len().min(MAX_INPUT_PAYLOAD_BYTES)]
    }
}

impl Serde for Input {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        let payload = self.wire_payload();
        self.sequence.ser(writer);
        // wire_payload() is capped at 255 bytes
        writer.write_byte(payload.len() as u8);
        writer.write_bytes(payload);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let sequence = Sequence::de(reader)?;
        let length = reader.read_byte()?;
        let payload = reader.read_slice(usize::from(length))?.to_vec();
        Ok(Self { sequence, payload })
    }

    fn byte_length(&self) -> usize {
        2 + 1 + self.wire_payload().len()
    }
}
