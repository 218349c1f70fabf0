use replicast_serde::{ByteReader, ByteWrite, ByteWriter, ConstByteLength, Serde};

use crate::{
    connection::error::{DecodeError, EncodeError, MalformedPacket},
    constants::{MAX_INPUTS_PER_PACKET, MAX_INPUT_PAYLOAD_BYTES, MAX_STATE_UPDATES_PER_PACKET},
    messages::input::Input,
    types::Sequence,
    world::node_state::{CompactNodeState, FullNodeState, NodeState},
};

/// One tick's worth of replicated data.
///
/// Wire layout, all numbers little-endian:
///
/// | field                  | size                          |
/// |------------------------|-------------------------------|
/// | sequence               | 2                             |
/// | input count            | 1                             |
/// | inputs                 | 2 + 1 + payload length, each  |
/// | compact update count   | 1                             |
/// | compact updates        | 34 each                       |
/// | full update count      | 1                             |
/// | full updates           | 66 each                       |
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packet {
    pub sequence: Sequence,
    pub inputs: Vec<Input>,
    pub compact_updates: Vec<CompactNodeState>,
    pub full_updates: Vec<FullNodeState>,
}

impl Packet {
    /// Sequence plus the three count bytes
    pub const HEADER_BYTES: usize = 2 + 1 + 1 + 1;

    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }

    /// Builds a packet, sorting each update into its tier
    pub fn with_updates<U: IntoIterator<Item = NodeState>>(
        sequence: Sequence,
        inputs: Vec<Input>,
        updates: U,
    ) -> Self {
        let mut packet = Packet {
            sequence,
            inputs,
            ..Default::default()
        };
        for update in updates {
            match update {
                NodeState::Compact(state) => packet.compact_updates.push(state),
                NodeState::Full(state) => packet.full_updates.push(state),
            }
        }
        packet
    }

    /// All updates, compact tier first
    pub fn updates(&self) -> impl Iterator<Item = NodeState> + '_ {
        self.compact_updates
            .iter()
            .copied()
            .map(NodeState::Compact)
            .chain(self.full_updates.iter().copied().map(NodeState::Full))
    }

    pub fn update_count(&self) -> usize {
        self.compact_updates.len() + self.full_updates.len()
    }

    /// Checks the packet against the protocol maxima
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.inputs.len() > MAX_INPUTS_PER_PACKET {
            return Err(EncodeError::TooManyInputs {
                count: self.inputs.len(),
                max: MAX_INPUTS_PER_PACKET,
            });
        }
        if self.update_count() > MAX_STATE_UPDATES_PER_PACKET {
            return Err(EncodeError::TooManyUpdates {
                count: self.update_count(),
                max: MAX_STATE_UPDATES_PER_PACKET,
            });
        }
        if let Some(input) = self
            .inputs
            .iter()
            .find(|input| input.payload.len() > MAX_INPUT_PAYLOAD_BYTES)
        {
            return Err(EncodeError::PayloadTooLarge {
                sequence: input.sequence,
                length: input.payload.len(),
                max: MAX_INPUT_PAYLOAD_BYTES,
            });
        }
        Ok(())
    }

    /// Exact encoded size in bytes
    pub fn byte_length(&self) -> usize {
        Self::HEADER_BYTES
            + self.inputs.iter().map(Serde::byte_length).sum::<usize>()
            + self.compact_updates.len() * CompactNodeState::const_byte_length()
            + self.full_updates.len() * FullNodeState::const_byte_length()
    }

    pub fn try_encode(&self) -> Result<Vec<u8>, EncodeError> {
        self.validate()?;

        let mut writer = ByteWriter::with_capacity(self.byte_length());
        self.sequence.ser(&mut writer);
        // counts are bounded by validate()
        writer.write_byte(self.inputs.len() as u8);
        for input in &self.inputs {
            input.ser(&mut writer);
        }
        writer.write_byte(self.compact_updates.len() as u8);
        for state in &self.compact_updates {
            state.ser(&mut writer);
        }
        writer.write_byte(self.full_updates.len() as u8);
        for state in &self.full_updates {
            state.ser(&mut writer);
        }
        Ok(writer.to_bytes())
    }

    /// Encodes the packet.
    ///
    /// # Panics
    ///
    /// Panics if the packet exceeds the protocol maxima. Use `try_encode` for
    /// packets not built by a synchronizer.
    pub fn encode(&self) -> Vec<u8> {
        self.try_encode()
            .expect("packet exceeds protocol maxima and cannot be encoded")
    }

    /// Decodes a datagram. Never panics on untrusted input.
    pub fn decode(bytes: &[u8]) -> Result<Packet, DecodeError> {
        let mut reader = ByteReader::new(bytes);

        let sequence = Sequence::de(&mut reader)?;

        let input_count = usize::from(reader.read_byte()?);
        if input_count > MAX_INPUTS_PER_PACKET {
            return Err(MalformedPacket::TooManyInputs {
                count: input_count,
                max: MAX_INPUTS_PER_PACKET,
            }
            .into());
        }
        let mut inputs = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            inputs.push(Input::de(&mut reader)?);
        }

        let compact_count = usize::from(reader.read_byte()?);
        check_update_count(compact_count)?;
        let compact_updates = read_records::<CompactNodeState>(&mut reader, compact_count)?;

        let full_count = usize::from(reader.read_byte()?);
        check_update_count(compact_count + full_count)?;
        let full_updates = read_records::<FullNodeState>(&mut reader, full_count)?;

        if !reader.is_empty() {
            return Err(MalformedPacket::TrailingBytes {
                count: reader.remaining(),
            }
            .into());
        }

        Ok(Packet {
            sequence,
            inputs,
            compact_updates,
            full_updates,
        })
    }
}

fn check_update_count(count: usize) -> Result<(), DecodeError> {
    if count > MAX_STATE_UPDATES_PER_PACKET {
        return Err(MalformedPacket::TooManyUpdates {
            count,
            max: MAX_STATE_UPDATES_PER_PACKET,
        }
        .into());
    }
    Ok(())
}

fn read_records<T: Serde + ConstByteLength>(
    reader: &mut ByteReader,
    count: usize,
) -> Result<Vec<T>, DecodeError> {
    let needed = count * T::const_byte_length();
    if reader.remaining() < needed {
        return Err(DecodeError::Truncated {
            needed,
            remaining: reader.remaining(),
        });
    }
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(T::de(reader)?);
    }
    Ok(records)
}
