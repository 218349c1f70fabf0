use replicast_serde::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

/// Wrapping 16-bit tick counter stamped on every packet and input
pub type Sequence = u16;

/// Monotonic, non-wrapping tick count since a clock's origin
pub type Tick = u64;

/// Identifier of a replicated object, unique within one registry.
/// Zero is reserved and never handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u16);

impl ObjectId {
    pub const INVALID: ObjectId = ObjectId(0);

    pub fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    pub(crate) fn index(&self) -> usize {
        usize::from(self.0)
    }
}

impl From<u16> for ObjectId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl Serde for ObjectId {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        self.0.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self(u16::de(reader)?))
    }

    fn byte_length(&self) -> usize {
        <u16 as ConstByteLength>::const_byte_length()
    }
}

impl ConstByteLength for ObjectId {
    fn const_byte_length() -> usize {
        <u16 as ConstByteLength>::const_byte_length()
    }
}

/// Which side of the session this peer plays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Authoritative peer, starts its clock as soon as the role is known
    Host,
    /// Follower, starts its clock on the first packet from the host
    Peer,
}

impl Role {
    pub fn is_host(&self) -> bool {
        *self == Role::Host
    }
}
