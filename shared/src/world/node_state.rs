use replicast_serde::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

use crate::{
    types::ObjectId,
    world::transform::{Quat, Transform, Vec3, Velocity},
};

/// State of an object assumed to be at rest. Velocity is implicitly zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompactNodeState {
    pub id: ObjectId,
    pub position: Vec3,
    pub orientation: Quat,
}

/// State of an object moving under physics
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FullNodeState {
    pub id: ObjectId,
    pub position: Vec3,
    pub orientation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Quat,
}

/// A single object's replicated state, in one of two fidelity tiers
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeState {
    Compact(CompactNodeState),
    Full(FullNodeState),
}

impl NodeState {
    /// Picks the tier for a snapshot: Full only for objects that are awake and
    /// actually moving.
    pub fn snapshot(
        id: ObjectId,
        transform: Transform,
        velocity: Option<Velocity>,
        resting: bool,
    ) -> Self {
        match velocity {
            Some(velocity) if !resting && !velocity.is_zero() => NodeState::Full(FullNodeState {
                id,
                position: transform.position,
                orientation: transform.orientation,
                linear_velocity: velocity.linear,
                angular_velocity: velocity.angular,
            }),
            _ => NodeState::Compact(CompactNodeState {
                id,
                position: transform.position,
                orientation: transform.orientation,
            }),
        }
    }

    pub fn id(&self) -> ObjectId {
        match self {
            NodeState::Compact(state) => state.id,
            NodeState::Full(state) => state.id,
        }
    }

    pub fn transform(&self) -> Transform {
        match self {
            NodeState::Compact(state) => Transform::new(state.position, state.orientation),
            NodeState::Full(state) => Transform::new(state.position, state.orientation),
        }
    }

    /// Velocity carried by the update, zero for the compact tier
    pub fn velocity(&self) -> Velocity {
        match self {
            NodeState::Compact(_) => Velocity::ZERO,
            NodeState::Full(state) => Velocity::new(state.linear_velocity, state.angular_velocity),
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, NodeState::Full(_))
    }
}

impl Serde for CompactNodeState {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        self.id.ser(writer);
        self.position.ser(writer);
        self.orientation.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            id: ObjectId::de(reader)?,
            position: Vec3::de(reader)?,
            orientation: Quat::de(reader)?,
        })
    }

    fn byte_length(&self) -> usize {
        Self::const_byte_length()
    }
}

impl ConstByteLength for CompactNodeState {
    fn const_byte_length() -> usize {
        ObjectId::const_byte_length() + Vec3::const_byte_length() + Quat::const_byte_length()
    }
}

impl Serde for FullNodeState {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        self.id.ser(writer);
        self.position.ser(writer);
        self.orientation.ser(writer);
        self.linear_velocity.ser(writer);
        self.angular_velocity.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            id: ObjectId::de(reader)?,
            position: Vec3::de(reader)?,
            orientation: Quat::de(reader)?,
            linear_velocity: Vec3::de(reader)?,
            angular_velocity: Quat::de(reader)?,
        })
    }

    fn byte_length(&self) -> usize {
        Self::const_byte_length()
    }
}

impl ConstByteLength for FullNodeState {
    fn const_byte_length() -> usize {
        CompactNodeState::const_byte_length()
            + Vec3::const_byte_length()
            + Quat::const_byte_length()
    }
}
