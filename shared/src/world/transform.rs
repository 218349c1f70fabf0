use replicast_serde::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn add(&self, other: &Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(&self, other: &Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn is_zero(&self) -> bool {
        *self == Vec3::ZERO
    }
}

impl Serde for Vec3 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        [self.x, self.y, self.z].ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let [x, y, z] = <[f32; 3]>::de(reader)?;
        Ok(Vec3::new(x, y, z))
    }

    fn byte_length(&self) -> usize {
        Self::const_byte_length()
    }
}

impl ConstByteLength for Vec3 {
    fn const_byte_length() -> usize {
        <[f32; 3]>::const_byte_length()
    }
}

/// Four-component rotation value. Used both for orientations (unit
/// quaternions) and for angular velocities, which are carried as raw
/// four-component deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Quat::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat::new(0.0, 0.0, 0.0, 1.0);
    pub const ZERO: Quat = Quat::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about a unit `axis`
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Quat::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    pub fn conjugate(&self) -> Quat {
        Quat::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Hamilton product, `self` applied after `rhs`
    pub fn mul(&self, rhs: &Quat) -> Quat {
        Quat::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }

    /// Rotates `v` by this (unit) quaternion
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let p = Quat::new(v.x, v.y, v.z, 0.0);
        let r = self.mul(&p).mul(&self.conjugate());
        Vec3::new(r.x, r.y, r.z)
    }

    pub fn is_zero(&self) -> bool {
        *self == Quat::ZERO
    }
}

impl Serde for Quat {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        [self.x, self.y, self.z, self.w].ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let [x, y, z, w] = <[f32; 4]>::de(reader)?;
        Ok(Quat::new(x, y, z, w))
    }

    fn byte_length(&self) -> usize {
        Self::const_byte_length()
    }
}

impl ConstByteLength for Quat {
    fn const_byte_length() -> usize {
        <[f32; 4]>::const_byte_length()
    }
}

/// Position and orientation of an object
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Expresses this world-space transform in the local space of `frame`
    pub fn relative_to(&self, frame: &Transform) -> Transform {
        let inverse = frame.orientation.conjugate();
        Transform {
            position: inverse.rotate(&self.position.sub(&frame.position)),
            orientation: inverse.mul(&self.orientation),
        }
    }

    /// Maps a transform expressed in the local space of `frame` back to world space
    pub fn in_frame(&self, frame: &Transform) -> Transform {
        Transform {
            position: frame.position.add(&frame.orientation.rotate(&self.position)),
            orientation: frame.orientation.mul(&self.orientation),
        }
    }
}

/// Linear and angular velocity of a physics-driven object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub linear: Vec3,
    pub angular: Quat,
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::ZERO
    }
}

impl Velocity {
    pub const ZERO: Velocity = Velocity {
        linear: Vec3::ZERO,
        angular: Quat::ZERO,
    };

    pub fn new(linear: Vec3, angular: Quat) -> Self {
        Self { linear, angular }
    }

    pub fn is_zero(&self) -> bool {
        self.linear.is_zero() && self.angular.is_zero()
    }
}
