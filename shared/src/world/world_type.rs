use crate::world::transform::{Transform, Velocity};

/// Read access to the application's simulation, keyed by object handle
pub trait WorldRefType<H> {
    /// Current world-space transform, or `None` if the object no longer exists
    fn transform(&self, handle: &H) -> Option<Transform>;

    /// Current velocity, `None` for objects not driven by physics
    fn velocity(&self, handle: &H) -> Option<Velocity>;

    /// Whether the physics engine considers the object asleep
    fn is_resting(&self, _handle: &H) -> bool {
        false
    }
}

/// Write access to the application's simulation
pub trait WorldMutType<H>: WorldRefType<H> {
    fn set_transform(&mut self, handle: &H, transform: Transform);

    fn set_velocity(&mut self, handle: &H, velocity: Velocity);

    /// Creates a stand-in object for an id this peer has not seen yet
    fn spawn_placeholder(&mut self) -> H;
}
