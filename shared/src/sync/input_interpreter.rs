use std::hash::Hash;

use crate::{
    messages::input::Input,
    world::{node_state::NodeState, registry::ReadRegistry, world_type::WorldMutType},
};

/// What to do with a state update for an id nobody has registered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingObject {
    /// Spawn a placeholder through the world, register it under the update's
    /// id and apply the update to it
    SpawnPlaceholder,
    /// Discard the update
    Drop,
}

/// Application hooks invoked while applying a received packet
pub trait InputInterpreter<H: Eq + Hash + Clone, W: WorldMutType<H>> {
    /// Called exactly once per distinct input. Inputs that create objects are
    /// expected to register them in `registry` under the id the writer chose.
    fn apply_input(&mut self, input: &Input, world: &mut W, registry: &mut ReadRegistry<H>);

    fn object_missing(&mut self, _state: &NodeState) -> MissingObject {
        MissingObject::SpawnPlaceholder
    }
}

/// Ignores inputs, spawns placeholders for unknown objects
#[derive(Clone, Copy, Debug, Default)]
pub struct NilInterpreter;

impl<H: Eq + Hash + Clone, W: WorldMutType<H>> InputInterpreter<H, W> for NilInterpreter {
    fn apply_input(&mut self, _input: &Input, _world: &mut W, _registry: &mut ReadRegistry<H>) {}
}
