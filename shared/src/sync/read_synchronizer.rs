use std::hash::Hash;

use log::{debug, warn};

use crate::{
    connection::packet::Packet,
    messages::input_deduper::InputDeduper,
    sync::{
        config::SyncConfig,
        input_interpreter::{InputInterpreter, MissingObject},
    },
    types::ObjectId,
    world::{
        error::RegistryError, registry::ReadRegistry, transform::Transform,
        world_type::WorldMutType,
    },
};

/// What applying one packet did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub inputs_applied: usize,
    pub updates_applied: usize,
    pub placeholders_spawned: usize,
    pub updates_dropped: usize,
}

/// Applies packets released by the jitter buffer to the local world
pub struct ReadSynchronizer<H: Eq + Hash + Clone> {
    registry: ReadRegistry<H>,
    deduper: InputDeduper,
    reference: Option<H>,
}

impl<H: Eq + Hash + Clone> ReadSynchronizer<H> {
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            registry: ReadRegistry::new(),
            deduper: InputDeduper::new(config.dedup_capacity),
            reference: None,
        }
    }

    pub fn registry(&self) -> &ReadRegistry<H> {
        &self.registry
    }

    /// Binds a local object to an id chosen by the remote writer
    pub fn register(&mut self, handle: H, id: ObjectId) -> Result<(), RegistryError> {
        self.registry.register(handle, id)
    }

    pub fn remove(&mut self, id: &ObjectId) -> Option<H> {
        self.registry.remove(id)
    }

    /// Received transforms are interpreted relative to this object when set
    pub fn set_reference(&mut self, reference: Option<H>) {
        self.reference = reference;
    }

    pub fn apply<W, I>(&mut self, packet: Packet, world: &mut W, interpreter: &mut I) -> ApplyReport
    where
        W: WorldMutType<H>,
        I: InputInterpreter<H, W>,
    {
        let mut report = ApplyReport::default();
        let sequence = packet.sequence;

        for input in self.deduper.filter(packet.inputs.iter().cloned()) {
            interpreter.apply_input(&input, world, &mut self.registry);
            report.inputs_applied += 1;
        }

        let frame: Option<Transform> = self
            .reference
            .as_ref()
            .and_then(|reference| world.transform(reference));

        for state in packet.updates() {
            let id = state.id();
            let handle = match self.registry.handle(&id) {
                Some(handle) => handle.clone(),
                None => match interpreter.object_missing(&state) {
                    MissingObject::SpawnPlaceholder => {
                        let handle = world.spawn_placeholder();
                        if let Err(error) = self.registry.register(handle.clone(), id) {
                            warn!("Could not register placeholder for object {}: {}", id.value(), error);
                            report.updates_dropped += 1;
                            continue;
                        }
                        report.placeholders_spawned += 1;
                        handle
                    }
                    MissingObject::Drop => {
                        report.updates_dropped += 1;
                        continue;
                    }
                },
            };

            let transform = match &frame {
                Some(frame) => state.transform().in_frame(frame),
                None => state.transform(),
            };
            world.set_transform(&handle, transform);
            if state.is_full() || world.velocity(&handle).is_some() {
                world.set_velocity(&handle, state.velocity());
            }
            report.updates_applied += 1;
        }

        debug!("Applied packet {}: {:?}", sequence, report);
        report
    }
}
