use log::warn;

use replicast_shared::{
    Input, InputInterpreter, MissingObject, NodeState, ObjectId, ReadRegistry, Transform,
};

use crate::test_world::{Body, TestObject, TestWorld};

/// First payload byte of an input that creates an object on the receiver
pub const SPAWN_COMMAND: u8 = 0xA1;

/// Input payload asking the receiver to create the object registered as `id`
pub fn spawn_command(id: ObjectId) -> Vec<u8> {
    let [low, high] = id.value().to_le_bytes();
    vec![SPAWN_COMMAND, low, high]
}

/// Records every applied input and understands `spawn_command` payloads
pub struct RecordingInterpreter {
    pub applied: Vec<Input>,
    pub missing: MissingObject,
    pub missing_seen: usize,
}

impl Default for RecordingInterpreter {
    fn default() -> Self {
        Self::new(MissingObject::SpawnPlaceholder)
    }
}

impl RecordingInterpreter {
    pub fn new(missing: MissingObject) -> Self {
        Self {
            applied: Vec::new(),
            missing,
            missing_seen: 0,
        }
    }

    pub fn payloads(&self) -> Vec<Vec<u8>> {
        self.applied.iter().map(|input| input.payload.clone()).collect()
    }
}

impl InputInterpreter<TestObject, TestWorld> for RecordingInterpreter {
    fn apply_input(
        &mut self,
        input: &Input,
        world: &mut TestWorld,
        registry: &mut ReadRegistry<TestObject>,
    ) {
        self.applied.push(input.clone());

        if let [SPAWN_COMMAND, low, high] = input.payload.as_slice() {
            let id = ObjectId::new(u16::from_le_bytes([*low, *high]));
            if registry.contains(&id) {
                return;
            }
            let object = world.spawn(Body::kinematic(Transform::IDENTITY));
            if let Err(error) = registry.register(object, id) {
                warn!("Could not register spawned object: {}", error);
            }
        }
    }

    fn object_missing(&mut self, _state: &NodeState) -> MissingObject {
        self.missing_seen += 1;
        self.missing
    }
}
