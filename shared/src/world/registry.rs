use std::{collections::HashMap, hash::Hash};

use crate::{
    constants::OBJECT_ID_SPACE,
    types::ObjectId,
    world::{error::RegistryError, priority::Priority},
};

/// An object the local peer replicates outward
#[derive(Debug)]
pub struct WriteRegistration<H> {
    id: ObjectId,
    handle: H,
    priority: Priority,
}

impl<H> WriteRegistration<H> {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }
}

/// Write-side registry. Hands out ids sequentially starting at 1 and never
/// reuses one, even after removal.
pub struct WriteRegistry<H: Eq + Hash + Clone> {
    counter: u16,
    handle_to_id: HashMap<H, ObjectId>,
    // indexed by id, slot 0 is always empty
    registrations: Vec<Option<WriteRegistration<H>>>,
}

impl<H: Eq + Hash + Clone> Default for WriteRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Eq + Hash + Clone> WriteRegistry<H> {
    pub fn new() -> Self {
        Self {
            counter: 0,
            handle_to_id: HashMap::new(),
            registrations: vec![None],
        }
    }

    /// Registers `handle`, returning its id. Registering the same handle again
    /// returns the existing id and leaves its priority untouched.
    pub fn try_register(
        &mut self,
        handle: H,
        priority: Priority,
    ) -> Result<ObjectId, RegistryError> {
        if let Some(id) = self.handle_to_id.get(&handle) {
            return Ok(*id);
        }
        if self.counter == u16::MAX {
            return Err(RegistryError::CapacityExceeded {
                capacity: OBJECT_ID_SPACE - 1,
            });
        }

        self.counter += 1;
        let id = ObjectId::new(self.counter);
        self.handle_to_id.insert(handle.clone(), id);
        self.registrations.push(Some(WriteRegistration {
            id,
            handle,
            priority,
        }));
        Ok(id)
    }

    /// Registers `handle`, returning its id.
    ///
    /// # Panics
    ///
    /// Panics once the 16-bit id space is exhausted.
    pub fn register(&mut self, handle: H, priority: Priority) -> ObjectId {
        self.try_register(handle, priority)
            .expect("object id space exhausted, cannot register any more objects")
    }

    pub fn get(&self, id: &ObjectId) -> Option<&WriteRegistration<H>> {
        self.registrations.get(id.index())?.as_ref()
    }

    pub fn handle(&self, id: &ObjectId) -> Option<&H> {
        self.get(id).map(WriteRegistration::handle)
    }

    pub fn id(&self, handle: &H) -> Option<ObjectId> {
        self.handle_to_id.get(handle).copied()
    }

    /// Live registrations in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &WriteRegistration<H>> {
        self.registrations.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.handle_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handle_to_id.is_empty()
    }

    /// Forgets the object. Its id stays retired.
    pub fn remove(&mut self, id: &ObjectId) -> Option<H> {
        let registration = self.registrations.get_mut(id.index())?.take()?;
        self.handle_to_id.remove(&registration.handle);
        Some(registration.handle)
    }
}

/// Read-side registry. Ids are supplied by the remote writer so both peers
/// agree on them.
pub struct ReadRegistry<H: Eq + Hash + Clone> {
    handle_to_id: HashMap<H, ObjectId>,
    // indexed by id, grown on demand
    id_to_handle: Vec<Option<H>>,
}

impl<H: Eq + Hash + Clone> Default for ReadRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Eq + Hash + Clone> ReadRegistry<H> {
    pub fn new() -> Self {
        Self {
            handle_to_id: HashMap::new(),
            id_to_handle: Vec::new(),
        }
    }

    pub fn register(&mut self, handle: H, id: ObjectId) -> Result<(), RegistryError> {
        if !id.is_valid() {
            return Err(RegistryError::InvalidId);
        }
        if let Some(existing) = self.handle_to_id.get(&handle) {
            return Err(RegistryError::AlreadyRegistered { id: *existing });
        }
        if self.handle(&id).is_some() {
            return Err(RegistryError::IdTaken { id });
        }

        if self.id_to_handle.len() <= id.index() {
            self.id_to_handle.resize(id.index() + 1, None);
        }
        self.id_to_handle[id.index()] = Some(handle.clone());
        self.handle_to_id.insert(handle, id);
        Ok(())
    }

    pub fn handle(&self, id: &ObjectId) -> Option<&H> {
        self.id_to_handle.get(id.index())?.as_ref()
    }

    pub fn id(&self, handle: &H) -> Option<ObjectId> {
        self.handle_to_id.get(handle).copied()
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.handle(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.handle_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handle_to_id.is_empty()
    }

    pub fn remove(&mut self, id: &ObjectId) -> Option<H> {
        let handle = self.id_to_handle.get_mut(id.index())?.take()?;
        self.handle_to_id.remove(&handle);
        Some(handle)
    }
}
