use thiserror::Error;

use crate::types::ObjectId;

/// Errors that can occur while registering replicated objects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Every id in the 16-bit id space has been handed out. This is a design
    /// limit of the protocol, not a condition callers are expected to recover from.
    #[error("Object id space exhausted: all {capacity} ids have been assigned")]
    CapacityExceeded { capacity: usize },

    /// The handle is already registered under another id
    #[error("Object is already registered with id {}", .id.value())]
    AlreadyRegistered { id: ObjectId },

    /// Another object already holds the supplied id
    #[error("Object id {} is already taken by another object", .id.value())]
    IdTaken { id: ObjectId },

    /// Id 0 is reserved and cannot be registered
    #[error("Object id 0 is reserved and cannot be registered")]
    InvalidId,
}
