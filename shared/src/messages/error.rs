use thiserror::Error;

/// Errors that can occur when queueing a local input for replication
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The payload does not fit behind the 1-byte length prefix
    #[error("Input payload of {length} bytes exceeds the maximum of {max} bytes")]
    PayloadTooLarge { length: usize, max: usize },
}
