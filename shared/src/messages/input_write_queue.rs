use std::collections::VecDeque;

use crate::{
    constants::MAX_INPUT_PAYLOAD_BYTES,
    messages::{error::InputError, input::Input, input_window_buffer::InputWindowBuffer},
    types::Sequence,
};

/// Inputs issued by the local application, waiting for a tick to carry them.
/// Each tick takes at most one, so no two inputs share a sequence.
#[derive(Default)]
pub struct InputWriteQueue {
    pending: VecDeque<Vec<u8>>,
}

impl InputWriteQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, payload: Vec<u8>) -> Result<(), InputError> {
        if payload.len() > MAX_INPUT_PAYLOAD_BYTES {
            return Err(InputError::PayloadTooLarge {
                length: payload.len(),
                max: MAX_INPUT_PAYLOAD_BYTES,
            });
        }
        self.pending.push_back(payload);
        Ok(())
    }

    /// Moves the oldest pending payload into `window`, stamped with `at`.
    /// Returns whether anything was written.
    pub fn write(&mut self, window: &mut InputWindowBuffer, at: Sequence) -> bool {
        let Some(payload) = self.pending.pop_front() else {
            return false;
        };
        window.push(Input::new(at, payload));
        true
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
