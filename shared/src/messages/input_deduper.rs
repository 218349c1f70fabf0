use crate::{constants::MAX_INPUTS_PER_PACKET, messages::input::Input};

/// Read-side filter that lets each input through once, no matter how many
/// overlapping packets repeat it.
///
/// Inputs are keyed on sequence and payload. An input repeating both exactly
/// one full 65536-tick lap after the last input stored in its slot is taken
/// for a duplicate.
pub struct InputDeduper {
    seen: Vec<Option<Input>>,
}

impl InputDeduper {
    /// `capacity` is raised to the per-packet input maximum if smaller
    pub fn new(capacity: usize) -> Self {
        Self {
            seen: vec![None; capacity.max(MAX_INPUTS_PER_PACKET)],
        }
    }

    pub fn capacity(&self) -> usize {
        self.seen.len()
    }

    /// Returns the inputs not seen before, in the order given, and records them
    pub fn filter<I: IntoIterator<Item = Input>>(&mut self, inputs: I) -> Vec<Input> {
        let mut output = Vec::new();
        for input in inputs {
            let index = usize::from(input.sequence) % self.seen.len();
            if self.seen[index].as_ref() == Some(&input) {
                continue;
            }
            self.seen[index] = Some(input.clone());
            output.push(input);
        }
        output
    }
}
