use crate::{messages::input::Input, types::Sequence, wrapping_number::sequence_less_than};

/// Write-side ring of recently issued inputs, indexed by `sequence % capacity`.
///
/// Every packet carries the whole trailing window of inputs, so an input is
/// retransmitted for as many ticks as the window is long and then ages out.
pub struct InputWindowBuffer {
    slots: Vec<Option<Input>>,
}

impl InputWindowBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Stores `input`, overwriting whatever occupied its slot
    pub fn push(&mut self, input: Input) {
        let index = self.index(input.sequence);
        self.slots[index] = Some(input);
    }

    /// Inputs issued in `[at - count + 1, at]`, oldest first.
    ///
    /// Slots holding an input older than the sequence they are read for have
    /// been lapped and are cleared. Slots holding a newer input are left alone.
    pub fn top(&mut self, count: usize, at: Sequence) -> Vec<Input> {
        let count = count.min(self.slots.len()).min(usize::from(u16::MAX / 2));
        let mut output = Vec::new();

        for back in (0..count).rev() {
            // count is bounded by u16::MAX / 2 above
            let sequence = at.wrapping_sub(back as u16);
            let index = self.index(sequence);
            let stale = match &self.slots[index] {
                Some(input) if input.sequence == sequence => {
                    output.push(input.clone());
                    false
                }
                Some(input) => sequence_less_than(input.sequence, sequence),
                None => false,
            };
            if stale {
                self.slots[index] = None;
            }
        }

        output
    }

    fn index(&self, sequence: Sequence) -> usize {
        usize::from(sequence) % self.slots.len()
    }
}
