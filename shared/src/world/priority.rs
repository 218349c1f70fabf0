use std::fmt;

use crate::{
    constants::OBJECT_ID_SPACE, types::ObjectId, world::registry::WriteRegistration,
};

/// How much priority an object gains on every accumulation pass
pub enum Priority {
    Constant(f32),
    /// Evaluated once per accumulation pass
    Dynamic(Box<dyn Fn() -> f32 + Send>),
}

impl Priority {
    pub fn dynamic<F: Fn() -> f32 + Send + 'static>(callback: F) -> Self {
        Priority::Dynamic(Box::new(callback))
    }

    pub fn weight(&self) -> f32 {
        match self {
            Priority::Constant(weight) => *weight,
            Priority::Dynamic(callback) => callback(),
        }
    }
}

impl From<f32> for Priority {
    fn from(weight: f32) -> Self {
        Priority::Constant(weight)
    }
}

impl fmt::Debug for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Constant(weight) => f.debug_tuple("Constant").field(weight).finish(),
            Priority::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Decides which objects fit in the next packet.
///
/// Every pass adds each object's weight to its score; selecting an object
/// zeroes its score, so objects left out keep growing until they outrank the
/// ones that were just sent.
pub struct PriorityAccumulator {
    scores: Vec<f32>,
    candidates: Vec<(ObjectId, f32)>,
}

impl Default for PriorityAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityAccumulator {
    pub fn new() -> Self {
        Self {
            scores: vec![0.0; OBJECT_ID_SPACE],
            candidates: Vec::new(),
        }
    }

    pub fn accumulate<'r, H: 'r>(
        &mut self,
        registrations: impl IntoIterator<Item = &'r WriteRegistration<H>>,
    ) {
        for registration in registrations {
            self.scores[registration.id().index()] += registration.priority().weight();
        }
    }

    /// Returns up to `count` ids with the highest scores, highest first, ties
    /// going to the lower id. Selected scores are reset to zero.
    pub fn select_top<'r, H: 'r>(
        &mut self,
        count: usize,
        registrations: impl IntoIterator<Item = &'r WriteRegistration<H>>,
    ) -> Vec<ObjectId> {
        self.candidates.clear();
        for registration in registrations {
            let id = registration.id();
            self.candidates.push((id, self.scores[id.index()]));
        }
        self.candidates
            .sort_by(|(id_a, score_a), (id_b, score_b)| {
                score_b.total_cmp(score_a).then(id_a.cmp(id_b))
            });

        let selected: Vec<ObjectId> = self
            .candidates
            .iter()
            .take(count)
            .map(|(id, _)| *id)
            .collect();
        for id in &selected {
            self.scores[id.index()] = 0.0;
        }
        selected
    }

    pub fn score(&self, id: &ObjectId) -> f32 {
        self.scores[id.index()]
    }

    pub fn reset(&mut self, id: &ObjectId) {
        self.scores[id.index()] = 0.0;
    }
}
