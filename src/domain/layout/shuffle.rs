//! Display order of multiple-choice options.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// How choices are ordered on the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "seed")]
pub enum ChoiceOrder {
    /// Choices appear as written.
    AsWritten,
    /// Fresh random order on every run.
    #[default]
    Shuffled,
    /// Reproducible random order.
    Seeded(u64),
}

/// One random source per layout run, shared by every multiple-choice element.
pub struct ChoiceShuffler {
    rng: Option<StdRng>,
}

impl ChoiceShuffler {
    pub fn new(order: ChoiceOrder) -> Self {
        let rng = match order {
            ChoiceOrder::AsWritten => None,
            ChoiceOrder::Shuffled => Some(StdRng::from_entropy()),
            ChoiceOrder::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };
        Self { rng }
    }

    /// A permutation of `0..len`.
    pub fn order(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        if let Some(rng) = self.rng.as_mut() {
            indices.shuffle(rng);
        }
        indices
    }
}
