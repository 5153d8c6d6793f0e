//! Opponent choice sources

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

use crate::core::types::Choice;

/// Produces the computer's choice for a round
pub trait ChoiceSource {
    fn next_choice(&mut self) -> Choice;
}

/// Uniform random opponent backed by any `Rng`
#[derive(Debug, Clone)]
pub struct RngChoiceSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngChoiceSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChoiceSource<ChaCha8Rng> {
    /// Reproducible opponent for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Opponent seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                tracing::info!("Opponent seeded with {}", seed);
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> ChoiceSource for RngChoiceSource<R> {
    fn next_choice(&mut self) -> Choice {
        Choice::from_index(self.rng.gen_range(0..Choice::ALL.len()))
    }
}

/// Plays back a fixed sequence, repeating the last choice once exhausted
#[derive(Debug, Clone)]
pub struct ScriptedChoiceSource {
    script: VecDeque<Choice>,
    last: Choice,
}

impl ScriptedChoiceSource {
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: Choice::Rock,
        }
    }

    /// Always answers with the same choice
    pub fn always(choice: Choice) -> Self {
        Self {
            script: VecDeque::new(),
            last: choice,
        }
    }
}

impl ChoiceSource for ScriptedChoiceSource {
    fn next_choice(&mut self) -> Choice {
        if let Some(choice) = self.script.pop_front() {
            self.last = choice;
        }
        self.last
    }
}
