pub mod engine;
pub mod physics;
pub mod types;

pub use self::physics::BigramKind;
pub use self::types::{Bigram, BigramTable};
use crate::config::ScoringConfig;
use crate::geometry::{KeyMap, KeyPosition};
use crate::layouts::LayoutDefinition;

pub struct Scorer {
    pub config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Single pair, no caching.
    pub fn score_pair(&self, def: &LayoutDefinition, k1: &KeyPosition, k2: &KeyPosition) -> Bigram {
        engine::score_pair(k1, k2, def, &self.config)
    }

    /// Full |alphabet|² table for one layout.
    pub fn build_table(&self, def: &LayoutDefinition, keys: &KeyMap) -> BigramTable {
        engine::build_table(def, keys, &self.config)
    }
}
