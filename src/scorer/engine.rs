use super::physics::{classify, row_distance_index};
use super::types::{Bigram, BigramTable};
use crate::config::ScoringConfig;
use crate::geometry::{KeyMap, KeyPosition};
use crate::layouts::LayoutDefinition;
use tracing::debug;

/// `kind × col(k1) × col(k2)`, times the row-distance weight only when
/// `apply_row_distance` is set.
pub fn score_pair(
    k1: &KeyPosition,
    k2: &KeyPosition,
    def: &LayoutDefinition,
    config: &ScoringConfig,
) -> Bigram {
    let kind = classify(k1, k2);
    let row_idx = row_distance_index(k1, k2);

    let mut weight = kind.weight() * k1.column_weight * k2.column_weight;
    if config.apply_row_distance {
        // In range: LayoutDefinition::new checks max_row_distance_index.
        weight *= def.tables().row_distance_weights[row_idx];
    }

    Bigram {
        first: k1.ch,
        second: k2.ch,
        kind,
        row_distance_index: row_idx,
        weight,
    }
}

/// Eagerly builds all |alphabet|² pairs.
pub fn build_table(def: &LayoutDefinition, keys: &KeyMap, config: &ScoringConfig) -> BigramTable {
    let n = keys.len();
    let mut entries = Vec::with_capacity(n * n);

    for k1 in keys.keys() {
        for k2 in keys.keys() {
            entries.push(score_pair(k1, k2, def, config));
        }
    }

    debug!(
        "Built {} bigrams for '{}' (row distance applied: {})",
        entries.len(),
        def.name(),
        config.apply_row_distance
    );

    BigramTable {
        layout: def.name().to_string(),
        alphabet: def.alphabet().to_vec(),
        entries,
    }
}
