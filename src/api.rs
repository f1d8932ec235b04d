use crate::config::ScoringConfig;
use crate::error::{KeyWeightError, KwResult};
use crate::geometry::{KeyMap, KeyPosition};
use crate::layouts::{all_layouts, KnownLayout, LayoutDefinition};
use crate::scorer::{Bigram, BigramTable, Scorer};
use std::sync::OnceLock;
use tracing::info;

struct LayoutEntry {
    def: LayoutDefinition,
    keys: KeyMap,
    table: OnceLock<BigramTable>,
}

/// Preset definitions plus their bigram tables, each built at most once.
pub struct BigramRegistry {
    scorer: Scorer,
    entries: Vec<LayoutEntry>,
}

impl BigramRegistry {
    /// Validates every preset up front; a defective preset fails here, not at lookup.
    pub fn with_config(config: ScoringConfig) -> KwResult<Self> {
        let mut entries = Vec::new();
        for layout in all_layouts() {
            let def = layout.definition()?;
            let keys = KeyMap::build(&def)?;
            entries.push(LayoutEntry {
                def,
                keys,
                table: OnceLock::new(),
            });
        }

        info!(
            "Registry ready: {} layouts (row distance applied: {})",
            entries.len(),
            config.apply_row_distance
        );

        Ok(Self {
            scorer: Scorer::new(config),
            entries,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.scorer.config
    }

    pub fn list_layouts(&self) -> Vec<KnownLayout> {
        all_layouts()
    }

    fn entry(&self, layout: KnownLayout) -> &LayoutEntry {
        &self.entries[layout.index()]
    }

    pub fn definition(&self, layout: KnownLayout) -> &LayoutDefinition {
        &self.entry(layout).def
    }

    pub fn alphabet(&self, layout: KnownLayout) -> &[char] {
        self.entry(layout).def.alphabet()
    }

    /// Builds the full table on first access; concurrent callers share one build.
    pub fn table(&self, layout: KnownLayout) -> &BigramTable {
        let entry = self.entry(layout);
        entry
            .table
            .get_or_init(|| self.scorer.build_table(&entry.def, &entry.keys))
    }

    pub fn key_position(&self, layout: KnownLayout, ch: char) -> KwResult<KeyPosition> {
        let entry = self.entry(layout);
        entry
            .def
            .index_of(ch)
            .and_then(|idx| entry.keys.get(idx))
            .copied()
            .ok_or_else(|| KeyWeightError::KeyNotFound {
                layout: layout.to_string(),
                ch,
            })
    }

    pub fn bigram(&self, layout: KnownLayout, first: char, second: char) -> KwResult<Bigram> {
        self.table(layout).get(first, second).copied()
    }

    pub fn bigram_weight(&self, layout: KnownLayout, first: char, second: char) -> KwResult<u32> {
        self.table(layout).weight(first, second)
    }
}

static DEFAULT_REGISTRY: OnceLock<Result<BigramRegistry, String>> = OnceLock::new();

/// Process-wide registry with the default scoring config.
pub fn default_registry() -> KwResult<&'static BigramRegistry> {
    DEFAULT_REGISTRY
        .get_or_init(|| BigramRegistry::with_config(ScoringConfig::default()).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| KeyWeightError::Config(e.clone()))
}

pub fn list_layouts() -> Vec<KnownLayout> {
    all_layouts()
}

pub fn alphabet(layout: KnownLayout) -> KwResult<&'static [char]> {
    Ok(default_registry()?.alphabet(layout))
}

pub fn key_position(layout: KnownLayout, ch: char) -> KwResult<KeyPosition> {
    default_registry()?.key_position(layout, ch)
}

pub fn bigram(layout: KnownLayout, first: char, second: char) -> KwResult<Bigram> {
    default_registry()?.bigram(layout, first, second)
}

/// Ergonomic weight of typing `second` right after `first`.
pub fn bigram_weight(layout: KnownLayout, first: char, second: char) -> KwResult<u32> {
    default_registry()?.bigram_weight(layout, first, second)
}
