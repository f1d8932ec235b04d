use super::physics::BigramKind;
use crate::error::{KeyWeightError, KwResult};
use serde::Serialize;
use std::io::Write;

/// One ordered pair: `second` typed immediately after `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bigram {
    pub first: char,
    pub second: char,
    pub kind: BigramKind,
    pub row_distance_index: usize,
    pub weight: u32,
}

/// Every ordered pair of a layout's alphabet, flattened row-major by
/// alphabet position: `entries[i * n + j]` is (alphabet[i], alphabet[j]).
#[derive(Debug, Clone)]
pub struct BigramTable {
    pub(crate) layout: String,
    pub(crate) alphabet: Vec<char>,
    pub(crate) entries: Vec<Bigram>,
}

impl BigramTable {
    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, ch: char) -> KwResult<usize> {
        self.alphabet
            .binary_search(&ch)
            .map_err(|_| KeyWeightError::KeyNotFound {
                layout: self.layout.clone(),
                ch,
            })
    }

    pub fn get(&self, first: char, second: char) -> KwResult<&Bigram> {
        let i = self.position(first)?;
        let j = self.position(second)?;
        Ok(&self.entries[i * self.alphabet.len() + j])
    }

    pub fn weight(&self, first: char, second: char) -> KwResult<u32> {
        self.get(first, second).map(|b| b.weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bigram> {
        self.entries.iter()
    }

    /// All pairs, easiest to type first. Ties keep alphabet order.
    pub fn ranked(&self) -> Vec<&Bigram> {
        let mut sorted: Vec<&Bigram> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.weight.cmp(&a.weight));
        sorted
    }

    /// Writes one CSV record per ordered pair, with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> KwResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for bigram in &self.entries {
            wtr.serialize(bigram)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
