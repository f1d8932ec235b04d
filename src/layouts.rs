use crate::error::{KeyWeightError, KwResult};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub const ROW_COUNT: usize = 3;
pub const COLUMN_COUNT: usize = 10;
pub const ROW_DISTANCE_SLOTS: usize = 8;

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Hyroll,
}

impl KnownLayout {
    // Maps standard 30-key row-stagger, top row first.
    pub fn rows(&self) -> [&'static str; ROW_COUNT] {
        match self {
            Self::Qwerty => ["qwertyuiop", "asdfghjkl;", "zxcvbnm,./"],
            Self::Hyroll => ["pclmvkuoy`", "nsrtd.aeih", "fg'wqx,zjb"],
        }
    }

    /// Position of the preset in `KnownLayout::iter()` order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn definition(&self) -> KwResult<LayoutDefinition> {
        LayoutDefinition::new(&self.to_string(), &self.rows(), LayoutTables::STANDARD)
    }
}

pub fn all_layouts() -> Vec<KnownLayout> {
    KnownLayout::iter().collect()
}

/// Constant ergonomic tables, indexed by row or column of the 3x10 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutTables {
    /// 1 = one above home, 0 = home, -1 = one below.
    pub row_distances_to_home: [i8; ROW_COUNT],
    /// 1=Index, 2=Middle, 3=Ring, 4=Pinky. Mirrored around the center.
    pub finger_indexes: [u8; COLUMN_COUNT],
    /// 1 = Left, 2 = Right
    pub hand_indexes: [u8; COLUMN_COUNT],
    pub column_weights: [u32; COLUMN_COUNT],
    pub row_distance_weights: [u32; ROW_DISTANCE_SLOTS],
}

impl LayoutTables {
    pub const STANDARD: Self = Self {
        row_distances_to_home: [1, 0, -1],
        finger_indexes: [4, 3, 2, 1, 1, 1, 1, 2, 3, 4],
        hand_indexes: [1, 1, 1, 1, 1, 2, 2, 2, 2, 2],
        column_weights: [70, 80, 100, 95, 40, 40, 95, 100, 80, 70],
        row_distance_weights: [100, 80, 60, 10, 1, 1, 1, 1],
    };

    /// Largest row-distance index any key pair can produce.
    /// Same hand: |d1| + |d2 - d1|. Different hands: max(|d1|, |d2|).
    pub fn max_row_distance_index(&self) -> usize {
        let dists = &self.row_distances_to_home;
        dists
            .iter()
            .flat_map(|&d1| dists.iter().map(move |&d2| (d1 as i32, d2 as i32)))
            .map(|(d1, d2)| {
                let same_hand = d1.abs() + (d2 - d1).abs();
                let cross_hand = d1.abs().max(d2.abs());
                same_hand.max(cross_hand) as usize
            })
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct LayoutDefinition {
    name: String,
    rows: Vec<Vec<char>>,
    tables: LayoutTables,
    alphabet: Vec<char>,
}

impl LayoutDefinition {
    /// Validates the row block against the tables and derives the sorted alphabet.
    /// A duplicate character, a block that is not exactly 3x10, or row distances
    /// that overrun the row-distance weights are configuration defects.
    pub fn new(name: &str, rows: &[&str], tables: LayoutTables) -> KwResult<Self> {
        if rows.len() != ROW_COUNT {
            return Err(KeyWeightError::Config(format!(
                "Layout '{}' has {} rows, expected {}",
                name,
                rows.len(),
                ROW_COUNT
            )));
        }

        let worst_row_idx = tables.max_row_distance_index();
        if worst_row_idx >= tables.row_distance_weights.len() {
            return Err(KeyWeightError::Config(format!(
                "Layout '{}' row distances reach index {}, weights cover {}",
                name,
                worst_row_idx,
                tables.row_distance_weights.len()
            )));
        }

        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let mut alphabet = Vec::with_capacity(ROW_COUNT * COLUMN_COUNT);

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != COLUMN_COUNT {
                return Err(KeyWeightError::Config(format!(
                    "Layout '{}' row {} has {} columns, expected {}",
                    name,
                    row_idx,
                    row.len(),
                    COLUMN_COUNT
                )));
            }
            alphabet.extend_from_slice(row);
        }

        alphabet.sort_unstable();
        if let Some(pair) = alphabet.windows(2).find(|w| w[0] == w[1]) {
            return Err(KeyWeightError::Config(format!(
                "Layout '{}' maps '{}' to more than one key",
                name, pair[0]
            )));
        }

        Ok(Self {
            name: name.to_string(),
            rows,
            tables,
            alphabet,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn tables(&self) -> &LayoutTables {
        &self.tables
    }

    /// Sorted, one entry per character.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn alphabet_string(&self) -> String {
        self.alphabet.iter().collect()
    }

    /// Position of `ch` in the sorted alphabet.
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.alphabet.binary_search(&ch).ok()
    }

    /// Yields `(char, row, col)` for every key in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (char, usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &ch)| (ch, r, c))
        })
    }
}
