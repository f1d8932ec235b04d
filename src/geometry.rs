use crate::error::{KeyWeightError, KwResult};
use crate::layouts::{LayoutDefinition, LayoutTables};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyPosition {
    pub ch: char,
    pub row: u8,                  // 0=Top, 1=Home, 2=Bottom
    pub col: u8,                  // Visual column index
    pub row_distance_to_home: i8, // 1=Above, 0=Home, -1=Below
    pub finger: u8,               // 1=Index, 2=Middle, 3=Ring, 4=Pinky
    pub hand: u8,                 // 1 = Left, 2 = Right
    pub column_weight: u32,       // Higher = easier to reach
}

impl KeyPosition {
    pub fn from_coordinates(
        tables: &LayoutTables,
        ch: char,
        row: usize,
        col: usize,
    ) -> KwResult<Self> {
        let out_of_range = || {
            KeyWeightError::Config(format!(
                "Key '{}' at row {}, col {} is outside the layout tables",
                ch, row, col
            ))
        };

        let row_distance_to_home = *tables.row_distances_to_home.get(row).ok_or_else(out_of_range)?;
        let finger = *tables.finger_indexes.get(col).ok_or_else(out_of_range)?;
        let hand = *tables.hand_indexes.get(col).ok_or_else(out_of_range)?;
        let column_weight = *tables.column_weights.get(col).ok_or_else(out_of_range)?;

        Ok(Self {
            ch,
            row: row as u8,
            col: col as u8,
            row_distance_to_home,
            finger,
            hand,
            column_weight,
        })
    }

    pub fn is_home_row(&self) -> bool {
        self.row_distance_to_home == 0
    }
}

/// Key positions of one layout, stored in alphabet order.
#[derive(Debug, Clone)]
pub struct KeyMap {
    keys: Vec<KeyPosition>,
}

impl KeyMap {
    pub fn build(def: &LayoutDefinition) -> KwResult<Self> {
        let mut slots: Vec<Option<KeyPosition>> = vec![None; def.alphabet().len()];

        for (ch, row, col) in def.coordinates() {
            let idx = def.index_of(ch).ok_or_else(|| {
                KeyWeightError::Config(format!("Key '{}' missing from {} alphabet", ch, def.name()))
            })?;
            slots[idx] = Some(KeyPosition::from_coordinates(def.tables(), ch, row, col)?);
        }

        let keys = slots
            .into_iter()
            .enumerate()
            .map(|(idx, slot)| {
                slot.ok_or_else(|| {
                    KeyWeightError::Config(format!(
                        "Alphabet slot {} of {} has no key",
                        idx,
                        def.name()
                    ))
                })
            })
            .collect::<KwResult<Vec<_>>>()?;

        Ok(Self { keys })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Lookup by alphabet index.
    pub fn get(&self, idx: usize) -> Option<&KeyPosition> {
        self.keys.get(idx)
    }

    pub fn keys(&self) -> &[KeyPosition] {
        &self.keys
    }
}
