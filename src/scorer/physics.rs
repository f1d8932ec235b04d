use crate::geometry::KeyPosition;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum BigramKind {
    Alternate,
    SameFinger,
    InRoll,
    OutRoll,
}

impl BigramKind {
    /// Multiplier applied to the column weights. Higher = more comfortable.
    pub const fn weight(&self) -> u32 {
        match self {
            Self::Alternate => 80,
            Self::SameFinger => 10,
            Self::InRoll => 100,
            Self::OutRoll => 60,
        }
    }
}

/// Classifies the transition from `k1` (typed first) to `k2`.
pub fn classify(k1: &KeyPosition, k2: &KeyPosition) -> BigramKind {
    if k1.hand != k2.hand {
        return BigramKind::Alternate;
    }

    match k1.finger.cmp(&k2.finger) {
        Ordering::Equal => BigramKind::SameFinger,
        Ordering::Less => BigramKind::InRoll,
        Ordering::Greater => BigramKind::OutRoll,
    }
}

/// Index into the row-distance weight table. Smaller = cheaper.
///
/// Same hand: reach from home to `k1`, then travel from `k1` to `k2`.
/// Different hands: the farther of the two reaches.
pub fn row_distance_index(k1: &KeyPosition, k2: &KeyPosition) -> usize {
    let home_to_k1 = k1.row_distance_to_home.unsigned_abs() as usize;
    let home_to_k2 = k2.row_distance_to_home.unsigned_abs() as usize;

    if k1.hand == k2.hand {
        let k1_to_k2 = (k2.row_distance_to_home - k1.row_distance_to_home).unsigned_abs() as usize;
        home_to_k1 + k1_to_k2
    } else {
        home_to_k1.max(home_to_k2)
    }
}
