use crate::consts::ALPHABET_LEN;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NGramOrder {
    Bigram,
    Trigram,
    Quadgram,
}

impl NGramOrder {
    pub const ALL: [NGramOrder; 3] = [Self::Bigram, Self::Trigram, Self::Quadgram];

    /// Letters per n-gram.
    pub fn width(self) -> usize {
        match self {
            Self::Bigram => 2,
            Self::Trigram => 3,
            Self::Quadgram => 4,
        }
    }

    pub fn from_width(width: usize) -> Option<Self> {
        match width {
            2 => Some(Self::Bigram),
            3 => Some(Self::Trigram),
            4 => Some(Self::Quadgram),
            _ => None,
        }
    }

    /// Position in per-order arrays (floors, weights, tables).
    pub fn slot(self) -> usize {
        self.width() - 2
    }

    pub fn table_size(self) -> usize {
        ALPHABET_LEN.pow(self.width() as u32)
    }
}

/// Packs alphabet indices into a dense table offset, most significant first.
#[inline(always)]
pub fn pack(symbols: &[u8]) -> usize {
    symbols
        .iter()
        .fold(0usize, |acc, &s| acc * ALPHABET_LEN + s as usize)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBreakdown {
    pub order: NGramOrder,
    pub weight: f64,
    /// Mean log-likelihood over all windows of this order.
    pub mean: f64,
    pub windows: usize,
    /// Windows that landed on a tabulated n-gram rather than the floor.
    pub known_hits: usize,
}

impl OrderBreakdown {
    pub fn weighted(&self) -> f64 {
        self.weight * self.mean
    }

    pub fn hit_rate(&self) -> f64 {
        if self.windows == 0 {
            0.0
        } else {
            self.known_hits as f64 / self.windows as f64
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub composite: f64,
    pub letters: usize,
    pub orders: Vec<OrderBreakdown>,
}
