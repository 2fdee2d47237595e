use serde::{Deserialize, Serialize};

use crate::types::Side;

/// How the side that opens the game is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstTurn {
    /// The side whose colour is stamped on the spare card moves first.
    SpareStamp,
    /// Coin flip from the game RNG.
    Random,
    Fixed(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    pub first_turn: FirstTurn,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            first_turn: FirstTurn::SpareStamp,
        }
    }
}

impl Rules {
    #[must_use]
    #[inline]
    pub const fn new(first_turn: FirstTurn) -> Self {
        Self { first_turn }
    }

    /// Rules where `side` always opens; handy for reproducible setups.
    #[must_use]
    #[inline]
    pub const fn starting(side: Side) -> Self {
        Self {
            first_turn: FirstTurn::Fixed(side),
        }
    }
}
