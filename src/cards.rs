use serde::Serialize;

use crate::types::{CardId, Side};

/// Number of cards in the catalog.
pub const CATALOG_SIZE: usize = 16;

/// A movement card. Vectors are written for Red: +y is forward, +x is Red's left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: CardId,
    pub name: &'static str,
    /// Colour printed on the card; decides the first player under the default rules.
    pub stamp: Side,
    pub moves: &'static [(i8, i8)],
}

impl Card {
    #[must_use]
    #[inline]
    pub fn has_move(&self, delta: (i8, i8)) -> bool {
        self.moves.contains(&delta)
    }
}

const fn card(id: CardId, name: &'static str, stamp: Side, moves: &'static [(i8, i8)]) -> Card {
    Card {
        id,
        name,
        stamp,
        moves,
    }
}

pub static CATALOG: [Card; CATALOG_SIZE] = [
    card(0, "tiger", Side::Blue, &[(0, 2), (0, -1)]),
    card(1, "monkey", Side::Blue, &[(1, 1), (-1, 1), (-1, -1), (1, -1)]),
    card(2, "dragon", Side::Red, &[(2, 1), (-2, 1), (-1, -1), (1, -1)]),
    card(3, "crab", Side::Blue, &[(2, 0), (-2, 0), (0, 1)]),
    card(4, "mantis", Side::Red, &[(1, 1), (-1, 1), (0, -1)]),
    card(5, "frog", Side::Red, &[(-2, 0), (-1, 1), (1, -1)]),
    card(6, "elephant", Side::Red, &[(-1, 0), (-1, 1), (1, 1), (1, 0)]),
    card(7, "rooster", Side::Red, &[(-1, 0), (-1, -1), (1, 1), (1, 0)]),
    card(8, "boar", Side::Red, &[(-1, 0), (0, 1), (1, 0)]),
    card(9, "ox", Side::Blue, &[(1, 0), (0, -1), (0, 1)]),
    card(10, "crane", Side::Blue, &[(1, -1), (-1, -1), (0, 1)]),
    card(11, "eel", Side::Blue, &[(-1, 1), (-1, -1), (1, 0)]),
    card(12, "horse", Side::Red, &[(-1, 0), (0, -1), (0, 1)]),
    card(13, "cobra", Side::Red, &[(1, 1), (1, -1), (-1, 0)]),
    card(14, "goose", Side::Blue, &[(-1, 0), (-1, 1), (1, -1), (1, 0)]),
    card(15, "rabbit", Side::Blue, &[(2, 0), (1, 1), (-1, -1)]),
];

#[must_use]
#[inline]
pub fn get(id: CardId) -> Option<&'static Card> {
    CATALOG.get(usize::from(id))
}

/// Catalog entry for an id already known to be valid (hand contents always are).
#[must_use]
#[inline]
pub fn card_by_id(id: CardId) -> &'static Card {
    &CATALOG[usize::from(id)]
}

/// Case-sensitive lookup by card name.
#[must_use]
pub fn id_by_name(name: &str) -> Option<CardId> {
    CATALOG.iter().find(|c| c.name == name).map(|c| c.id)
}
