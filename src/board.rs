use serde::{Deserialize, Serialize};

use crate::types::{Coord, Side};

/// Number of piece slots: a master and four students per side.
pub const SLOTS: usize = 10;

pub const RED_MASTER: usize = 0;
pub const BLUE_MASTER: usize = 5;

/// Starting squares by slot.
pub const INITIAL_POSITIONS: [Coord; SLOTS] = [
    Coord::new(2, 0),
    Coord::new(0, 0),
    Coord::new(1, 0),
    Coord::new(3, 0),
    Coord::new(4, 0),
    Coord::new(2, 4),
    Coord::new(0, 4),
    Coord::new(1, 4),
    Coord::new(3, 4),
    Coord::new(4, 4),
];

/// Piece placement by slot. A `None` slot has been captured and stays captured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    positions: [Option<Coord>; SLOTS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            positions: INITIAL_POSITIONS.map(Some),
        }
    }
}

impl Board {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    #[inline]
    pub fn from_positions(positions: [Option<Coord>; SLOTS]) -> Self {
        Self { positions }
    }

    #[must_use]
    #[inline]
    pub fn positions(&self) -> &[Option<Coord>; SLOTS] {
        &self.positions
    }

    #[must_use]
    #[inline]
    pub fn get(&self, slot: usize) -> Option<Coord> {
        self.positions[slot]
    }

    /// Move a present piece. Moving a captured slot is a caller bug.
    #[inline]
    pub fn relocate(&mut self, slot: usize, to: Coord) {
        debug_assert!(self.positions[slot].is_some(), "slot {slot} is captured");
        self.positions[slot] = Some(to);
    }

    #[inline]
    pub fn capture(&mut self, slot: usize) {
        self.positions[slot] = None;
    }

    /// Slot of the piece standing on `c`, if any.
    #[must_use]
    #[inline]
    pub fn occupant(&self, c: Coord) -> Option<usize> {
        self.positions.iter().position(|p| *p == Some(c))
    }

    #[must_use]
    #[inline]
    pub fn side_at(&self, c: Coord) -> Option<Side> {
        self.occupant(c).map(slot_side)
    }

    /// Present pieces of `side` as (slot, square), master first.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (usize, Coord)> + '_ {
        side.slots().filter_map(move |slot| self.positions[slot].map(|c| (slot, c)))
    }

    #[must_use]
    #[inline]
    pub fn master(&self, side: Side) -> Option<Coord> {
        self.positions[side.master_slot()]
    }

    #[must_use]
    pub fn student_count(&self, side: Side) -> usize {
        side.slots()
            .skip(1)
            .filter(|&slot| self.positions[slot].is_some())
            .count()
    }
}

/// Owner of a piece slot.
#[must_use]
#[inline]
pub fn slot_side(slot: usize) -> Side {
    if slot < BLUE_MASTER {
        Side::Red
    } else {
        Side::Blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout() {
        let b = Board::new();
        assert_eq!(b.master(Side::Red), Some(Side::Red.temple()));
        assert_eq!(b.master(Side::Blue), Some(Side::Blue.temple()));
        assert_eq!(b.student_count(Side::Red), 4);
        assert_eq!(b.student_count(Side::Blue), 4);
        assert_eq!(b.side_at(Coord::new(4, 4)), Some(Side::Blue));
        assert_eq!(b.side_at(Coord::new(2, 2)), None);
    }

    #[test]
    fn capture_removes_piece() {
        let mut b = Board::new();
        b.capture(7);
        assert_eq!(b.occupant(Coord::new(1, 4)), None);
        assert_eq!(b.student_count(Side::Blue), 3);
        assert_eq!(b.pieces(Side::Blue).count(), 4);
    }
}
