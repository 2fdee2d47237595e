use std::fmt;

use serde::{Deserialize, Serialize};

/// Board edge length (5x5 board).
pub const BOARD_SIZE: u8 = 5;

/// Catalog index of a movement card.
pub type CardId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    #[must_use]
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Side to move on a given turn: even turns are Red, odd turns Blue.
    #[must_use]
    #[inline]
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            Side::Red
        } else {
            Side::Blue
        }
    }

    /// Card vectors are written from Red's point of view; Blue mirrors them.
    #[must_use]
    #[inline]
    pub fn multiplier(self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Blue => -1,
        }
    }

    /// Sign applied to Red-positive scores to view them from this side.
    #[must_use]
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Red => 1,
            Side::Blue => -1,
        }
    }

    /// First piece slot owned by this side (its master).
    #[must_use]
    #[inline]
    pub fn master_slot(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 5,
        }
    }

    /// Piece slots owned by this side, master first.
    #[must_use]
    #[inline]
    pub fn slots(self) -> std::ops::Range<usize> {
        let m = self.master_slot();
        m..m + 5
    }

    /// Square the side's master starts on.
    #[must_use]
    #[inline]
    pub fn temple(self) -> Coord {
        match self {
            Side::Red => Coord::new(2, 0),
            Side::Blue => Coord::new(2, 4),
        }
    }

    /// Index range of this side's active cards within the hand.
    #[must_use]
    #[inline]
    pub fn hand_range(self) -> std::ops::Range<usize> {
        match self {
            Side::Red => 0..2,
            Side::Blue => 2..4,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => f.write_str("RED"),
            Side::Blue => f.write_str("BLUE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[must_use]
    #[inline]
    pub fn on_board(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Offset by a signed displacement, None if the result leaves the board.
    #[must_use]
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Coord> {
        let x = u8::try_from(i16::from(self.x) + i16::from(dx)).ok()?;
        let y = u8::try_from(i16::from(self.y) + i16::from(dy)).ok()?;
        let c = Coord::new(x, y);
        c.on_board().then_some(c)
    }

    /// Point reflection through the board centre.
    #[must_use]
    #[inline]
    pub fn rotated(self) -> Coord {
        Coord::new(BOARD_SIZE - 1 - self.x, BOARD_SIZE - 1 - self.y)
    }
}

/// Files are lettered from Red's right: x=4 is 'a', x=0 is 'e'; ranks are y.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'e' - self.x.min(4));
        write!(f, "{file}{}", self.y)
    }
}
