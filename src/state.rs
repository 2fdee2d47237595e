use std::fmt;

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BLUE_MASTER, RED_MASTER, SLOTS};
use crate::cards::{self, card_by_id, CATALOG, CATALOG_SIZE};
use crate::rng::{seeded, GameRng};
use crate::rules::{FirstTurn, Rules};
use crate::types::{CardId, Coord, Side};

/// Cards in play: two per side plus the spare.
pub const HAND_SIZE: usize = 5;
/// Hand index of the face-up spare card.
pub const SPARE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub card: CardId,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ({})", self.from, self.to, card_by_id(self.card).name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WinReason {
    /// The winner's master stands on the opponent's temple.
    ReachedOppositeTemple,
    /// The loser's master was captured.
    MasterCaptured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    pub reason: WinReason,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let way = match self.reason {
            WinReason::ReachedOppositeTemple => "reaching the opposite temple",
            WinReason::MasterCaptured => "capturing the master",
        };
        write!(f, "{} wins by {way}", self.winner)
    }
}

/// Problems with a state supplied from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("card id {0} is not in the catalog")]
    UnknownCard(CardId),
    #[error("card id {0} appears more than once in the hand")]
    DuplicateCard(CardId),
    #[error("slot {slot} is off the board at ({x}, {y})")]
    OffBoard { slot: usize, x: u8, y: u8 },
    #[error("slots {first} and {second} share a square")]
    Overlap { first: usize, second: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub turn: u32,
    pub board: Board,
    /// `[red, red, blue, blue, spare]`
    pub hand: [CardId; HAND_SIZE],
}

impl GameState {
    /// Build a state from parts.
    ///
    /// # Panics
    ///
    /// If the hand is not five distinct catalog ids. States from outside the engine go
    /// through [`GameState::check`] instead.
    #[must_use]
    pub fn new(turn: u32, board: Board, hand: [CardId; HAND_SIZE]) -> Self {
        if let Err(e) = check_hand(&hand) {
            panic!("invalid hand {hand:?}: {e}");
        }
        Self { turn, board, hand }
    }

    /// Initial layout with the given hand and turn.
    #[must_use]
    #[inline]
    pub fn with_hand(hand: [CardId; HAND_SIZE], turn: u32) -> Self {
        Self::new(turn, Board::new(), hand)
    }

    /// Deal a fresh game from an RNG.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R, rules: Rules) -> Self {
        let picked = index::sample(rng, CATALOG_SIZE, HAND_SIZE);
        let mut hand = [0; HAND_SIZE];
        for (slot, i) in hand.iter_mut().zip(picked.iter()) {
            *slot = CATALOG[i].id;
        }
        let opener = match rules.first_turn {
            FirstTurn::SpareStamp => card_by_id(hand[SPARE]).stamp,
            FirstTurn::Random => {
                if rng.gen_bool(0.5) {
                    Side::Red
                } else {
                    Side::Blue
                }
            }
            FirstTurn::Fixed(side) => side,
        };
        let turn = match opener {
            Side::Red => 0,
            Side::Blue => 1,
        };
        Self::new(turn, Board::new(), hand)
    }

    #[must_use]
    #[inline]
    pub fn side_to_move(&self) -> Side {
        Side::for_turn(self.turn)
    }

    /// The two cards `side` may play with.
    #[must_use]
    #[inline]
    pub fn cards_of(&self, side: Side) -> [CardId; 2] {
        let r = side.hand_range();
        [self.hand[r.start], self.hand[r.start + 1]]
    }

    #[must_use]
    #[inline]
    pub fn active_cards(&self) -> [CardId; 2] {
        self.cards_of(self.side_to_move())
    }

    #[must_use]
    #[inline]
    pub fn spare(&self) -> CardId {
        self.hand[SPARE]
    }

    /// Returns legal moves for the side to move, in generation order:
    /// piece slot ascending, then active card in hand order, then card vector order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let side = self.side_to_move();
        let m = side.multiplier();
        let mut moves = Vec::with_capacity(24);
        for (_, from) in self.board.pieces(side) {
            for card in self.cards_of(side) {
                for &(dx, dy) in card_by_id(card).moves {
                    let Some(to) = from.offset(-m * dx, m * dy) else { continue };
                    if self.board.side_at(to) == Some(side) {
                        continue;
                    }
                    moves.push(Move { from, to, card });
                }
            }
        }
        moves
    }

    /// Winner, if the game is over. Temple arrivals are checked before captures.
    #[must_use]
    pub fn is_terminal(&self) -> Option<Outcome> {
        let red = self.board.get(RED_MASTER);
        let blue = self.board.get(BLUE_MASTER);
        if red == Some(Side::Blue.temple()) {
            return Some(Outcome {
                winner: Side::Red,
                reason: WinReason::ReachedOppositeTemple,
            });
        }
        if blue == Some(Side::Red.temple()) {
            return Some(Outcome {
                winner: Side::Blue,
                reason: WinReason::ReachedOppositeTemple,
            });
        }
        if red.is_none() {
            return Some(Outcome {
                winner: Side::Blue,
                reason: WinReason::MasterCaptured,
            });
        }
        if blue.is_none() {
            return Some(Outcome {
                winner: Side::Red,
                reason: WinReason::MasterCaptured,
            });
        }
        None
    }

    /// The same position seen from the other chair: board rotated 180 degrees,
    /// colours swapped, hands swapped, and the other side to move.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let src = self.board.positions();
        let mut positions = [None; SLOTS];
        for (slot, p) in positions.iter_mut().enumerate() {
            *p = src[(slot + 5) % SLOTS].map(Coord::rotated);
        }
        let h = self.hand;
        Self {
            turn: self.turn.wrapping_add(1),
            board: Board::from_positions(positions),
            hand: [h[2], h[3], h[0], h[1], h[4]],
        }
    }

    /// Validate a state that did not come from `deal`/`apply_move`.
    ///
    /// # Errors
    ///
    /// The first [`StateError`] found: hand problems before board problems.
    pub fn check(&self) -> Result<(), StateError> {
        check_hand(&self.hand)?;
        let positions = self.board.positions();
        for (slot, p) in positions.iter().enumerate() {
            let Some(c) = p else { continue };
            if !c.on_board() {
                return Err(StateError::OffBoard {
                    slot,
                    x: c.x,
                    y: c.y,
                });
            }
            if let Some(second) = (slot + 1..SLOTS).find(|&o| positions[o] == Some(*c)) {
                return Err(StateError::Overlap {
                    first: slot,
                    second,
                });
            }
        }
        Ok(())
    }
}

fn check_hand(hand: &[CardId]) -> Result<(), StateError> {
    for (i, &id) in hand.iter().enumerate() {
        if cards::get(id).is_none() {
            return Err(StateError::UnknownCard(id));
        }
        if hand[..i].contains(&id) {
            return Err(StateError::DuplicateCard(id));
        }
    }
    Ok(())
}

/// Board drawn from Red's seat, followed by the cards in play.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..5u8).rev() {
            write!(f, "{y} ")?;
            for x in (0..5u8).rev() {
                let glyph = match self.board.occupant(Coord::new(x, y)) {
                    Some(RED_MASTER) => 'R',
                    Some(BLUE_MASTER) => 'B',
                    Some(s) if s < BLUE_MASTER => 'r',
                    Some(_) => 'b',
                    None => '.',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e")?;
        let names = self.hand.map(|id| card_by_id(id).name);
        writeln!(
            f,
            "RED: {} {} | BLUE: {} {} | spare: {}",
            names[0], names[1], names[2], names[3], names[4]
        )?;
        write!(f, "turn {} ({} to move)", self.turn, self.side_to_move())
    }
}

/// Deal a new game. Without a seed the deal comes from OS entropy.
#[must_use]
pub fn new_game(seed: Option<u64>, rules: Rules) -> GameState {
    let mut rng: GameRng = seeded(seed.unwrap_or_else(rand::random));
    GameState::deal(&mut rng, rules)
}

/// Re-export minimal surface for callers as free functions.
#[must_use]
#[inline]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}

#[must_use]
#[inline]
pub fn is_terminal(state: &GameState) -> Option<Outcome> {
    state.is_terminal()
}
