use thiserror::Error;

use crate::cards::card_by_id;
use crate::state::{GameState, Move};
use crate::types::{CardId, Coord};

/// Why a requested move was refused. All variants are recoverable: the caller asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinates are not on the board")]
    OutOfBounds,
    #[error("coordinates do not specify a friendly piece")]
    NotOwnPiece,
    #[error("move is not on either card in hand")]
    MoveNotInHand,
    #[error("move cannot capture a friendly piece")]
    FriendlyCapture,
    /// Both active cards allow the move; resubmit naming one of `options`.
    #[error("move is possible with either card {options:?}; name the desired card")]
    AmbiguousCard { options: [CardId; 2] },
}

/// Card-space displacement for a step by the side with movement multiplier `m`.
/// Inverse of the generator's `to = (x - m*dx, y + m*dy)`. Both squares are on the board.
#[inline]
#[allow(clippy::cast_possible_wrap)]
fn card_delta(from: Coord, to: Coord, m: i8) -> (i8, i8) {
    let dx = from.x as i8 - to.x as i8;
    let dy = to.y as i8 - from.y as i8;
    (m * dx, m * dy)
}

/// Turn raw coordinates (and, when needed, a card name) into a concrete move for the side to
/// move.
///
/// # Errors
///
/// Returns the first [`MoveError`] the request runs into, checked in declaration order.
/// `AmbiguousCard` means the call should be repeated with one of the two card names.
pub fn validate(
    state: &GameState,
    from: Coord,
    to: Coord,
    card_choice: Option<&str>,
) -> Result<Move, MoveError> {
    if !from.on_board() || !to.on_board() {
        return Err(MoveError::OutOfBounds);
    }
    let side = state.side_to_move();
    if state.board.side_at(from) != Some(side) {
        return Err(MoveError::NotOwnPiece);
    }

    let delta = card_delta(from, to, side.multiplier());
    let active = state.active_cards();
    let matching: Vec<CardId> = active
        .iter()
        .copied()
        .filter(|&id| card_by_id(id).has_move(delta))
        .collect();
    if matching.is_empty() {
        return Err(MoveError::MoveNotInHand);
    }

    if state.board.side_at(to) == Some(side) {
        return Err(MoveError::FriendlyCapture);
    }

    let chosen = card_choice.and_then(|name| {
        matching
            .iter()
            .copied()
            .find(|&id| card_by_id(id).name == name)
    });
    let card = match (chosen, matching.as_slice()) {
        (Some(id), _) => id,
        (None, [only]) if card_choice.is_none() => *only,
        (None, [_]) => return Err(MoveError::MoveNotInHand),
        _ => return Err(MoveError::AmbiguousCard { options: active }),
    };
    Ok(Move { from, to, card })
}
