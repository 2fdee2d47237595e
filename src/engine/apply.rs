use crate::state::{GameState, Move, SPARE};

/// Apply a move as a pure transform: returns the successor state and leaves `state` untouched.
///
/// Order of effects: capture on the destination, move the piece, swap the used card with the
/// spare, advance the turn. Legality is the caller's responsibility (`legal_moves` or
/// `validate`); it is only checked in debug builds.
#[must_use]
pub fn apply_move(state: &GameState, mv: Move) -> GameState {
    // Clone and mutate
    let mut ns = state.clone();
    play(&mut ns, mv);
    ns
}

/// In-place variant for callers that own a scratch copy.
pub fn play(state: &mut GameState, mv: Move) {
    let side = state.side_to_move();
    let mover = state.board.occupant(mv.from);
    debug_assert!(
        mover.is_some_and(|s| side.slots().contains(&s)),
        "no {side} piece on {}",
        mv.from
    );
    let used = state.hand.iter().position(|&c| c == mv.card);
    debug_assert!(
        used.is_some_and(|i| side.hand_range().contains(&i)),
        "card {} is not held by {side}",
        mv.card
    );

    if let Some(victim) = state.board.occupant(mv.to) {
        state.board.capture(victim);
    }
    if let Some(slot) = mover {
        state.board.relocate(slot, mv.to);
    }
    if let Some(i) = used {
        state.hand.swap(i, SPARE);
    }
    // u32::MAX is odd, so wrapping to 0 keeps the turn parity.
    state.turn = state.turn.wrapping_add(1);
}
