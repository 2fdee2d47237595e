use log::{debug, trace};
use rayon::prelude::*;

use crate::engine::apply::apply_move;
use crate::engine::eval::{evaluate, WIN_SCORE};
use crate::rng::GameRng;
use crate::state::{GameState, Move};
use crate::types::Side;

use super::{pick_best, root_moves, Decision, SearchError, SearchLimits};

/// Score of a live position where the side to move cannot move: counted as a loss for it.
#[inline]
pub(crate) fn stuck_score(side: Side) -> i32 {
    -side.sign() * WIN_SCORE
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Conventions:
/// - Values are from Red's perspective: Red (even turn) maximises, Blue minimises.
/// - Depth 0 and decided games return the static evaluation.
/// - `nodes` counts successor states created below this node.
pub fn alpha_beta(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 || state.is_terminal().is_some() {
        return evaluate(state);
    }
    let moves = state.legal_moves();
    if moves.is_empty() {
        return stuck_score(state.side_to_move());
    }

    match state.side_to_move() {
        Side::Red => {
            let mut best = i32::MIN;
            for mv in moves {
                let child = apply_move(state, mv);
                *nodes += 1;
                best = best.max(alpha_beta(&child, depth - 1, alpha, beta, nodes));
                if best >= beta {
                    break;
                }
                alpha = alpha.max(best);
            }
            best
        }
        Side::Blue => {
            let mut best = i32::MAX;
            for mv in moves {
                let child = apply_move(state, mv);
                *nodes += 1;
                best = best.min(alpha_beta(&child, depth - 1, alpha, beta, nodes));
                if best <= alpha {
                    break;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}

/// Plain minimax over the same tree as [`alpha_beta`], without pruning.
pub fn minimax(state: &GameState, depth: u8, nodes: &mut u64) -> i32 {
    if depth == 0 || state.is_terminal().is_some() {
        return evaluate(state);
    }
    let side = state.side_to_move();
    let moves = state.legal_moves();
    if moves.is_empty() {
        return stuck_score(side);
    }
    let mut best = match side {
        Side::Red => i32::MIN,
        Side::Blue => i32::MAX,
    };
    for mv in moves {
        *nodes += 1;
        let v = minimax(&apply_move(state, mv), depth - 1, nodes);
        best = match side {
            Side::Red => best.max(v),
            Side::Blue => best.min(v),
        };
    }
    best
}

/// Exact value of one root move: full window, no bounds shared with siblings.
fn score_root_move(state: &GameState, mv: Move, depth: u8) -> (Move, i32, u64) {
    let child = apply_move(state, mv);
    let mut nodes = 1u64;
    let value = alpha_beta(&child, depth - 1, i32::MIN, i32::MAX, &mut nodes);
    trace!("root {mv}: {value} ({nodes} nodes)");
    (mv, value, nodes)
}

/// Search every root move to `limits.depth` plies and pick uniformly among the best.
///
/// # Errors
///
/// As [`Strategy::choose`](super::Strategy::choose).
pub fn search_root(
    state: &GameState,
    limits: SearchLimits,
    rng: &mut GameRng,
) -> Result<Decision, SearchError> {
    let moves = root_moves(state)?;
    let depth = limits.depth.max(1);

    let results: Vec<(Move, i32, u64)> = if limits.parallel_root {
        moves
            .par_iter()
            .map(|&mv| score_root_move(state, mv, depth))
            .collect()
    } else {
        moves
            .iter()
            .map(|&mv| score_root_move(state, mv, depth))
            .collect()
    };

    let nodes: u64 = results.iter().map(|r| r.2).sum();
    let scored: Vec<(Move, i32)> = results.iter().map(|&(mv, v, _)| (mv, v)).collect();
    let values = scored.iter().map(|&(_, v)| v);
    let best = match state.side_to_move() {
        Side::Red => values.max(),
        Side::Blue => values.min(),
    }
    .ok_or(SearchError::NoLegalMoves)?;

    let (mv, score) = pick_best(&scored, best, rng)?;
    debug!(
        "alpha-beta depth {depth}: {} plays {mv}, score {score}, {nodes} nodes",
        state.side_to_move()
    );
    Ok(Decision { mv, score, nodes })
}
