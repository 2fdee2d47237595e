use log::{debug, trace};

use crate::engine::apply::apply_move;
use crate::engine::eval::evaluate;
use crate::rng::GameRng;
use crate::state::{GameState, Move};

use super::alphabeta::stuck_score;
use super::{pick_best, root_moves, Decision, SearchError, Strategy};

/// Shortsighted player: scores each move by the worst static evaluation the opponent can
/// reach with one reply, then plays one of the moves with the best such score.
///
/// This is a two-ply greedy lookahead, not a minimax search: the evaluation of the reply
/// positions is trusted as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePlyStrategy;

/// Worst case for the mover after `child`, in the mover's own sign.
fn worst_reply(child: &GameState, persp: i32, nodes: &mut u64) -> i32 {
    if child.is_terminal().is_some() {
        return persp * evaluate(child);
    }
    let replies = child.legal_moves();
    if replies.is_empty() {
        return persp * stuck_score(child.side_to_move());
    }
    let mut worst = i32::MAX;
    for reply in replies {
        *nodes += 1;
        worst = worst.min(persp * evaluate(&apply_move(child, reply)));
    }
    worst
}

impl Strategy for OnePlyStrategy {
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<Decision, SearchError> {
        let moves = root_moves(state)?;
        let side = state.side_to_move();
        let persp = side.sign();

        let mut nodes = 0u64;
        let mut scored: Vec<(Move, i32)> = Vec::with_capacity(moves.len());
        for mv in moves {
            let child = apply_move(state, mv);
            nodes += 1;
            let worst = worst_reply(&child, persp, &mut nodes);
            trace!("one-ply {mv}: worst case {worst}");
            scored.push((mv, worst));
        }

        let best = scored
            .iter()
            .map(|&(_, v)| v)
            .max()
            .ok_or(SearchError::NoLegalMoves)?;
        let (mv, own) = pick_best(&scored, best, rng)?;
        debug!("one-ply: {side} plays {mv}, worst case {own}, {nodes} nodes");
        Ok(Decision {
            mv,
            score: persp * own,
            nodes,
        })
    }
}
