use log::debug;
use rand::seq::SliceRandom;

use crate::engine::apply::apply_move;
use crate::engine::eval::evaluate;
use crate::rng::GameRng;
use crate::state::GameState;

use super::{root_moves, Decision, SearchError, Strategy};

/// Plays any legal move with equal probability. The reported score is the static
/// evaluation of the resulting position.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<Decision, SearchError> {
        let moves = root_moves(state)?;
        let mv = *moves.choose(rng).ok_or(SearchError::NoLegalMoves)?;
        let score = evaluate(&apply_move(state, mv));
        debug!("random: {} plays {mv}", state.side_to_move());
        Ok(Decision {
            mv,
            score,
            nodes: 1,
        })
    }
}
