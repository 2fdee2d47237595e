use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;

use crate::rng::GameRng;
use crate::state::{GameState, Move, Outcome};

pub mod alphabeta;
pub mod one_ply;
pub mod random;

pub use alphabeta::{alpha_beta, minimax, search_root};
pub use one_ply::OnePlyStrategy;
pub use random::RandomStrategy;

/// Search depth (plies) used when none is given.
pub const DEFAULT_DEPTH: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchLimits {
    pub depth: u8,
    /// Search root moves on the rayon pool. Same result as the sequential root.
    pub parallel_root: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            parallel_root: false,
        }
    }
}

impl SearchLimits {
    #[must_use]
    #[inline]
    pub const fn depth(depth: u8) -> Self {
        Self {
            depth,
            parallel_root: false,
        }
    }
}

/// A chosen move with its score (positive favours Red) and the number of states expanded
/// while choosing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: i32,
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("side to move has no legal moves")]
    NoLegalMoves,
    #[error("game is already over: {0}")]
    GameOver(Outcome),
}

/// A move-selection policy.
pub trait Strategy {
    /// Pick a move for the side to move in `state`. `rng` breaks ties.
    ///
    /// # Errors
    ///
    /// [`SearchError::GameOver`] for a decided game, [`SearchError::NoLegalMoves`] when the
    /// side to move is stuck.
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<Decision, SearchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// Uniformly random legal move.
    Random,
    /// Best worst case over the opponent's immediate replies.
    OnePly,
    /// Fixed-depth minimax with alpha-beta pruning.
    AlphaBeta(SearchLimits),
}

impl Policy {
    #[must_use]
    #[inline]
    pub const fn alpha_beta(depth: u8) -> Self {
        Policy::AlphaBeta(SearchLimits::depth(depth))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Policy::Random => "random",
            Policy::OnePly => "one-ply",
            Policy::AlphaBeta(_) => "alpha-beta",
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::AlphaBeta(SearchLimits::default())
    }
}

impl Strategy for Policy {
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<Decision, SearchError> {
        match self {
            Policy::Random => RandomStrategy.choose(state, rng),
            Policy::OnePly => OnePlyStrategy.choose(state, rng),
            Policy::AlphaBeta(limits) => search_root(state, *limits, rng),
        }
    }
}

/// Pick a move for the side to move under `policy`.
///
/// # Errors
///
/// As [`Strategy::choose`].
#[inline]
pub fn choose_move(
    state: &GameState,
    policy: Policy,
    rng: &mut GameRng,
) -> Result<Decision, SearchError> {
    policy.choose(state, rng)
}

/// Legal moves at a search root, or the reason there is nothing to search.
pub(crate) fn root_moves(state: &GameState) -> Result<Vec<Move>, SearchError> {
    if let Some(outcome) = state.is_terminal() {
        return Err(SearchError::GameOver(outcome));
    }
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    Ok(moves)
}

/// Uniform tie-break among `(move, score)` pairs sharing the best score.
pub(crate) fn pick_best(
    scored: &[(Move, i32)],
    best: i32,
    rng: &mut GameRng,
) -> Result<(Move, i32), SearchError> {
    let tied: Vec<(Move, i32)> = scored.iter().copied().filter(|&(_, v)| v == best).collect();
    tied.choose(rng).copied().ok_or(SearchError::NoLegalMoves)
}
