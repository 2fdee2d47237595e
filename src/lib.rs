#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod rules;
pub mod cards;
pub mod board;
pub mod state;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod eval;
    pub mod validate;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::cards::{Card, CATALOG};
pub use crate::engine::apply::apply_move;
pub use crate::engine::eval::{evaluate, game_stage, GameStage, WIN_SCORE};
pub use crate::engine::validate::{validate, MoveError};
pub use crate::rng::{rng_for_game, seeded, GameRng};
pub use crate::rules::{FirstTurn, Rules};
pub use crate::solver::{choose_move, Decision, Policy, SearchError, SearchLimits, Strategy};
pub use crate::state::{
    is_terminal, legal_moves, new_game, GameState, Move, Outcome, StateError, WinReason,
};
pub use crate::types::{CardId, Coord, Side};
