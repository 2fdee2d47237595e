use serde::{Deserialize, Serialize};

use crate::state::GameState;
use crate::types::{Coord, Side};

/// Magnitude of a decided game; dominates every heuristic term.
pub const WIN_SCORE: i32 = 1000;

pub const STUDENT_VALUE: i32 = 50;

/// Indexed `[x][y]`.
pub const CENTER_PRIORITY: [[i32; 5]; 5] = [
    [-10, 0, 10, 0, -10],
    [0, 10, 20, 10, 0],
    [10, 20, 30, 20, 10],
    [0, 10, 20, 10, 0],
    [-10, 0, 10, 0, -10],
];

/// Master square values, written for Red (`[x][y]`); Blue looks up its rotated square.
pub const OPENING_MASTER: [[i32; 5]; 5] = [[0, 10, -20, -60, -100]; 5];

pub const MIDGAME_MASTER: [[i32; 5]; 5] = [[-20, 0, 0, -40, -80]; 5];

pub const ENDGAME_MASTER: [[i32; 5]; 5] = [
    [-100, -60, 20, 60, 40],
    [-100, -60, 20, 80, 100],
    [-100, -60, 20, 100, 100],
    [-100, -60, 20, 80, 100],
    [-100, -60, 20, 60, 40],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStage {
    Opening,
    Midgame,
    Endgame,
}

impl GameStage {
    #[inline]
    fn master_table(self) -> &'static [[i32; 5]; 5] {
        match self {
            GameStage::Opening => &OPENING_MASTER,
            GameStage::Midgame => &MIDGAME_MASTER,
            GameStage::Endgame => &ENDGAME_MASTER,
        }
    }
}

/// Stage from the smaller of the two student counts.
#[must_use]
pub fn game_stage(state: &GameState) -> GameStage {
    let fewest = state
        .board
        .student_count(Side::Red)
        .min(state.board.student_count(Side::Blue));
    if fewest >= 4 {
        GameStage::Opening
    } else if fewest >= 2 {
        GameStage::Midgame
    } else {
        GameStage::Endgame
    }
}

#[inline]
fn lookup(table: &[[i32; 5]; 5], c: Coord) -> i32 {
    table[usize::from(c.x)][usize::from(c.y)]
}

/// Static evaluation, positive when Red is better.
#[must_use]
pub fn evaluate(state: &GameState) -> i32 {
    if let Some(outcome) = state.is_terminal() {
        return outcome.winner.sign() * WIN_SCORE;
    }

    let mut score = 0;
    for side in [Side::Red, Side::Blue] {
        let master = side.master_slot();
        for (_, c) in state.board.pieces(side).filter(|&(slot, _)| slot != master) {
            score += side.sign() * (lookup(&CENTER_PRIORITY, c) + STUDENT_VALUE);
        }
    }

    let table = game_stage(state).master_table();
    if let Some(c) = state.board.master(Side::Red) {
        score += lookup(table, c);
    }
    if let Some(c) = state.board.master(Side::Blue) {
        score -= lookup(table, c.rotated());
    }
    score
}
