use std::io::{self, Read};

use clap::{Parser, ValueEnum};
use log::{info, warn};
use onitama::{
    choose_move, evaluate, game_stage, legal_moves, seeded, Decision, GameStage, GameState,
    Outcome, Policy, SearchError, SearchLimits, Side,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyOpt {
    Random,
    OnePly,
    AlphaBeta,
}

#[derive(Debug, Parser)]
#[command(
    name = "analyze",
    about = "Read an Onitama state as JSON on stdin and print the engine's choice as JSON"
)]
struct Args {
    #[arg(long, value_enum, default_value_t = PolicyOpt::AlphaBeta)]
    policy: PolicyOpt,

    /// Alpha-beta search depth in plies
    #[arg(long, default_value_t = onitama::solver::DEFAULT_DEPTH)]
    depth: u8,

    /// Search root moves in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Seed for tie-breaks between equally scored moves
    #[arg(long, default_value_t = 0x00C0_FFEE)]
    seed: u64,
}

#[derive(Debug, Serialize)]
struct Report {
    side_to_move: Side,
    stage: GameStage,
    evaluation: i32,
    legal_moves: usize,
    outcome: Option<Outcome>,
    decision: Option<Decision>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let state: GameState =
        serde_json::from_str(&input).map_err(|e| format!("Failed to parse state JSON: {e}"))?;
    state.check().map_err(|e| format!("Invalid state: {e}"))?;

    let policy = match args.policy {
        PolicyOpt::Random => Policy::Random,
        PolicyOpt::OnePly => Policy::OnePly,
        PolicyOpt::AlphaBeta => Policy::AlphaBeta(SearchLimits {
            depth: args.depth,
            parallel_root: args.parallel,
        }),
    };
    info!("[analyze] {} to move, policy {}", state.side_to_move(), policy.name());

    let decision = match choose_move(&state, policy, &mut seeded(args.seed)) {
        Ok(d) => Some(d),
        Err(SearchError::GameOver(outcome)) => {
            info!("[analyze] {outcome}");
            None
        }
        Err(SearchError::NoLegalMoves) => {
            warn!("[analyze] {} has no legal moves", state.side_to_move());
            None
        }
    };

    let report = Report {
        side_to_move: state.side_to_move(),
        stage: game_stage(&state),
        evaluation: evaluate(&state),
        legal_moves: legal_moves(&state).len(),
        outcome: state.is_terminal(),
        decision,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
