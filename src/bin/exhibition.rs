use std::time::Instant;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use onitama::{
    apply_move, choose_move, evaluate, rng_for_game, FirstTurn, GameState, Policy, Rules,
    SearchLimits, Side,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyOpt {
    Random,
    OnePly,
    AlphaBeta,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstTurnOpt {
    /// Colour stamped on the spare card
    Stamp,
    Random,
    Red,
    Blue,
}

#[derive(Debug, Parser)]
#[command(name = "exhibition", about = "Onitama bot-vs-bot exhibition match")]
struct Args {
    /// Policy driving RED
    #[arg(long, value_enum, default_value_t = PolicyOpt::AlphaBeta)]
    red: PolicyOpt,

    /// Policy driving BLUE
    #[arg(long, value_enum, default_value_t = PolicyOpt::AlphaBeta)]
    blue: PolicyOpt,

    /// Alpha-beta search depth in plies
    #[arg(long, default_value_t = onitama::solver::DEFAULT_DEPTH)]
    depth: u8,

    /// Search root moves in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Seed for the deal and tie-breaks (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Who opens the game
    #[arg(long, value_enum, default_value_t = FirstTurnOpt::Stamp)]
    first_turn: FirstTurnOpt,

    /// Stop after this many plies without a winner
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Do not print the board after every move
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn to_policy(opt: PolicyOpt, limits: SearchLimits) -> Policy {
    match opt {
        PolicyOpt::Random => Policy::Random,
        PolicyOpt::OnePly => Policy::OnePly,
        PolicyOpt::AlphaBeta => Policy::AlphaBeta(limits),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let first_turn = match args.first_turn {
        FirstTurnOpt::Stamp => FirstTurn::SpareStamp,
        FirstTurnOpt::Random => FirstTurn::Random,
        FirstTurnOpt::Red => FirstTurn::Fixed(Side::Red),
        FirstTurnOpt::Blue => FirstTurn::Fixed(Side::Blue),
    };
    let limits = SearchLimits {
        depth: args.depth,
        parallel_root: args.parallel,
    };
    let red = to_policy(args.red, limits);
    let blue = to_policy(args.blue, limits);

    let mut state = GameState::deal(&mut rng_for_game(seed, 0), Rules::new(first_turn));
    let mut rng = rng_for_game(seed, 1);
    info!(
        "[exhibition] seed {seed}: RED={} BLUE={} depth={} first={}",
        red.name(),
        blue.name(),
        args.depth,
        state.side_to_move()
    );

    let pb = ProgressBar::new(u64::from(args.max_plies));
    pb.set_style(ProgressStyle::with_template(
        "{spinner} ply {pos}/{len} {wide_msg}",
    )?);
    if !args.quiet {
        pb.println(format!("{state}\n"));
    }

    let mut total_nodes = 0u64;
    let mut plies = 0u32;
    while state.is_terminal().is_none() && plies < args.max_plies {
        let side = state.side_to_move();
        let policy = match side {
            Side::Red => red,
            Side::Blue => blue,
        };
        let started = Instant::now();
        let decision = choose_move(&state, policy, &mut rng)?;
        total_nodes += decision.nodes;
        pb.set_message(format!("{side} {}", decision.mv));
        pb.inc(1);
        info!(
            "{side} ({}) plays {} after {:.2?}: score {}, {} nodes",
            policy.name(),
            decision.mv,
            started.elapsed(),
            decision.score,
            decision.nodes
        );

        state = apply_move(&state, decision.mv);
        plies += 1;
        if !args.quiet {
            pb.println(format!("{state}\neval = {}\n", evaluate(&state)));
        }
    }
    pb.finish_and_clear();

    match state.is_terminal() {
        Some(outcome) => println!("[exhibition] {outcome} after {plies} plies"),
        None => println!("[exhibition] no winner after {plies} plies"),
    }
    println!("[exhibition] {total_nodes} states expanded");
    Ok(())
}
