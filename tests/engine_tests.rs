use onitama::board::SLOTS;
use onitama::cards::card_by_id;
use onitama::solver::RandomStrategy;
use onitama::{
    apply_move, choose_move, is_terminal, legal_moves, seeded, validate, Board, Coord, GameState,
    Move, Policy, Side, Strategy, WinReason,
};

fn c(x: u8, y: u8) -> Coord {
    Coord::new(x, y)
}

/// Play random moves from a seeded deal, handing every visited state (and the move that
/// left it) to `visit`.
fn random_playout(
    seed: u64,
    max_plies: usize,
    mut visit: impl FnMut(&GameState, Move, &GameState),
) {
    let mut rng = seeded(seed);
    let mut state = GameState::deal(&mut rng, onitama::Rules::default());
    for _ in 0..max_plies {
        if is_terminal(&state).is_some() {
            break;
        }
        let Ok(d) = RandomStrategy.choose(&state, &mut rng) else { break };
        let next = apply_move(&state, d.mv);
        visit(&state, d.mv, &next);
        state = next;
    }
}

#[test]
fn legal_moves_ordering_initial() {
    // tiger, monkey | dragon, crab | mantis
    let state = GameState::with_hand([0, 1, 2, 3, 4], 0);
    let moves = legal_moves(&state);
    // 5 tiger jumps + 8 monkey diagonals
    assert_eq!(moves.len(), 13);

    // Master (slot 0) first, tiger before monkey
    assert_eq!(
        moves[0],
        Move {
            from: c(2, 0),
            to: c(2, 2),
            card: 0
        }
    );
    assert_eq!(moves[1].from, c(2, 0));
    assert_eq!(moves[1].card, 1);
    assert_eq!(moves[3].from, c(0, 0));
    assert!(moves.iter().all(|m| m.to.y > 0));
}

#[test]
fn blue_moves_are_mirrored() {
    // Blue holds tiger: the master jumps two rows toward Red.
    let state = GameState::with_hand([1, 2, 0, 3, 4], 1);
    let moves = legal_moves(&state);
    assert!(moves.contains(&Move {
        from: c(2, 4),
        to: c(2, 2),
        card: 0
    }));
    assert!(moves.iter().all(|m| m.to.y < 4));
}

#[test]
fn generator_commutes_with_mirroring() {
    for seed in 0..8u64 {
        random_playout(seed, 40, |s, _, _| {
            let mirrored: Vec<Move> = legal_moves(s)
                .into_iter()
                .map(|m| Move {
                    from: m.from.rotated(),
                    to: m.to.rotated(),
                    card: m.card,
                })
                .collect();
            assert_eq!(legal_moves(&s.mirrored()), mirrored);
        });
    }
}

#[test]
fn generated_moves_validate() {
    for seed in 0..8u64 {
        random_playout(seed, 40, |s, _, _| {
            let side = s.side_to_move();
            for mv in legal_moves(s) {
                assert_ne!(s.board.side_at(mv.to), Some(side), "friendly capture {mv}");
                let name = card_by_id(mv.card).name;
                assert_eq!(validate(s, mv.from, mv.to, Some(name)), Ok(mv));
            }
        });
    }
}

#[test]
fn capture_is_monotone() {
    for seed in 0..16u64 {
        random_playout(seed, 120, |before, _, after| {
            for slot in 0..SLOTS {
                if before.board.get(slot).is_none() {
                    assert!(after.board.get(slot).is_none(), "slot {slot} came back");
                }
            }
        });
    }
}

#[test]
fn hand_rotates_through_spare() {
    for seed in 0..16u64 {
        random_playout(seed, 120, |before, mv, after| {
            let used = before
                .hand
                .iter()
                .position(|&id| id == mv.card)
                .expect("card in hand");
            assert!(before.side_to_move().hand_range().contains(&used));
            assert_eq!(after.hand[4], mv.card);
            assert_eq!(after.hand[used], before.hand[4]);

            let mut ids = after.hand.to_vec();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 5);
            assert_eq!(after.turn, before.turn + 1);
        });
    }
}

#[test]
fn siblings_do_not_share_state() {
    let state = GameState::with_hand([0, 1, 2, 3, 4], 0);
    let snapshot = state.clone();
    let moves = legal_moves(&state);
    let children: Vec<GameState> = moves.iter().map(|&m| apply_move(&state, m)).collect();

    assert_eq!(state, snapshot);
    for (mv, child) in moves.iter().zip(&children) {
        assert_eq!(child.board.side_at(mv.to), Some(Side::Red));
        assert_eq!(child.board.side_at(mv.from), None);
    }
    // Every child moved a different piece/target pair.
    assert_ne!(children[0].board, children[1].board);
}

#[test]
fn capturing_the_master_ends_the_game() {
    let mut positions = Board::new().positions().to_owned();
    positions[0] = Some(c(2, 2));
    positions[5] = Some(c(2, 3));
    // boar, ox | crane, eel | horse
    let state = GameState::new(0, Board::from_positions(positions), [8, 9, 10, 11, 12]);
    assert_eq!(is_terminal(&state), None);

    let ns = apply_move(
        &state,
        Move {
            from: c(2, 2),
            to: c(2, 3),
            card: 8,
        },
    );
    assert_eq!(ns.board.get(5), None);
    let outcome = is_terminal(&ns).expect("game over");
    assert_eq!(outcome.winner, Side::Red);
    assert_eq!(outcome.reason, WinReason::MasterCaptured);

    // Same position from the other chair: Blue captures Red's master.
    let mirrored = state.mirrored();
    let ns = apply_move(
        &mirrored,
        Move {
            from: c(2, 2),
            to: c(2, 1),
            card: 8,
        },
    );
    assert_eq!(ns.board.get(0), None);
    let outcome = is_terminal(&ns).expect("game over");
    assert_eq!(outcome.winner, Side::Blue);
    assert_eq!(outcome.reason, WinReason::MasterCaptured);
}

#[test]
fn student_capture_is_not_terminal() {
    let mut positions = Board::new().positions().to_owned();
    positions[1] = Some(c(1, 3));
    let state = GameState::new(0, Board::from_positions(positions), [8, 9, 10, 11, 12]);
    // boar (0,1) lifts the student from (1,3) onto Blue's student at (1,4)
    let ns = apply_move(
        &state,
        Move {
            from: c(1, 3),
            to: c(1, 4),
            card: 8,
        },
    );
    assert_eq!(ns.board.get(7), None);
    assert_eq!(ns.board.student_count(Side::Blue), 3);
    assert_eq!(is_terminal(&ns), None);
}

#[test]
fn temple_arrival_is_checked_before_captures() {
    let mut positions = [None; SLOTS];
    positions[0] = Some(c(2, 4));
    let state = GameState::new(1, Board::from_positions(positions), [0, 1, 2, 3, 4]);
    let outcome = is_terminal(&state).expect("decided");
    assert_eq!(outcome.winner, Side::Red);
    assert_eq!(outcome.reason, WinReason::ReachedOppositeTemple);
}

#[test]
fn stuck_side_has_no_moves() {
    // tiger and ox only slide along the column Red fills completely.
    let positions = [
        Some(c(0, 0)),
        Some(c(0, 1)),
        Some(c(0, 2)),
        Some(c(0, 3)),
        Some(c(0, 4)),
        Some(c(4, 2)),
        None,
        None,
        None,
        None,
    ];
    let state = GameState::new(0, Board::from_positions(positions), [0, 9, 1, 2, 3]);
    assert_eq!(is_terminal(&state), None);
    assert!(legal_moves(&state).is_empty());
}

#[test]
fn turn_counter_wraps_without_losing_parity() {
    // u32::MAX is an odd turn: Blue to move.
    let state = GameState::with_hand([0, 1, 2, 3, 4], u32::MAX);
    assert_eq!(state.check(), Ok(()));
    assert_eq!(state.side_to_move(), Side::Blue);

    let mv = legal_moves(&state)[0];
    let next = apply_move(&state, mv);
    assert_eq!(next.turn, 0);
    assert_eq!(next.side_to_move(), Side::Red);

    let mirrored = state.mirrored();
    assert_eq!(mirrored.turn, 0);
    assert_eq!(mirrored.side_to_move(), Side::Red);

    for policy in [Policy::Random, Policy::OnePly, Policy::alpha_beta(2)] {
        let d = choose_move(&state, policy, &mut seeded(9)).expect("move");
        assert!(legal_moves(&state).contains(&d.mv));
    }
}
