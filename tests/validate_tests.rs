use onitama::{validate, Coord, GameState, Move, MoveError};

fn c(x: u8, y: u8) -> Coord {
    Coord::new(x, y)
}

#[test]
fn single_card_move_needs_no_choice() {
    // tiger, monkey | dragon, crab | mantis
    let state = GameState::with_hand([0, 1, 2, 3, 4], 0);
    let expected = Move {
        from: c(2, 0),
        to: c(2, 2),
        card: 0,
    };
    assert_eq!(validate(&state, c(2, 0), c(2, 2), None), Ok(expected));
    assert_eq!(validate(&state, c(2, 0), c(2, 2), Some("tiger")), Ok(expected));
    // Naming the other active card, which cannot make this jump.
    assert_eq!(
        validate(&state, c(2, 0), c(2, 2), Some("monkey")),
        Err(MoveError::MoveNotInHand)
    );
}

#[test]
fn blue_uses_mirrored_vectors() {
    let state = GameState::with_hand([1, 2, 0, 3, 4], 1);
    assert_eq!(
        validate(&state, c(2, 4), c(2, 2), None),
        Ok(Move {
            from: c(2, 4),
            to: c(2, 2),
            card: 0
        })
    );
    // Red's direction is not Blue's.
    assert_eq!(
        validate(&state, c(2, 4), c(2, 6), None),
        Err(MoveError::OutOfBounds)
    );
}

#[test]
fn error_taxonomy() {
    let state = GameState::with_hand([0, 1, 2, 3, 4], 0);
    assert_eq!(
        validate(&state, c(0, 0), c(5, 0), None),
        Err(MoveError::OutOfBounds)
    );
    assert_eq!(
        validate(&state, c(2, 4), c(2, 2), None),
        Err(MoveError::NotOwnPiece)
    );
    assert_eq!(
        validate(&state, c(2, 2), c(2, 3), None),
        Err(MoveError::NotOwnPiece)
    );
    assert_eq!(
        validate(&state, c(2, 0), c(2, 1), None),
        Err(MoveError::MoveNotInHand)
    );

    // boar, tiger | monkey, dragon | crab: boar steps sideways onto a friend.
    let state = GameState::with_hand([8, 0, 1, 2, 3], 0);
    assert_eq!(
        validate(&state, c(0, 0), c(1, 0), None),
        Err(MoveError::FriendlyCapture)
    );
}

#[test]
fn ambiguous_card_round_trip() {
    // monkey and mantis both hold (1,1) and (-1,1).
    let state = GameState::with_hand([1, 4, 2, 3, 0], 0);
    let err = validate(&state, c(2, 0), c(1, 1), None).unwrap_err();
    assert_eq!(err, MoveError::AmbiguousCard { options: [1, 4] });

    // An unusable name keeps the request ambiguous.
    assert_eq!(
        validate(&state, c(2, 0), c(1, 1), Some("tiger")),
        Err(MoveError::AmbiguousCard { options: [1, 4] })
    );

    let mv = validate(&state, c(2, 0), c(1, 1), Some("mantis")).expect("disambiguated");
    assert_eq!(mv.card, 4);
    let mv = validate(&state, c(2, 0), c(1, 1), Some("monkey")).expect("disambiguated");
    assert_eq!(mv.card, 1);
}

#[test]
fn errors_render_for_the_driver() {
    let msg = MoveError::FriendlyCapture.to_string();
    assert!(msg.contains("friendly"));
    let msg = MoveError::AmbiguousCard { options: [1, 4] }.to_string();
    assert!(msg.contains("either card"));
}
