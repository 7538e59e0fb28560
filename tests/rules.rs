use damista::{Board, Move, Piece, Player, Square};

fn sq(col: i8, row: i8) -> Square {
    Square::new(col, row)
}

#[test]
fn capture_is_mandatory_for_every_piece() {
    // Black d6 can jump the red man on e5; Black g6 could otherwise step freely
    let board = Board::from_diagram("8/8/8/8/....r.../...b..b./8/8").unwrap();

    assert!(board.any_captures_possible(Player::Black));
    assert!(board.is_legal_move(sq(3, 5), sq(5, 3), Player::Black, None));
    assert!(!board.is_legal_move(sq(3, 5), sq(2, 4), Player::Black, None));
    assert!(!board.is_legal_move(sq(6, 5), sq(7, 4), Player::Black, None));
    assert!(!board.is_legal_move(sq(6, 5), sq(5, 4), Player::Black, None));

    for mv in board.legal_steps(Player::Black) {
        assert!(
            !board.is_legal_move(mv.start, mv.destination, Player::Black, None),
            "step {} accepted while a capture exists",
            mv
        );
    }
    let moves = board.generate_moves(Player::Black, None);
    assert_eq!(moves.len(), 1);
    assert!(moves[0].is_capture());
}

#[test]
fn single_jump_scenario() {
    let mut board = Board::from_diagram("8/8/8/8/....r.../...b..../8/8").unwrap();
    assert!(board.capture_possible(sq(3, 5), sq(5, 3)));

    let mut mv = Move::new(sq(3, 5), sq(5, 3));
    board.make_move(&mut mv, Player::Black);

    assert_eq!(mv.captured, Some(Piece::man(Player::Red)));
    assert_eq!(board.piece_at(sq(4, 4)), None);
    assert_eq!(board.piece_at(sq(5, 3)), Some(Piece::man(Player::Black)));
    assert_eq!(board.piece_count(Player::Black), 1);
    assert_eq!(board.piece_count(Player::Red), 0);
    assert!(board.counters_consistent());
}

#[test]
fn jump_requires_empty_landing_and_enemy_midpoint() {
    // Landing square occupied
    let blocked = Board::from_diagram("8/8/8/.....r../....r.../...b..../8/8").unwrap();
    assert!(!blocked.capture_possible(sq(3, 5), sq(5, 3)));

    // Nothing to jump over
    let empty_mid = Board::from_diagram("8/8/8/8/8/...b..../8/8").unwrap();
    assert!(!empty_mid.capture_possible(sq(3, 5), sq(5, 3)));

    // Own piece in the middle
    let own = Board::from_diagram("8/8/8/8/....b.../...b..../8/8").unwrap();
    assert!(!own.capture_possible(sq(3, 5), sq(5, 3)));

    // Landing off the board
    let edge = Board::from_diagram("8/r7/.b6/8/8/8/8/8").unwrap();
    assert!(!edge.capture_possible(sq(1, 2), sq(-1, 0)));
    assert!(!edge.any_captures_possible(Player::Black));
}

#[test]
fn men_only_move_forward_kings_both_ways() {
    let board = Board::from_diagram("8/8/8/8/...b..../8/8/8").unwrap();
    assert!(board.step_possible(sq(3, 4), sq(2, 3)));
    assert!(!board.step_possible(sq(3, 4), sq(2, 5)));

    let king = Board::from_diagram("8/8/8/8/...B..../8/8/8").unwrap();
    let mut dests = king.legal_steps_for_piece(sq(3, 4));
    dests.sort();
    assert_eq!(dests, vec![sq(2, 3), sq(2, 5), sq(4, 3), sq(4, 5)]);

    // A red man jumps towards higher rows only
    let red = Board::from_diagram("8/8/8/...r..../..b.b.../8/8/8").unwrap();
    assert!(red.capture_possible(sq(3, 3), sq(1, 5)));
    assert!(red.capture_possible(sq(3, 3), sq(5, 5)));
    assert!(!red.capture_possible(sq(3, 3), sq(1, 1)));
}

#[test]
fn forced_chain_restricts_moves_to_the_capturing_piece() {
    let mut board = Board::from_diagram("8/8/8/8/....r.../8/..r...r./.b.....b").unwrap();

    let mut first = Move::new(sq(1, 7), sq(3, 5));
    assert!(board.is_legal_move(first.start, first.destination, Player::Black, None));
    board.make_move(&mut first, Player::Black);
    assert!(board.any_captures_for_piece(sq(3, 5)));

    let required = Some(sq(3, 5));
    // The other black piece still has a jump, but may not take it mid-chain
    assert!(board.capture_possible(sq(7, 7), sq(5, 5)));
    assert!(!board.is_legal_move(sq(7, 7), sq(5, 5), Player::Black, required));
    assert!(!board.is_legal_move(sq(7, 7), sq(6, 6), Player::Black, required));
    assert!(!board.is_legal_move(sq(3, 5), sq(2, 4), Player::Black, required));
    assert!(board.is_legal_move(sq(3, 5), sq(5, 3), Player::Black, required));

    let chain = board.generate_moves(Player::Black, required);
    assert_eq!(chain.len(), 1);
    assert_eq!(chain[0].start, sq(3, 5));
}

#[test]
fn out_of_bounds_and_wrong_side_are_illegal() {
    let board = Board::new();
    assert!(!board.is_legal_move(sq(1, 5), sq(-1, 4), Player::Black, None));
    assert!(!board.is_legal_move(sq(9, 9), sq(8, 8), Player::Black, None));
    // Red piece while Black is to move
    assert!(!board.is_legal_move(sq(0, 2), sq(1, 3), Player::Black, None));
    // Empty start square
    assert!(!board.is_legal_move(sq(0, 4), sq(1, 3), Player::Black, None));
    assert!(board.is_legal_move(sq(1, 5), sq(0, 4), Player::Black, None));
}

#[test]
fn no_moves_when_blocked() {
    // Red man on a7 faces the edge and a black man on b8 it cannot jump
    let stuck = Board::from_diagram("8/8/8/8/8/8/r7/.b6").unwrap();
    assert!(!stuck.any_moves_possible(Player::Red));
    assert!(stuck.any_moves_possible(Player::Black));
}
