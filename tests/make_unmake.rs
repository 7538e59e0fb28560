use damista::{Board, Move, Piece, Player, Square, START_DIAGRAM};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

fn sq(col: i8, row: i8) -> Square {
    Square::new(col, row)
}

fn assert_roundtrip_all(diagram: &str, turn: Player) {
    let mut board = Board::from_diagram(diagram).expect("valid diagram");
    let original = board.clone();
    let moves = board.generate_moves(turn, None);
    assert!(!moves.is_empty(), "no moves in {}", diagram);

    for mut mv in moves {
        board.make_move(&mut mv, turn);
        assert!(board.counters_consistent(), "counters drifted after {}", mv);
        board.unmake_move(&mv, turn);
        assert_eq!(board, original, "make/unmake of {} changed the board", mv);
    }
}

#[test]
fn roundtrip_steps_from_start() {
    assert_roundtrip_all(START_DIAGRAM, Player::Black);
    assert_roundtrip_all(START_DIAGRAM, Player::Red);
}

#[test]
fn roundtrip_captures_and_kings() {
    assert_roundtrip_all("8/8/8/...r..../..b.B.../.....R../8/8", Player::Red);
    assert_roundtrip_all("8/8/8/...r..../..b.B.../.....R../8/8", Player::Black);
    assert_roundtrip_all("8/..r...../...b..../8/8/8/8/8", Player::Black);
}

#[test]
fn step_promotion_and_undo() {
    let mut board = Board::from_diagram("8/8/8/8/8/8/..r...../8").unwrap();
    let mut mv = Move::new(sq(2, 6), sq(3, 7));
    board.make_move(&mut mv, Player::Red);

    assert!(mv.made_king);
    assert_eq!(board.piece_at(sq(3, 7)), Some(Piece::king(Player::Red)));
    assert_eq!(board.king_count(Player::Red), 1);

    board.unmake_move(&mv, Player::Red);
    assert_eq!(board.piece_at(sq(2, 6)), Some(Piece::man(Player::Red)));
    assert_eq!(board.king_count(Player::Red), 0);
}

#[test]
fn capture_with_promotion_and_undo() {
    let mut board = Board::from_diagram("8/..r...../...b..../8/8/8/8/8").unwrap();
    let original = board.clone();
    let mut mv = Move::new(sq(3, 2), sq(1, 0));
    board.make_move(&mut mv, Player::Black);

    assert!(mv.is_capture());
    assert!(mv.made_king);
    assert_eq!(mv.captured, Some(Piece::man(Player::Red)));
    assert_eq!(board.piece_count(Player::Red), 0);
    assert_eq!(board.king_count(Player::Black), 1);

    board.unmake_move(&mv, Player::Black);
    assert_eq!(board, original);
}

#[test]
fn existing_king_is_not_promoted_again() {
    let mut board = Board::from_diagram("8/...B..../8/8/8/8/8/8").unwrap();
    let mut mv = Move::new(sq(3, 1), sq(2, 0));
    board.make_move(&mut mv, Player::Black);
    assert!(!mv.made_king);
    assert_eq!(board.king_count(Player::Black), 1);
}

#[test]
fn capturing_a_king_updates_king_counter() {
    let mut board = Board::from_diagram("8/8/8/8/....R.../...b..../8/8").unwrap();
    let original = board.clone();
    let mut mv = Move::new(sq(3, 5), sq(5, 3));
    board.make_move(&mut mv, Player::Black);

    assert_eq!(mv.captured, Some(Piece::king(Player::Red)));
    assert_eq!(board.piece_count(Player::Red), 0);
    assert_eq!(board.king_count(Player::Red), 0);

    board.unmake_move(&mv, Player::Black);
    assert_eq!(board, original);
    assert_eq!(board.king_count(Player::Red), 1);
}

#[test]
fn random_playout_unwinds_to_start() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::new();
    let start = board.clone();
    let mut played: Vec<(Move, Player)> = Vec::new();
    let mut turn = Player::Black;
    let mut required = None;

    for _ in 0..120 {
        let moves = board.generate_moves(turn, required);
        let Some(&choice) = moves.choose(&mut rng) else {
            break;
        };
        let mut mv = choice;
        board.make_move(&mut mv, turn);
        assert!(board.counters_consistent());
        played.push((mv, turn));

        if mv.is_capture() && board.any_captures_for_piece(mv.destination) {
            required = Some(mv.destination);
        } else {
            required = None;
            turn = turn.opponent();
        }
    }

    for (mv, player) in played.iter().rev() {
        board.unmake_move(mv, *player);
    }
    assert_eq!(board, start);
}
