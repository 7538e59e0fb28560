use damista::perft::{perft, perft_divide};
use damista::{Board, Player};

#[test]
fn perft_regression_starting_pos() {
    let mut board = Board::new();
    let expected = [7u64, 49, 302];

    for (i, &nodes) in expected.iter().enumerate() {
        let depth = i as u32 + 1;
        let got = perft(&mut board, Player::Black, depth);
        assert_eq!(got, nodes, "perft mismatch at depth {}: got {} expected {}", depth, got, nodes);
    }
    assert_eq!(board, Board::new());
}

#[test]
fn perft_is_colour_symmetric_from_start() {
    let mut board = Board::new();
    for depth in 1..=3 {
        assert_eq!(
            perft(&mut board, Player::Black, depth),
            perft(&mut board, Player::Red, depth)
        );
    }
}

#[test]
fn divide_sums_to_perft() {
    let mut board = Board::new();
    let divide = perft_divide(&mut board, Player::Black, 3);
    assert_eq!(divide.len(), 7);
    let total: u64 = divide.iter().map(|(_, n)| n).sum();
    assert_eq!(total, perft(&mut board, Player::Black, 3));
}

#[test]
fn multi_jump_counts_as_one_turn() {
    // Red c3 must take d4 and then f6; that whole chain is a single node
    let mut board = Board::from_diagram("8/8/..r...../...b..../8/.....b../8/8").unwrap();
    assert_eq!(perft(&mut board, Player::Red, 1), 1);

    // Two distinct chain endings from the same first jump count separately
    let mut forked = Board::from_diagram("8/8/..r...../...b..../8/...b.b../8/8").unwrap();
    assert_eq!(perft(&mut forked, Player::Red, 1), 2);
}

#[test]
fn no_moves_means_no_nodes() {
    let mut board = Board::from_diagram("8/8/8/8/8/8/r7/.b6").unwrap();
    assert_eq!(perft(&mut board, Player::Red, 1), 0);
    assert_eq!(perft(&mut board, Player::Red, 0), 1);
}
