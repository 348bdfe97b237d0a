use lines_of_action::board::layout::{from_diagram, Contents, EMPTY, INITIAL_PIECES};
use lines_of_action::Piece::{Black as BP, Empty as EMP, White as WP};
use lines_of_action::{Board, Move, Piece, Side, Square};

const MIDGAME: Contents = [
    [EMP, EMP, EMP, EMP, EMP, EMP, EMP, EMP],
    [EMP, EMP, EMP, EMP, EMP, EMP, EMP, EMP],
    [EMP, EMP, EMP, EMP, EMP, EMP, EMP, EMP],
    [EMP, BP, WP, BP, BP, BP, EMP, EMP],
    [EMP, WP, BP, WP, WP, EMP, EMP, EMP],
    [EMP, EMP, BP, BP, WP, WP, EMP, WP],
    [EMP, WP, WP, BP, EMP, EMP, EMP, EMP],
    [EMP, EMP, EMP, BP, EMP, EMP, EMP, EMP],
];

fn notation(board: &Board) -> Vec<String> {
    board.legal_moves().map(|m| m.to_string()).collect()
}

#[test]
fn thirty_six_moves_from_the_start() {
    let board = Board::new();
    assert_eq!(board.legal_moves().count(), 36);
    assert!(board.has_legal_move());
}

#[test]
fn generation_order_is_origin_then_direction() {
    let board = Board::new();
    let moves = notation(&board);
    assert_eq!(
        &moves[..6],
        &["b1-b3", "b1-h1", "b1-d3", "b8-b6", "b8-h8", "b8-d6"]
    );

    let origins: Vec<_> = board.legal_moves().map(|m| m.from()).collect();
    assert!(origins.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn white_openings_start_on_the_a_file() {
    let board = Board::from_contents(&INITIAL_PIECES, Side::White);
    let moves = notation(&board);
    assert_eq!(moves.len(), 36);
    assert_eq!(&moves[..4], &["a2-a8", "a2-c2", "a2-c4", "a3-c3"]);
}

#[test]
fn enumerator_and_legality_agree() {
    for board in [
        Board::new(),
        Board::from_contents(&MIDGAME, Side::Black),
        Board::from_contents(&MIDGAME, Side::White),
    ] {
        let mut seen = 0;
        for mv in board.legal_moves() {
            assert!(board.is_legal(&mv), "{mv} generated but not legal");
            assert!(mv.moved().belongs_to(board.turn()));
            seen += 1;
        }
        assert!(seen > 0);
    }
}

#[test]
fn every_legal_move_is_generated() {
    let board = Board::from_contents(&MIDGAME, Side::Black);
    let generated: Vec<Move> = board.legal_moves().collect();
    for from in Square::all() {
        for to in Square::all() {
            let Ok(mv) = Move::between(&board, from, to) else {
                continue;
            };
            if board.is_legal(&mv) {
                assert!(generated.contains(&mv), "{mv} legal but not generated");
            }
        }
    }
}

#[test]
fn enumeration_is_restartable_and_read_only() {
    let board = Board::from_contents(&MIDGAME, Side::White);
    let snapshot = board.clone();

    let first: Vec<Move> = board.legal_moves().collect();
    let mut partial = board.legal_moves();
    partial.next();
    partial.next();
    let second: Vec<Move> = board.legal_moves().collect();

    assert_eq!(first, second);
    assert_eq!(board, snapshot);
    assert_eq!(partial.count(), first.len() - 2);
}

#[test]
fn exhausted_enumerator_stays_empty() {
    let board = Board::new();
    let mut moves = board.legal_moves();
    for _ in 0..36 {
        assert!(moves.next().is_some());
    }
    assert_eq!(moves.next(), None);
    assert_eq!(moves.next(), None);
}

#[test]
fn side_without_pieces_has_no_moves() {
    let mut board = Board::from_contents(&EMPTY, Side::Black);
    board.set(1, 1, Piece::White);
    board.set(8, 8, Piece::White);
    assert!(!board.has_legal_move());
    assert_eq!(board.legal_moves().next(), None);
}

#[test]
fn boxed_in_piece_has_no_moves() {
    // The lone black piece on a1 must move 2 along every line, and every such landing square
    // is behind a white piece.
    let contents = from_diagram([
        "--------",
        "--------",
        "--------",
        "--------",
        "--------",
        "--------",
        "ww------",
        "bw------",
    ])
    .unwrap();
    let board = Board::from_contents(&contents, Side::Black);
    assert!(!board.has_legal_move());

    let white = Board::from_contents(&contents, Side::White);
    assert!(white.has_legal_move());
}

#[test]
fn make_and_retract_every_move_restores_position() {
    let mut board = Board::from_contents(&MIDGAME, Side::Black);
    let snapshot = board.clone();
    let moves: Vec<Move> = board.legal_moves().collect();
    for mv in moves {
        board.make_move(mv);
        assert_eq!(board.turn(), Side::White);
        assert_eq!(board.moves_made(), 1);
        assert_eq!(board.retract(), mv);
        assert_eq!(board, snapshot);
    }
}
