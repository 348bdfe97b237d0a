use lines_of_action::board::layout::{from_diagram, Contents, INITIAL_PIECES};
use lines_of_action::Piece::{Black as BP, Empty as EMP, White as WP};
use lines_of_action::{Board, Direction, Move, Piece, Side, Square};

fn board(rows: [&str; 8], turn: Side) -> Board {
    Board::from_contents(&from_diagram(rows).unwrap(), turn)
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn opening_moves() {
    let board = Board::from_contents(&INITIAL_PIECES, Side::Black);
    assert!(board.is_legal(&Move::parse("b1-d3", &board).unwrap()));
    assert!(board.is_legal(&Move::parse("b1-b3", &board).unwrap()));
    assert!(board.is_legal(&Move::parse("b1-h1", &board).unwrap()));
    // Wrong distance along the file.
    assert!(!board.is_legal(&Move::parse("b1-b2", &board).unwrap()));
    // White piece while Black is to move.
    assert!(!board.is_legal(&Move::parse("a2-c2", &board).unwrap()));
    // Empty origin.
    assert!(!board.is_legal(&Move::parse("d4-d6", &board).unwrap()));
}

#[test]
fn capture_along_a_row() {
    let contents: Contents = [
        [EMP, EMP, BP, BP, BP, BP, BP, EMP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, BP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [EMP, BP, BP, BP, BP, BP, BP, EMP],
    ];
    let board = Board::from_contents(&contents, Side::White);
    let mv = Move::parse("a3-d3", &board).unwrap();
    assert!(mv.is_capture());
    assert_eq!(mv.replaced(), Piece::Black);
    assert!(board.is_legal(&mv));
}

#[test]
fn own_pieces_on_the_path_do_not_block() {
    let contents: Contents = [
        [EMP, EMP, BP, BP, BP, BP, BP, EMP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [EMP, EMP, EMP, WP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [EMP, BP, BP, BP, BP, BP, BP, EMP],
    ];
    let board = Board::from_contents(&contents, Side::Black);
    let jump = Move::parse("f1-a1", &board).unwrap();
    assert_eq!(board.line_count(jump.from(), jump.direction()), 5);
    assert!(!board.blocked(&jump));
    assert!(board.is_legal(&jump));

    let short = Move::parse("e1-a1", &board).unwrap();
    assert!(!board.is_legal(&short));
}

#[test]
fn opposing_piece_on_the_path_blocks() {
    let mut board = Board::new();
    board.set(3, 2, Piece::White);

    let b1 = sq("b1");
    // b1, c2 and h7 now share the diagonal.
    assert_eq!(board.line_count(b1, Direction::NE), 3);
    let mv = Move::along(&board, b1, 3, Direction::NE).unwrap();
    assert_eq!(mv.to(), sq("e4"));
    assert!(board.blocked(&mv));
    assert!(!board.is_legal(&mv));
}

#[test]
fn opposing_piece_on_the_destination_is_captured_not_blocking() {
    let board = board(
        [
            "--------",
            "--------",
            "--------",
            "--------",
            "---w----",
            "--------",
            "-b------",
            "--------",
        ],
        Side::Black,
    );
    let capture = Move::parse("b2-d4", &board).unwrap();
    assert_eq!(board.line_count(sq("b2"), Direction::NE), 2);
    assert!(!board.blocked(&capture));
    assert!(board.is_legal(&capture));

    // Stopping short of the line count is never allowed.
    let short = Move::parse("b2-c3", &board).unwrap();
    assert!(!board.is_legal(&short));
}

#[test]
fn landing_on_own_piece_is_illegal() {
    let board = board(
        [
            "--------",
            "--------",
            "--------",
            "--------",
            "--------",
            "--------",
            "-------w",
            "b-b-----",
        ],
        Side::Black,
    );
    let mv = Move::parse("a1-c1", &board).unwrap();
    assert_eq!(board.line_count(sq("a1"), Direction::E), 2);
    assert!(board.blocked(&mv));
    assert!(!board.is_legal(&mv));

    let back = Move::parse("c1-a1", &board).unwrap();
    assert!(!board.is_legal(&back));
}

#[test]
fn wrong_run_length_is_always_illegal() {
    let board = Board::new();
    for from in board.piece_squares(Side::Black) {
        for dir in Direction::ALL {
            let needed = board.line_count(from, dir);
            for length in 1..8u8 {
                if length == needed {
                    continue;
                }
                if let Some(mv) = Move::along(&board, from, length, dir) {
                    assert!(!board.is_legal(&mv), "{mv} should be illegal");
                }
            }
        }
    }
}

#[test]
fn stale_moves_are_rejected() {
    let mut board = Board::new();
    let mv = Move::parse("b1-d3", &board).unwrap();
    board.set(4, 3, Piece::White);
    assert!(!board.is_legal(&mv));
}

#[test]
fn capture_and_retract_restore_the_captured_piece() {
    let contents: Contents = [
        [EMP, EMP, BP, BP, BP, BP, BP, EMP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, BP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [WP, EMP, EMP, EMP, EMP, EMP, EMP, WP],
        [EMP, BP, BP, BP, BP, BP, BP, EMP],
    ];
    let mut board = Board::from_contents(&contents, Side::White);
    let before = board.clone();

    board.make_move(Move::parse("a3-d3", &board).unwrap());
    assert_eq!(board.get_str("d3"), Ok(Piece::White));
    assert_eq!(board.get_str("a3"), Ok(Piece::Empty));
    assert_eq!(board.piece_count(Piece::Black), 11);
    assert_eq!(board.turn(), Side::Black);

    board.retract();
    assert_eq!(board, before);
    assert_eq!(board.get_str("d3"), Ok(Piece::Black));
}
