use super::*;

fn generator() -> MoveGenerator {
    MoveGenerator::new().expect("attack tables build")
}

fn kings_only(white_king: usize, black_king: usize) -> Position {
    let mut pos = Position::empty();
    pos.place(KING, WHITE, white_king);
    pos.place(KING, BLACK, black_king);
    pos
}

fn count_from(moves: &[Action], from: usize) -> usize {
    moves.iter().filter(|mv| mv.source_square() == from).count()
}

#[test]
fn test_initial_position_has_twenty_moves() {
    let gen = generator();
    let pos = Position::initial();

    assert_eq!(gen.pseudo_legal_moves(&pos, WHITE).len(), 20);
    assert_eq!(gen.pseudo_legal_moves(&pos, BLACK).len(), 20);
    assert!(gen.pseudo_legal_captures(&pos, WHITE).is_empty());

    let double_pushes = gen
        .pseudo_legal_moves(&pos, WHITE)
        .into_iter()
        .filter(|mv| mv.is_double_push())
        .count();
    assert_eq!(double_pushes, 8);
}

#[test]
fn test_sliders_on_open_board() {
    let gen = generator();
    let mut pos = kings_only(0, 63);
    pos.place(ROOK, WHITE, 27);
    pos.place(QUEEN, WHITE, 45);

    let mut moves = Vec::new();
    gen.generate_rook_moves(&pos, WHITE, &mut moves, false);
    assert_eq!(moves.len(), 14);

    // f6 queen: blocked nowhere, but the black king on h8 is a capture target
    moves.clear();
    gen.generate_queen_moves(&pos, WHITE, &mut moves, false);
    let captures: Vec<_> = moves.iter().filter(|mv| mv.is_capture()).collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].captured_piece(), BLACK_KING);
    assert_eq!(captures[0].dest_square(), 63);
}

#[test]
fn test_sliders_stop_at_blockers() {
    let gen = generator();
    let mut pos = kings_only(4, 60);
    pos.place(ROOK, WHITE, 0);
    pos.place(PAWN, WHITE, 16);
    pos.place(KNIGHT, BLACK, 2);

    let mut moves = Vec::new();
    gen.generate_rook_moves(&pos, WHITE, &mut moves, false);
    // a2, b1 quiet and the knight on c1
    assert_eq!(moves.len(), 3);
    assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 1);

    moves.clear();
    gen.generate_rook_moves(&pos, WHITE, &mut moves, true);
    assert_eq!(moves, vec![Action::capture(WHITE_ROOK, 0, 2, BLACK_KNIGHT)]);
}

#[test]
fn test_knight_and_king_steps() {
    let gen = generator();
    let mut pos = kings_only(0, 63);
    pos.place(KNIGHT, WHITE, 27);
    pos.place(PAWN, BLACK, 44);

    let mut moves = Vec::new();
    gen.generate_knight_moves(&pos, WHITE, &mut moves, false);
    assert_eq!(moves.len(), 8);

    moves.clear();
    gen.generate_knight_moves(&pos, WHITE, &mut moves, true);
    assert_eq!(moves, vec![Action::capture(WHITE_KNIGHT, 27, 44, BLACK_PAWN)]);

    moves.clear();
    gen.generate_king_moves(&pos, WHITE, &mut moves, false);
    assert_eq!(moves.len(), 3);
}

#[test]
fn test_pawn_pushes_respect_blockers() {
    let gen = generator();
    let mut pos = kings_only(4, 60);
    pos.place(PAWN, WHITE, 8);
    pos.place(PAWN, WHITE, 9);
    pos.place(PAWN, WHITE, 10);
    pos.place(KNIGHT, BLACK, 24);
    pos.place(KNIGHT, BLACK, 17);

    let mut moves = Vec::new();
    gen.generate_pawn_moves(&pos, WHITE, &mut moves, false);

    // a2: single push only; b2: blocked; c2: single, double, and takes b3
    assert_eq!(count_from(&moves, 8), 2); // a3 and takes b3
    assert_eq!(count_from(&moves, 9), 0);
    assert_eq!(count_from(&moves, 10), 3);
    assert!(moves.contains(&Action::double_push(WHITE_PAWN, 10, 26)));
    assert!(!moves.iter().any(|mv| mv.source_square() == 8 && mv.is_double_push()));
}

#[test]
fn test_black_pawns_move_down() {
    let gen = generator();
    let mut pos = kings_only(4, 60);
    pos.place(PAWN, BLACK, 52);

    let mut moves = Vec::new();
    gen.generate_pawn_moves(&pos, BLACK, &mut moves, false);
    assert_eq!(
        moves,
        vec![
            Action::quiet(BLACK_PAWN, 52, 44),
            Action::double_push(BLACK_PAWN, 52, 36),
        ]
    );
}

#[test]
fn test_promotions_push_and_capture() {
    let gen = generator();
    let mut pos = kings_only(4, 47);
    pos.place(PAWN, WHITE, 48);
    pos.place(ROOK, BLACK, 57);

    let mut moves = Vec::new();
    gen.generate_pawn_moves(&pos, WHITE, &mut moves, false);
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|mv| mv.is_promotion()));
    assert_eq!(moves[0].dest_piece(), WHITE_QUEEN);
    assert_eq!(moves[3].dest_piece(), WHITE_KNIGHT);

    moves.clear();
    gen.generate_pawn_moves(&pos, WHITE, &mut moves, true);
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|mv| mv.captured_piece() == BLACK_ROOK && mv.dest_square() == 57));
}

#[test]
fn test_en_passant_after_double_push() {
    let gen = generator();
    let mut pos = kings_only(4, 60);
    pos.place(PAWN, WHITE, 36);
    pos.place(PAWN, BLACK, 51);

    let pos = pos.apply(Action::double_push(BLACK_PAWN, 51, 35));
    assert_eq!(pos.en_passant_file(), Some(3));

    let expected = Action::en_passant(WHITE_PAWN, 36, 43, BLACK_PAWN, 35);
    let moves = gen.legal_moves(&pos, WHITE);
    assert!(moves.contains(&expected));
    assert!(gen.legal_captures(&pos, WHITE).contains(&expected));

    let after = pos.apply(expected);
    assert_eq!(after.piece_at(35), None);
    assert_eq!(after.piece_at(43), Some(WHITE_PAWN));
    assert!(after.validate().is_ok());

    // The right lapses after any other move
    let later = pos
        .apply(Action::quiet(WHITE_KING, 4, 5))
        .apply(Action::quiet(BLACK_KING, 60, 61));
    assert!(!gen.legal_moves(&later, WHITE).iter().any(|mv| mv.dest_square() == 43));
}

#[test]
fn test_legal_filter_removes_pinned_moves() {
    let gen = generator();
    let mut pos = kings_only(4, 60);
    pos.place(BISHOP, WHITE, 12);
    pos.place(ROOK, BLACK, 52);

    // The e2 bishop is pinned to the king by the e7 rook
    let legal = gen.legal_moves(&pos, WHITE);
    assert!(legal.iter().all(|mv| mv.source_piece() != WHITE_BISHOP));
    assert!(gen.pseudo_legal_moves(&pos, WHITE).iter().any(|mv| mv.source_piece() == WHITE_BISHOP));
}
