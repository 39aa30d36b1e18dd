use super::*;
use crate::position::CastleSide;
use crate::types::*;

const KNIGHT_SHUFFLE: [Action; 4] = [
    Action::quiet(WHITE_KNIGHT, 6, 21),
    Action::quiet(BLACK_KNIGHT, 62, 45),
    Action::quiet(WHITE_KNIGHT, 21, 6),
    Action::quiet(BLACK_KNIGHT, 45, 62),
];

#[test]
fn test_do_and_undo_restore_exactly() {
    let root = Position::initial();
    let mut game = Game::new(root, WHITE);
    assert_eq!(game.side_to_move(), WHITE);
    assert_eq!(game.undo_action(), None);

    let push = Action::double_push(WHITE_PAWN, 12, 28);
    game.do_action(push);
    assert_eq!(game.ply(), 1);
    assert_eq!(game.side_to_move(), BLACK);
    assert_eq!(game.position().en_passant_file(), Some(4));

    game.do_action(Action::double_push(BLACK_PAWN, 52, 36));
    let before_walk = *game.position();

    let king_walk = Action::quiet(WHITE_KING, 4, 12);
    game.do_action(king_walk);
    assert!(!game.position().has_any_castling_right(WHITE));
    assert_eq!(game.position().en_passant_file(), None);

    assert_eq!(game.undo_action(), Some(king_walk));
    assert_eq!(*game.position(), before_walk);
    assert!(game.position().has_any_castling_right(WHITE));
    assert_eq!(game.position().en_passant_file(), Some(4));

    game.undo_action();
    assert_eq!(game.undo_action(), Some(push));
    assert_eq!(*game.position(), root);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_knight_shuffle_repeats_three_times() {
    let mut game = Game::new(Position::initial(), WHITE);
    assert_eq!(game.repetition_count(), 1);

    for action in KNIGHT_SHUFFLE {
        game.do_action(action);
    }
    assert_eq!(game.repetition_count(), 2);
    assert!(!game.is_threefold_repetition());

    for action in &KNIGHT_SHUFFLE[..3] {
        game.do_action(*action);
    }
    assert!(!game.is_threefold_repetition());

    game.do_action(KNIGHT_SHUFFLE[3]);
    assert_eq!(game.repetition_count(), 3);
    assert!(game.is_threefold_repetition());

    game.undo_action();
    assert!(!game.is_threefold_repetition());
}

#[test]
fn test_pawn_move_cuts_the_repetition_window() {
    let mut game = Game::new(Position::initial(), WHITE);
    for action in KNIGHT_SHUFFLE {
        game.do_action(action);
    }
    game.do_action(Action::quiet(WHITE_PAWN, 8, 16));
    game.do_action(Action::quiet(BLACK_PAWN, 55, 47));

    for _ in 0..2 {
        for action in KNIGHT_SHUFFLE {
            game.do_action(action);
        }
    }
    // Two shuffles after the pawn moves: seen three times, none before them count
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(game.position().half_move_clock(), 8);
}

#[test]
fn test_same_placement_with_other_side_to_move_is_not_a_repeat() {
    let mut pos = Position::empty();
    pos.place(KING, WHITE, 0);
    pos.place(KING, BLACK, 63);
    pos.place(ROOK, WHITE, 16);
    for color in [WHITE, BLACK] {
        for side in CastleSide::BOTH {
            pos.revoke_castling(color, side);
        }
    }
    let mut game = Game::new(pos, WHITE);

    // A rook triangle on the third rank loses a tempo
    game.do_action(Action::quiet(WHITE_ROOK, 16, 17));
    game.do_action(Action::quiet(BLACK_KING, 63, 62));
    game.do_action(Action::quiet(WHITE_ROOK, 17, 18));
    game.do_action(Action::quiet(BLACK_KING, 62, 63));
    game.do_action(Action::quiet(WHITE_ROOK, 18, 16));

    assert!(game.position().same_placement(&game.history()[0]));
    assert_eq!(game.side_to_move(), BLACK);
    assert_eq!(game.repetition_count(), 1);
}
