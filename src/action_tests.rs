use super::*;
use crate::types::*;

#[test]
fn test_quiet_fields() {
    let mv = Action::quiet(WHITE_KNIGHT, 6, 21);
    assert_eq!(mv.source_piece(), WHITE_KNIGHT);
    assert_eq!(mv.source_square(), 6);
    assert_eq!(mv.dest_piece(), WHITE_KNIGHT);
    assert_eq!(mv.dest_square(), 21);
    assert!(!mv.is_capture());
    assert!(!mv.is_castle());
    assert!(!mv.is_promotion());
    assert_eq!(mv.en_passant_encoding(), 0);
    assert_eq!(mv.to_coordinate(), "g1f3");
}

#[test]
fn test_bit_layout_is_fixed() {
    // Source piece 4 bits at 0, source square 6 bits at 4, and so on.
    let mv = Action::capture(BLACK_QUEEN, 0b111111, 1, WHITE_ROOK);
    let bits = mv.bits();
    assert_eq!(bits & 0xF, BLACK_QUEEN as u64);
    assert_eq!((bits >> 4) & 0x3F, 63);
    assert_eq!((bits >> 10) & 0xF, BLACK_QUEEN as u64);
    assert_eq!((bits >> 14) & 0x3F, 1);
    assert_eq!((bits >> 20) & 0xF, WHITE_ROOK as u64);
    assert_eq!((bits >> 24) & 0x3F, 1);
    assert_eq!(bits >> 30, 0);
}

#[test]
fn test_en_passant_capture_square_differs() {
    // White pawn e5xd6 en passant, black pawn stands on d5
    let mv = Action::en_passant(WHITE_PAWN, 36, 43, BLACK_PAWN, 35);
    assert!(mv.is_capture());
    assert_eq!(mv.dest_square(), 43);
    assert_eq!(mv.captured_square(), 35);
    assert_eq!(mv.captured_piece(), BLACK_PAWN);
}

#[test]
fn test_double_push_encoding() {
    let mv = Action::double_push(WHITE_PAWN, 12, 28);
    assert!(mv.is_double_push());
    // file e = 4, shifted and tagged
    assert_eq!(mv.en_passant_encoding(), (4 << 1) | 1);
    assert_eq!(mv.bits() >> 46 & 0xF, 9);
}

#[test]
fn test_promotion_changes_destination_piece() {
    let mv = Action::promotion(BLACK_PAWN, 9, 0, BLACK_KNIGHT, WHITE_ROOK);
    assert!(mv.is_promotion());
    assert!(mv.is_capture());
    assert_eq!(mv.dest_piece(), BLACK_KNIGHT);
    assert_eq!(mv.color(), BLACK);
    assert_eq!(mv.to_coordinate(), "b2a1n");

    let push = Action::promotion(WHITE_PAWN, 52, 60, WHITE_QUEEN, NO_PIECE);
    assert!(!push.is_capture());
    assert_eq!(push.captured_square(), 0);
}

#[test]
fn test_castle_fields() {
    let mv = Action::castle(WHITE_KING, 4, 6, WHITE_ROOK, 7, 5);
    assert!(mv.is_castle());
    assert_eq!(mv.rook_piece(), WHITE_ROOK);
    assert_eq!(mv.rook_source(), 7);
    assert_eq!(mv.rook_dest(), 5);
}

#[test]
fn test_priority_tag_round_trip() {
    let mv = Action::capture(WHITE_BISHOP, 2, 29, BLACK_QUEEN);
    let tagged = mv.with_priority(37);
    assert_ne!(tagged, mv);
    assert_eq!(tagged.priority(), 37);
    assert_eq!(tagged.strip_priority(), mv);
    assert_eq!(tagged.source_square(), 2);

    // Tags sort the words by priority first
    let low = Action::quiet(WHITE_KING, 63, 62).with_priority(1);
    assert!(tagged > low);

    assert_eq!(mv.with_priority(u64::MAX).priority(), MAX_PRIORITY);
}

#[test]
fn test_none() {
    assert!(Action::NONE.is_none());
    assert!(Action::NONE.with_priority(5).is_none());
    assert_eq!(Action::NONE.to_string(), "0000");
}
