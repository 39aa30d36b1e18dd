//! Board builders shared by the integration tests

#![allow(dead_code)]

use pack_chess::types::*;
use pack_chess::{CastleSide, MoveGenerator, Position};

/// Build a position from eight rows, rank 8 first. Pieces use the usual
/// letters (upper case white); any other character is an empty square.
/// Castling rights survive only where king and rook stand on their home squares.
pub fn board(rows: [&str; 8]) -> Position {
    let mut pos = Position::empty();
    for (i, row) in rows.iter().enumerate() {
        let rank = 7 - i;
        assert_eq!(row.len(), 8, "row {row:?} must have eight squares");
        for (file, ch) in row.chars().enumerate() {
            let color = if ch.is_ascii_uppercase() { WHITE } else { BLACK };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PAWN,
                'n' => KNIGHT,
                'b' => BISHOP,
                'r' => ROOK,
                'q' => QUEEN,
                'k' => KING,
                _ => continue,
            };
            pos.place(kind, color, rank * 8 + file);
        }
    }
    pos.settle_castling_rights();
    pos
}

/// Same as `board`, with every castling right given up
pub fn board_without_castling(rows: [&str; 8]) -> Position {
    let mut pos = board(rows);
    for color in [WHITE, BLACK] {
        for side in CastleSide::BOTH {
            pos.revoke_castling(color, side);
        }
    }
    pos
}

pub fn generator() -> MoveGenerator {
    MoveGenerator::new().expect("attack tables build")
}
