//! PackChess - Castling Generator
//!
//! Castling is generated separately from the king steps because it depends on
//! rights, rook placement and check status. The king may not castle out of
//! check or through an attacked square. Landing in check is left to the
//! legality filter, which re-tests every generated action.

use crate::action::Action;
use crate::bitboard::square_bb;
use crate::movegen::MoveGenerator;
use crate::position::{king_home, CastleSide, Position};
use crate::types::*;

/// Squares strictly between two squares on the same rank
fn squares_between(a: usize, b: usize) -> u64 {
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    (low + 1..high).fold(0u64, |acc, sq| acc | square_bb(sq))
}

impl MoveGenerator {
    /// Append castling actions for `color`, at most one per side
    pub fn generate_castling_moves(&self, pos: &Position, color: Color, moves: &mut Vec<Action>) {
        if !pos.has_any_castling_right(color) {
            return;
        }

        let king_from = king_home(color);
        if pos.pieces(KING, color) & square_bb(king_from) == 0 {
            return;
        }
        if self.is_in_check(color, pos) {
            return;
        }

        let king = piece_code(KING, color);
        let rook = piece_code(ROOK, color);

        for side in CastleSide::BOTH {
            if !pos.has_castling_right(color, side) {
                continue;
            }

            let rook_from = side.rook_home(color);
            if pos.pieces(ROOK, color) & square_bb(rook_from) == 0 {
                continue;
            }
            if pos.occupied() & squares_between(king_from, rook_from) != 0 {
                continue;
            }

            let (through, king_to) = match side {
                CastleSide::KingSide => (king_from + 1, king_from + 2),
                CastleSide::QueenSide => (king_from - 1, king_from - 2),
            };

            // The square the king passes over must not be attacked
            let passing = pos.apply(Action::quiet(king, king_from, through));
            if self.is_in_check(color, &passing) {
                continue;
            }

            moves.push(Action::castle(king, king_from, king_to, rook, rook_from, through));
        }
    }
}
