//! PackChess - Status Evaluator
//!
//! Check detection by attack-pattern reversal, plus checkmate and stalemate
//! classification. Draw detection that needs the game history lives on
//! `Game`, see `game.rs`.

use crate::bitboard::pawn_attacks_bb;
use crate::game::Game;
use crate::movegen::MoveGenerator;
use crate::position::Position;
use crate::types::*;

impl MoveGenerator {
    /// Is `sq` attacked by any piece of `by`?
    pub fn is_square_attacked(&self, pos: &Position, sq: usize, by: Color) -> bool {
        let tables = self.tables();
        let occupied = pos.occupied();
        let target = 1u64 << sq;

        // Pawns: the attacker's whole pawn attack pattern
        if pawn_attacks_bb(pos.pieces(PAWN, by), by == WHITE) & target != 0 {
            return true;
        }

        // Leapers: a knight on sq would see the attacking knight, same for kings
        if tables.knight_attacks(sq) & pos.pieces(KNIGHT, by) != 0 {
            return true;
        }
        if tables.king_attacks(sq) & pos.pieces(KING, by) != 0 {
            return true;
        }

        let queens = pos.pieces(QUEEN, by);
        if tables.bishop_attacks(sq, occupied) & (pos.pieces(BISHOP, by) | queens) != 0 {
            return true;
        }
        if tables.rook_attacks(sq, occupied) & (pos.pieces(ROOK, by) | queens) != 0 {
            return true;
        }

        false
    }

    /// Is the king of `color` attacked? A side without a king is never in check.
    pub fn is_in_check(&self, color: Color, pos: &Position) -> bool {
        match pos.king_square(color) {
            Some(king_sq) => self.is_square_attacked(pos, king_sq, opponent(color)),
            None => false,
        }
    }

    /// In check with no legal move
    pub fn is_check_mate(&self, color: Color, pos: &Position) -> bool {
        self.is_in_check(color, pos) && self.legal_moves(pos, color).is_empty()
    }

    /// Not in check, but no legal move
    pub fn is_stalemate(&self, color: Color, pos: &Position) -> bool {
        !self.is_in_check(color, pos) && self.legal_moves(pos, color).is_empty()
    }

    /// Draw by the fifty-move rule, stalemate or threefold repetition for the side to move
    pub fn is_draw(&self, game: &Game) -> bool {
        let pos = game.position();
        if pos.is_fifty_move_draw() {
            return true;
        }
        if game.is_threefold_repetition() {
            return true;
        }
        self.is_stalemate(game.side_to_move(), pos)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
