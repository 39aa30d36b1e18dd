//! PackChess - Legal Move Filter
//!
//! Generate-then-filter: every pseudo-legal candidate is applied and kept
//! only if the mover's king is not attacked in the resulting position. There
//! is no pin or check-ray bookkeeping.

use crate::action::Action;
use crate::movegen::MoveGenerator;
use crate::position::Position;
use crate::types::Color;

impl MoveGenerator {
    /// All legal moves for `color`
    pub fn legal_moves(&self, pos: &Position, color: Color) -> Vec<Action> {
        let mut moves = self.pseudo_legal_moves(pos, color);
        moves.retain(|&mv| self.is_legal(pos, color, mv));
        moves
    }

    /// All legal captures for `color`
    pub fn legal_captures(&self, pos: &Position, color: Color) -> Vec<Action> {
        let mut moves = self.pseudo_legal_captures(pos, color);
        moves.retain(|&mv| self.is_legal(pos, color, mv));
        moves
    }

    /// Check if a move is legal (doesn't leave own king in check)
    #[inline]
    pub fn is_legal(&self, pos: &Position, color: Color, mv: Action) -> bool {
        !self.is_in_check(color, &pos.apply(mv))
    }
}
