//! PackChess - Static Evaluation
//!
//! The search treats evaluation as an opaque oracle behind the `Evaluator`
//! trait. `MaterialEvaluator` is the default: material, piece-square tables,
//! the bishop pair and rooks on open files, scored from the point of view of
//! the side asked about.

use crate::bitboard::{file_of, pop_lsb, FILE_A};
use crate::position::Position;
use crate::types::*;

/// Static evaluation of a position for one side. Positive is good for `color`.
pub trait Evaluator {
    fn evaluate(&self, position: &Position, color: Color) -> i32;
}

/// Centipawn values, indexed by piece type
pub const PIECE_VALUES: [i32; 7] = [0, 100, 320, 330, 500, 900, 20000];

// Tables are laid out from white's side, a1 first
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10, -20, -20,  10,  10,   5,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,   5,  10,  25,  25,  10,   5,   5,
    10,  10,  20,  30,  30,  20,  10,  10,
    50,  50,  50,  50,  50,  50,  50,  50,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   5,   5,   0, -20, -40,
   -30,   5,  10,  15,  15,  10,   5, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   5,  15,  20,  20,  15,   5, -30,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   5,   0,   0,   0,   0,   5, -10,
   -10,  10,  10,  10,  10,  10,  10, -10,
   -10,   0,  10,  10,  10,  10,   0, -10,
   -10,   5,   5,  10,  10,   5,   5, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,   0,   0,   5,   5,   0,   0,   0,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     5,  10,  10,  10,  10,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   5,   0,   0,   0,   0, -10,
   -10,   5,   5,   5,   5,   5,   0, -10,
     0,   0,   5,   5,   5,   5,   0,  -5,
    -5,   0,   5,   5,   5,   5,   0,  -5,
   -10,   0,   5,   5,   5,   5,   0, -10,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MIDDLEGAME_PST: [i32; 64] = [
    20,  30,  10,   0,   0,  10,  30,  20,
    20,  20,   0,   0,   0,   0,  20,  20,
   -10, -20, -20, -20, -20, -20, -20, -10,
   -20, -30, -30, -40, -40, -30, -30, -20,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
];

#[rustfmt::skip]
const KING_ENDGAME_PST: [i32; 64] = [
   -50, -30, -30, -30, -30, -30, -30, -50,
   -30, -30,   0,   0,   0,   0, -30, -30,
   -30, -10,  20,  30,  30,  20, -10, -30,
   -30, -10,  30,  40,  40,  30, -10, -30,
   -30, -10,  30,  40,  40,  30, -10, -30,
   -30, -10,  20,  30,  30,  20, -10, -30,
   -30, -20, -10,   0,   0, -10, -20, -30,
   -50, -40, -30, -20, -20, -30, -40, -50,
];

const BISHOP_PAIR_BONUS: i32 = 50;
const ROOK_ON_OPEN_FILE_BONUS: i32 = 25;
const ROOK_ON_SEMI_OPEN_FILE_BONUS: i32 = 15;

/// Non-king material at or below which both sides count as in the endgame
const ENDGAME_MATERIAL: i32 = 1300;

fn pst(piece_type: u8, endgame: bool) -> &'static [i32; 64] {
    match piece_type {
        PAWN => &PAWN_PST,
        KNIGHT => &KNIGHT_PST,
        BISHOP => &BISHOP_PST,
        ROOK => &ROOK_PST,
        QUEEN => &QUEEN_PST,
        _ if endgame => &KING_ENDGAME_PST,
        _ => &KING_MIDDLEGAME_PST,
    }
}

/// Mirror a square vertically so black reads the tables from its own side
#[inline]
fn relative_square(sq: usize, color: Color) -> usize {
    if color == WHITE { sq } else { sq ^ 56 }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    fn material(position: &Position, color: Color) -> i32 {
        [PAWN, KNIGHT, BISHOP, ROOK, QUEEN]
            .iter()
            .map(|&kind| position.pieces(kind, color).count_ones() as i32 * PIECE_VALUES[kind as usize])
            .sum()
    }

    /// Score for one side from white's fixed frame, before perspective
    fn side_score(position: &Position, color: Color, endgame: bool) -> i32 {
        let mut score = Self::material(position, color);

        for kind in PIECE_TYPES {
            let table = pst(kind, endgame);
            let mut bb = position.pieces(kind, color);
            while bb != 0 {
                score += table[relative_square(pop_lsb(&mut bb), color)];
            }
        }

        if position.pieces(BISHOP, color).count_ones() >= 2 {
            score += BISHOP_PAIR_BONUS;
        }

        let own_pawns = position.pieces(PAWN, color);
        let enemy_pawns = position.pieces(PAWN, opponent(color));
        let mut rooks = position.pieces(ROOK, color);
        while rooks != 0 {
            let file = FILE_A << file_of(pop_lsb(&mut rooks));
            if file & own_pawns == 0 {
                score += if file & enemy_pawns == 0 {
                    ROOK_ON_OPEN_FILE_BONUS
                } else {
                    ROOK_ON_SEMI_OPEN_FILE_BONUS
                };
            }
        }

        score
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, position: &Position, color: Color) -> i32 {
        let endgame = Self::material(position, WHITE) <= ENDGAME_MATERIAL
            && Self::material(position, BLACK) <= ENDGAME_MATERIAL;

        Self::side_score(position, color, endgame) - Self::side_score(position, opponent(color), endgame)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
