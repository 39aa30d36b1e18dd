//! PackChess - Perft
//!
//! Counts the leaves of the legal-move tree. Comparing the counts with known
//! reference numbers is the standard check of a move generator.

use crate::action::Action;
use crate::movegen::MoveGenerator;
use crate::position::Position;
use crate::types::{opponent, Color};

/// Number of legal move sequences of length `depth` from `position`
pub fn perft(generator: &MoveGenerator, position: &Position, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.legal_moves(position, color);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(generator, &position.apply(mv), opponent(color), depth - 1))
        .sum()
}

/// Perft split by root move, in generation order
pub fn divide(generator: &MoveGenerator, position: &Position, color: Color, depth: u32) -> Vec<(Action, u64)> {
    generator
        .legal_moves(position, color)
        .into_iter()
        .map(|mv| {
            let nodes = perft(generator, &position.apply(mv), opponent(color), depth.saturating_sub(1));
            (mv, nodes)
        })
        .collect()
}
