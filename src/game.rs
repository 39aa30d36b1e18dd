//! PackChess - Game History
//!
//! A game is the stack of positions reached from a root position by applying
//! actions in place. `do_action` pushes the resulting position and
//! `undo_action` pops it again, so undo restores every word of the previous
//! position exactly (rights, clock and en passant included).
//!
//! Repetition is judged by content: two positions repeat when their piece
//! masks and castling/en-passant state agree and the same side is to move.
//! Only positions since the last capture or pawn move are compared, which is
//! what the half-move clock counts.

use crate::action::Action;
use crate::position::Position;
use crate::types::{opponent, Color};

#[derive(Clone, Debug)]
pub struct Game {
    /// Never empty; the last entry is the current position
    positions: Vec<Position>,
    /// Side to move in the root position
    root_side: Color,
}

impl Game {
    pub fn new(root: Position, side_to_move: Color) -> Self {
        Game {
            positions: vec![root],
            root_side: side_to_move,
        }
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> &Position {
        &self.positions[self.positions.len() - 1]
    }

    /// Number of actions applied since the root
    #[inline]
    pub fn ply(&self) -> usize {
        self.positions.len() - 1
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.ply() % 2 == 0 {
            self.root_side
        } else {
            opponent(self.root_side)
        }
    }

    /// Every position from the root to the current one
    pub fn history(&self) -> &[Position] {
        &self.positions
    }

    /// Apply an action to the current position
    pub fn do_action(&mut self, action: Action) {
        let next = self.position().apply(action);
        self.positions.push(next);
    }

    /// Take back the last action. Returns `None` at the root.
    pub fn undo_action(&mut self) -> Option<Action> {
        if self.positions.len() == 1 {
            return None;
        }
        self.positions.pop().map(|undone| undone.last_action())
    }

    /// How often the current position occurred since the last irreversible move,
    /// the current occurrence included
    pub fn repetition_count(&self) -> usize {
        let current = self.position();
        let last = self.ply();
        let window = (current.half_move_clock() as usize).min(last);

        (0..=window)
            .step_by(2)
            .filter(|&back| self.positions[last - back].same_placement(current))
            .count()
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
