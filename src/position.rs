//! PackChess - Position Representation Module
//!
//! A position is seventeen 64-bit words: twelve piece masks, two color
//! masks, the total occupancy, one word of extra state and the action that
//! produced the position. Positions are plain `Copy` values; applying an
//! action returns a new position and never touches the old one.

use std::fmt;

use crate::action::Action;
use crate::bitboard::square_bb;
use crate::error::{ChessError, ChessResult};
use crate::types::*;

// ============================================================================
// EXTRA-STATE WORD LAYOUT
// ============================================================================

const EN_PASSANT_FLAG: u64 = 1;
const EN_PASSANT_MASK: u64 = 0xF;
const KING_SIDE_LOST_SHIFT: u32 = 4;
const QUEEN_SIDE_LOST_SHIFT: u32 = 6;
const CASTLING_MASK: u64 = 0xF0;
const CLOCK_SHIFT: u32 = 8;
const CLOCK_MASK: u64 = 0xFF << CLOCK_SHIFT;
const CLOCK_MAX: u64 = 0xFF;

/// Plies without capture or pawn move after which the game is drawn
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Which rook a castling right refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    #[inline]
    fn lost_bit(self, color: Color) -> u64 {
        let shift = match self {
            CastleSide::KingSide => KING_SIDE_LOST_SHIFT,
            CastleSide::QueenSide => QUEEN_SIDE_LOST_SHIFT,
        };
        1 << (shift + color as u32)
    }

    /// Home square of the rook this right refers to
    #[inline]
    pub const fn rook_home(self, color: Color) -> usize {
        let base = if color == WHITE { 0 } else { 56 };
        match self {
            CastleSide::KingSide => base + 7,
            CastleSide::QueenSide => base,
        }
    }
}

/// Home square of the king
#[inline]
pub const fn king_home(color: Color) -> usize {
    if color == WHITE { 4 } else { 60 }
}

/// A chess position, packed
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// One mask per piece code, indexed by `code - 2`
    pieces: [u64; 12],
    /// Union of each color's six masks
    colors: [u64; 2],
    /// Union of all twelve masks
    occupied: u64,
    /// En passant, castling-rights-lost bits and the half-move clock
    extra: u64,
    /// The action that produced this position (`Action::NONE` for a set-up position)
    last_action: Action,
}

impl Position {
    /// An empty board. All castling rights are intact until a king or rook leaves home,
    /// so a set-up position should call `settle_castling_rights` once its pieces are placed.
    pub const fn empty() -> Self {
        Position {
            pieces: [0; 12],
            colors: [0; 2],
            occupied: 0,
            extra: 0,
            last_action: Action::NONE,
        }
    }

    /// The standard starting position
    pub fn initial() -> Self {
        let mut pos = Position::empty();
        let back = [ROOK, KNIGHT, BISHOP, QUEEN, KING, BISHOP, KNIGHT, ROOK];

        for (file, &kind) in back.iter().enumerate() {
            pos.place(kind, WHITE, file);
            pos.place(PAWN, WHITE, 8 + file);
            pos.place(PAWN, BLACK, 48 + file);
            pos.place(kind, BLACK, 56 + file);
        }

        pos
    }

    // ------------------------------------------------------------------------
    // Raw mask maintenance
    // ------------------------------------------------------------------------

    #[inline]
    fn put_piece(&mut self, code: u8, sq: usize) {
        let bit = square_bb(sq);
        self.pieces[mask_index(code)] |= bit;
        self.colors[get_piece_color(code) as usize] |= bit;
        self.occupied |= bit;
    }

    #[inline]
    fn take_piece(&mut self, code: u8, sq: usize) {
        let bit = square_bb(sq);
        debug_assert!(
            self.pieces[mask_index(code)] & bit != 0,
            "piece {code} not on {}",
            square_name(sq)
        );
        self.pieces[mask_index(code)] &= !bit;
        self.colors[get_piece_color(code) as usize] &= !bit;
        self.occupied &= !bit;
    }

    /// Put a piece on `sq`, replacing whatever stood there
    pub fn place(&mut self, piece_type: u8, color: Color, sq: usize) {
        assert!(sq < 64, "square {sq} out of range");
        assert!((PAWN..=KING).contains(&piece_type), "bad piece type {piece_type}");
        self.remove(sq);
        self.put_piece(piece_code(piece_type, color), sq);
    }

    /// Clear `sq`, returning the code of the piece that stood there
    pub fn remove(&mut self, sq: usize) -> Option<u8> {
        let code = self.piece_at(sq)?;
        self.take_piece(code, sq);
        Some(code)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    #[inline]
    pub fn pieces(&self, piece_type: u8, color: Color) -> u64 {
        self.pieces[mask_index(piece_code(piece_type, color))]
    }

    #[inline]
    pub fn piece_masks(&self) -> &[u64; 12] {
        &self.pieces
    }

    #[inline]
    pub fn color_mask(&self, color: Color) -> u64 {
        self.colors[color as usize]
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.occupied
    }

    #[inline]
    pub fn extra(&self) -> u64 {
        self.extra
    }

    #[inline]
    pub fn last_action(&self) -> Action {
        self.last_action
    }

    /// Piece code on `sq`, or `None` for an empty square
    pub fn piece_at(&self, sq: usize) -> Option<u8> {
        let bit = square_bb(sq);
        if self.occupied & bit == 0 {
            return None;
        }
        let side = if self.colors[WHITE as usize] & bit != 0 { WHITE } else { BLACK };
        PIECE_TYPES
            .iter()
            .map(|&kind| piece_code(kind, side))
            .find(|&code| self.pieces[mask_index(code)] & bit != 0)
    }

    /// Piece code on a square the caller knows is occupied.
    ///
    /// # Panics
    /// If no piece mask covers `sq`. That means the position was corrupted
    /// by a codec or generator bug.
    pub fn occupant(&self, sq: usize) -> u8 {
        match self.piece_at(sq) {
            Some(code) => code,
            None => panic!(
                "invariant violation: no piece on {} (occupancy {:#018x})",
                square_name(sq),
                self.occupied
            ),
        }
    }

    pub fn king_square(&self, color: Color) -> Option<usize> {
        let kings = self.pieces(KING, color);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as usize)
        }
    }

    /// Rights are stored as "lost" bits. A right nobody revoked reads as intact
    /// even when the king or rook is missing, until the next `apply` or
    /// `settle_castling_rights` clears it.
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.extra & side.lost_bit(color) == 0
    }

    pub fn has_any_castling_right(&self, color: Color) -> bool {
        CastleSide::BOTH.iter().any(|&side| self.has_castling_right(color, side))
    }

    /// The four rights-lost bits as a number in 0..16
    #[inline]
    pub fn castling_bits(&self) -> usize {
        ((self.extra & CASTLING_MASK) >> KING_SIDE_LOST_SHIFT) as usize
    }

    /// Drop every right whose king or rook is not on its home square.
    /// A set-up position then hashes and compares like the same placement reached by play.
    pub fn settle_castling_rights(&mut self) {
        for color in [WHITE, BLACK] {
            let king_at_home = self.pieces(KING, color) & square_bb(king_home(color)) != 0;
            let rooks = self.pieces(ROOK, color);
            for side in CastleSide::BOTH {
                if !king_at_home || rooks & square_bb(side.rook_home(color)) == 0 {
                    self.revoke_castling(color, side);
                }
            }
        }
    }

    /// Permanently give up a castling right
    pub fn revoke_castling(&mut self, color: Color, side: CastleSide) {
        self.extra |= side.lost_bit(color);
    }

    /// File of the pawn that just made a double push, if any
    pub fn en_passant_file(&self) -> Option<usize> {
        if self.extra & EN_PASSANT_FLAG == 0 {
            None
        } else {
            Some(((self.extra & EN_PASSANT_MASK) >> 1) as usize)
        }
    }

    pub fn set_en_passant_file(&mut self, file: Option<usize>) {
        let encoding = match file {
            Some(f) => ((f as u64 & 7) << 1) | EN_PASSANT_FLAG,
            None => 0,
        };
        self.extra = (self.extra & !EN_PASSANT_MASK) | encoding;
    }

    /// Plies since the last capture or pawn move
    pub fn half_move_clock(&self) -> u32 {
        ((self.extra & CLOCK_MASK) >> CLOCK_SHIFT) as u32
    }

    pub fn set_half_move_clock(&mut self, plies: u8) {
        self.extra = (self.extra & !CLOCK_MASK) | ((plies as u64) << CLOCK_SHIFT);
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.half_move_clock() >= FIFTY_MOVE_PLIES
    }

    /// Same pieces on the same squares with the same castling and en-passant state.
    /// The clock and the producing action are ignored.
    pub fn same_placement(&self, other: &Position) -> bool {
        self.pieces == other.pieces
            && (self.extra & (CASTLING_MASK | EN_PASSANT_MASK))
                == (other.extra & (CASTLING_MASK | EN_PASSANT_MASK))
    }

    // ------------------------------------------------------------------------
    // Applying actions
    // ------------------------------------------------------------------------

    /// Apply `action` and return the resulting position
    pub fn apply(&self, action: Action) -> Position {
        debug_assert!(!action.is_none(), "invariant violation: applying the null action");
        let mut next = *self;
        let moved = action.source_piece();
        let color = get_piece_color(moved);

        next.take_piece(moved, action.source_square());
        if action.is_capture() {
            next.take_piece(action.captured_piece(), action.captured_square());
        }
        next.put_piece(action.dest_piece(), action.dest_square());

        if action.is_castle() {
            next.take_piece(action.rook_piece(), action.rook_source());
            next.put_piece(action.rook_piece(), action.rook_dest());
        }

        if get_piece_type(moved) == KING {
            next.revoke_castling(color, CastleSide::KingSide);
            next.revoke_castling(color, CastleSide::QueenSide);
        }

        // A right dies with its rook, whether it moved now, earlier, or was captured
        for side_color in [WHITE, BLACK] {
            let rooks = next.pieces(ROOK, side_color);
            for side in CastleSide::BOTH {
                if rooks & square_bb(side.rook_home(side_color)) == 0 {
                    next.revoke_castling(side_color, side);
                }
            }
        }

        let clock = if action.is_capture() || get_piece_type(moved) == PAWN {
            0
        } else {
            (self.half_move_clock() as u64 + 1).min(CLOCK_MAX)
        };
        next.extra = (next.extra & !CLOCK_MASK) | (clock << CLOCK_SHIFT);
        next.extra = (next.extra & !EN_PASSANT_MASK) | action.en_passant_encoding();
        next.last_action = action;

        next
    }

    // ------------------------------------------------------------------------
    // Self-check
    // ------------------------------------------------------------------------

    /// Recompute the occupancy invariants from the twelve piece masks
    pub fn validate(&self) -> ChessResult<()> {
        let union = self.pieces.iter().fold(0u64, |acc, &m| acc | m);
        let xor = self.pieces.iter().fold(0u64, |acc, &m| acc ^ m);

        if union != xor {
            let square = (union ^ xor).trailing_zeros() as usize;
            return Err(ChessError::OverlappingPieces { square });
        }
        if self.occupied != union {
            return Err(ChessError::OccupancyMismatch { stored: self.occupied, union, xor });
        }

        for color in [WHITE, BLACK] {
            let expected = PIECE_TYPES
                .iter()
                .fold(0u64, |acc, &kind| acc | self.pieces(kind, color));
            let stored = self.colors[color as usize];
            if stored != expected {
                return Err(ChessError::ColorMismatch { color, stored, expected });
            }
        }

        Ok(())
    }

    /// Display the board as a string
    pub fn display(&self) -> String {
        let mut lines = Vec::new();
        lines.push("  +---+---+---+---+---+---+---+---+".to_string());

        for rank in (0..8).rev() {
            let mut row = format!("{} |", rank + 1);
            for file in 0..8 {
                match self.piece_at(rank * 8 + file).and_then(piece_char) {
                    Some(c) => row.push_str(&format!(" {} |", c)),
                    None => row.push_str("   |"),
                }
            }
            lines.push(row);
            lines.push("  +---+---+---+---+---+---+---+---+".to_string());
        }
        lines.push("    a   b   c   d   e   f   g   h".to_string());

        lines.join("\n")
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.display())?;
        write!(
            f,
            "extra {:#06x}, last action {:?}",
            self.extra, self.last_action
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
