//! PackChess - Action Codec
//!
//! An action is one move packed into a single 64-bit word. All bit offsets
//! live here; nothing else in the crate shifts action bits by hand.
//!
//! | field                         | offset | width |
//! |-------------------------------|--------|-------|
//! | source piece code             | 0      | 4     |
//! | source square                 | 4      | 6     |
//! | destination piece code        | 10     | 4     |
//! | destination square            | 14     | 6     |
//! | captured piece code           | 20     | 4     |
//! | captured square               | 24     | 6     |
//! | castling rook piece code      | 30     | 4     |
//! | castling rook source square   | 34     | 6     |
//! | castling rook dest square     | 40     | 6     |
//! | en-passant encoding           | 46     | 4     |
//! | transient priority tag        | 54     | 10    |

use std::fmt;

use crate::types::{get_piece_color, get_piece_type, square_name, Color};

const PIECE_WIDTH: u32 = 4;
const SQUARE_WIDTH: u32 = 6;

const SOURCE_PIECE: u32 = 0;
const SOURCE_SQUARE: u32 = 4;
const DEST_PIECE: u32 = 10;
const DEST_SQUARE: u32 = 14;
const CAPTURED_PIECE: u32 = 20;
const CAPTURED_SQUARE: u32 = 24;
const ROOK_PIECE: u32 = 30;
const ROOK_SOURCE: u32 = 34;
const ROOK_DEST: u32 = 40;
const EN_PASSANT: u32 = 46;
const EN_PASSANT_WIDTH: u32 = 4;

/// First bit of the priority tag used by move ordering
pub const PRIORITY_SHIFT: u32 = 54;
/// Largest value the priority tag can hold
pub const MAX_PRIORITY: u64 = (1 << (64 - PRIORITY_SHIFT)) - 1;

const CANONICAL_MASK: u64 = (1 << PRIORITY_SHIFT) - 1;

#[inline]
const fn field(word: u64, offset: u32, width: u32) -> u64 {
    (word >> offset) & ((1 << width) - 1)
}

/// One move, packed
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Action(u64);

impl Action {
    /// The null action, used for "no move" (e.g. the initial position)
    pub const NONE: Action = Action(0);

    #[inline]
    const fn base(piece: u8, from: usize, to_piece: u8, to: usize) -> u64 {
        (piece as u64) << SOURCE_PIECE
            | (from as u64) << SOURCE_SQUARE
            | (to_piece as u64) << DEST_PIECE
            | (to as u64) << DEST_SQUARE
    }

    /// A non-capturing move of `piece` from `from` to `to`
    #[inline]
    pub const fn quiet(piece: u8, from: usize, to: usize) -> Self {
        Action(Self::base(piece, from, piece, to))
    }

    /// A capture of `victim` standing on the destination square
    #[inline]
    pub const fn capture(piece: u8, from: usize, to: usize, victim: u8) -> Self {
        Action(
            Self::base(piece, from, piece, to)
                | (victim as u64) << CAPTURED_PIECE
                | (to as u64) << CAPTURED_SQUARE,
        )
    }

    /// A pawn capturing en passant; the victim stands on `captured_sq`, not on `to`
    #[inline]
    pub const fn en_passant(piece: u8, from: usize, to: usize, victim: u8, captured_sq: usize) -> Self {
        Action(
            Self::base(piece, from, piece, to)
                | (victim as u64) << CAPTURED_PIECE
                | (captured_sq as u64) << CAPTURED_SQUARE,
        )
    }

    /// A two-square pawn push; records the file for a later en-passant capture
    #[inline]
    pub const fn double_push(piece: u8, from: usize, to: usize) -> Self {
        let encoding = (((to & 7) as u64) << 1) | 1;
        Action(Self::base(piece, from, piece, to) | encoding << EN_PASSANT)
    }

    /// A promotion, optionally capturing (`victim == 0` for a push)
    #[inline]
    pub const fn promotion(piece: u8, from: usize, to: usize, promoted: u8, victim: u8) -> Self {
        let mut word = Self::base(piece, from, promoted, to);
        if victim != 0 {
            word |= (victim as u64) << CAPTURED_PIECE | (to as u64) << CAPTURED_SQUARE;
        }
        Action(word)
    }

    /// King and rook relocation in one action
    #[inline]
    pub const fn castle(king: u8, from: usize, to: usize, rook: u8, rook_from: usize, rook_to: usize) -> Self {
        Action(
            Self::base(king, from, king, to)
                | (rook as u64) << ROOK_PIECE
                | (rook_from as u64) << ROOK_SOURCE
                | (rook_to as u64) << ROOK_DEST,
        )
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Action(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn source_piece(self) -> u8 {
        field(self.0, SOURCE_PIECE, PIECE_WIDTH) as u8
    }

    #[inline]
    pub const fn source_square(self) -> usize {
        field(self.0, SOURCE_SQUARE, SQUARE_WIDTH) as usize
    }

    #[inline]
    pub const fn dest_piece(self) -> u8 {
        field(self.0, DEST_PIECE, PIECE_WIDTH) as u8
    }

    #[inline]
    pub const fn dest_square(self) -> usize {
        field(self.0, DEST_SQUARE, SQUARE_WIDTH) as usize
    }

    #[inline]
    pub const fn captured_piece(self) -> u8 {
        field(self.0, CAPTURED_PIECE, PIECE_WIDTH) as u8
    }

    #[inline]
    pub const fn captured_square(self) -> usize {
        field(self.0, CAPTURED_SQUARE, SQUARE_WIDTH) as usize
    }

    #[inline]
    pub const fn rook_piece(self) -> u8 {
        field(self.0, ROOK_PIECE, PIECE_WIDTH) as u8
    }

    #[inline]
    pub const fn rook_source(self) -> usize {
        field(self.0, ROOK_SOURCE, SQUARE_WIDTH) as usize
    }

    #[inline]
    pub const fn rook_dest(self) -> usize {
        field(self.0, ROOK_DEST, SQUARE_WIDTH) as usize
    }

    /// En-passant nibble: `(file << 1) | 1` after a double push, else 0
    #[inline]
    pub const fn en_passant_encoding(self) -> u64 {
        field(self.0, EN_PASSANT, EN_PASSANT_WIDTH)
    }

    #[inline]
    pub const fn color(self) -> Color {
        get_piece_color(self.source_piece())
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 & CANONICAL_MASK == 0
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured_piece() != 0
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.rook_piece() != 0
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        get_piece_type(self.dest_piece()) != get_piece_type(self.source_piece())
    }

    #[inline]
    pub const fn is_double_push(self) -> bool {
        self.en_passant_encoding() != 0
    }

    // ------------------------------------------------------------------------
    // Priority tag (bits 54-63), used only while sorting
    // ------------------------------------------------------------------------

    #[inline]
    pub const fn with_priority(self, priority: u64) -> Self {
        let p = if priority > MAX_PRIORITY { MAX_PRIORITY } else { priority };
        Action((self.0 & CANONICAL_MASK) | (p << PRIORITY_SHIFT))
    }

    #[inline]
    pub const fn priority(self) -> u64 {
        self.0 >> PRIORITY_SHIFT
    }

    #[inline]
    pub const fn strip_priority(self) -> Self {
        Action(self.0 & CANONICAL_MASK)
    }

    /// Coordinate notation ("e2e4", "e7e8q"), mainly for logs and test output
    pub fn to_coordinate(self) -> String {
        let mut text = format!("{}{}", square_name(self.source_square()), square_name(self.dest_square()));
        if self.is_promotion() {
            let promo = match get_piece_type(self.dest_piece()) {
                crate::types::KNIGHT => 'n',
                crate::types::BISHOP => 'b',
                crate::types::ROOK => 'r',
                _ => 'q',
            };
            text.push(promo);
        }
        text
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Action(none)");
        }
        write!(f, "Action({} {:#x})", self.to_coordinate(), self.0)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "0000");
        }
        write!(f, "{}", self.to_coordinate())
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod action_tests;
