//! PackChess - Type definitions and constants
//!
//! Colors, piece types and the 4-bit piece codes shared by the position
//! words and the action codec.

/// Side to move. White is 0, black is 1.
pub type Color = u8;

pub const WHITE: Color = 0;
pub const BLACK: Color = 1;

/// Piece type constants. Zero is reserved so that a piece code of 0 means "no piece".
pub const NO_PIECE: u8 = 0;
pub const PAWN: u8 = 1;
pub const KNIGHT: u8 = 2;
pub const BISHOP: u8 = 3;
pub const ROOK: u8 = 4;
pub const QUEEN: u8 = 5;
pub const KING: u8 = 6;

pub const PIECE_TYPES: [u8; 6] = [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING];

/// Complete piece codes (type * 2 + color)
pub const WHITE_PAWN: u8 = PAWN << 1;
pub const WHITE_KNIGHT: u8 = KNIGHT << 1;
pub const WHITE_BISHOP: u8 = BISHOP << 1;
pub const WHITE_ROOK: u8 = ROOK << 1;
pub const WHITE_QUEEN: u8 = QUEEN << 1;
pub const WHITE_KING: u8 = KING << 1;

pub const BLACK_PAWN: u8 = (PAWN << 1) | BLACK;
pub const BLACK_KNIGHT: u8 = (KNIGHT << 1) | BLACK;
pub const BLACK_BISHOP: u8 = (BISHOP << 1) | BLACK;
pub const BLACK_ROOK: u8 = (ROOK << 1) | BLACK;
pub const BLACK_QUEEN: u8 = (QUEEN << 1) | BLACK;
pub const BLACK_KING: u8 = (KING << 1) | BLACK;

/// File and rank names for square notation
pub const FILE_NAMES: &[u8; 8] = b"abcdefgh";
pub const RANK_NAMES: &[u8; 8] = b"12345678";

/// Build a piece code from a piece type and a color
#[inline]
pub const fn piece_code(piece_type: u8, color: Color) -> u8 {
    (piece_type << 1) | color
}

/// Extract piece type from a piece code
#[inline]
pub const fn get_piece_type(code: u8) -> u8 {
    code >> 1
}

/// Extract color from a piece code
#[inline]
pub const fn get_piece_color(code: u8) -> Color {
    code & 1
}

#[inline]
pub const fn opponent(color: Color) -> Color {
    color ^ 1
}

/// Index of a piece code into the 12 piece masks of a position
#[inline]
pub const fn mask_index(code: u8) -> usize {
    (code - 2) as usize
}

/// Convert square index (0-63) to algebraic notation (e.g., "e4")
pub fn square_name(sq: usize) -> String {
    let file = sq % 8;
    let rank = sq / 8;
    format!("{}{}", FILE_NAMES[file] as char, RANK_NAMES[rank] as char)
}

/// Convert algebraic notation to square index
pub fn parse_square(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file = match bytes[0] {
        b'a'..=b'h' => (bytes[0] - b'a') as usize,
        _ => return None,
    };

    let rank = match bytes[1] {
        b'1'..=b'8' => (bytes[1] - b'1') as usize,
        _ => return None,
    };

    Some(rank * 8 + file)
}

/// Piece code to its conventional letter (upper case for white)
pub fn piece_char(code: u8) -> Option<char> {
    let c = match get_piece_type(code) {
        PAWN => 'p',
        KNIGHT => 'n',
        BISHOP => 'b',
        ROOK => 'r',
        QUEEN => 'q',
        KING => 'k',
        _ => return None,
    };
    if get_piece_color(code) == WHITE {
        Some(c.to_ascii_uppercase())
    } else {
        Some(c)
    }
}
