//! PackChess - Bitboard Module
//!
//! Bitboard constants and helpers. A bitboard is a 64-bit integer where each
//! bit represents a square on the board (bit 0 = a1, bit 63 = h8).
//!
//! The ray-walking slider functions here are the reference implementation the
//! magic tables are built from; the hot path goes through `AttackTables`.

// ============================================================================
// CONSTANTS - Files and Ranks
// ============================================================================

pub const FILE_A: u64 = 0x0101010101010101;
pub const FILE_B: u64 = 0x0202020202020202;
pub const FILE_G: u64 = 0x4040404040404040;
pub const FILE_H: u64 = 0x8080808080808080;

pub const RANK_1: u64 = 0x00000000000000FF;
pub const RANK_2: u64 = 0x000000000000FF00;
pub const RANK_7: u64 = 0x00FF000000000000;
pub const RANK_8: u64 = 0xFF00000000000000;

pub const NOT_FILE_A: u64 = !FILE_A;
pub const NOT_FILE_H: u64 = !FILE_H;
pub const NOT_FILE_AB: u64 = !(FILE_A | FILE_B);
pub const NOT_FILE_GH: u64 = !(FILE_G | FILE_H);

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

// ============================================================================
// LEAPER ATTACKS (const)
// ============================================================================

pub const fn knight_attacks_from(sq: usize) -> u64 {
    let bb = 1u64 << sq;
    let mut attack = 0u64;

    attack |= (bb << 17) & NOT_FILE_A;
    attack |= (bb << 15) & NOT_FILE_H;
    attack |= (bb << 10) & NOT_FILE_AB;
    attack |= (bb << 6) & NOT_FILE_GH;
    attack |= (bb >> 6) & NOT_FILE_AB;
    attack |= (bb >> 10) & NOT_FILE_GH;
    attack |= (bb >> 15) & NOT_FILE_A;
    attack |= (bb >> 17) & NOT_FILE_H;

    attack
}

pub const fn king_attacks_from(sq: usize) -> u64 {
    let bb = 1u64 << sq;
    let mut attack = 0u64;

    attack |= bb << 8;
    attack |= bb >> 8;
    attack |= (bb << 1) & NOT_FILE_A;
    attack |= (bb >> 1) & NOT_FILE_H;
    attack |= (bb << 9) & NOT_FILE_A;
    attack |= (bb << 7) & NOT_FILE_H;
    attack |= (bb >> 7) & NOT_FILE_A;
    attack |= (bb >> 9) & NOT_FILE_H;

    attack
}

/// Squares attacked by every pawn in `pawns` (whole-board shift)
#[inline]
pub const fn pawn_attacks_bb(pawns: u64, white: bool) -> u64 {
    if white {
        ((pawns << 9) & NOT_FILE_A) | ((pawns << 7) & NOT_FILE_H)
    } else {
        ((pawns >> 7) & NOT_FILE_A) | ((pawns >> 9) & NOT_FILE_H)
    }
}

// ============================================================================
// SLIDING PIECE ATTACKS (ray walking, reference only)
// ============================================================================

fn walk_rays(sq: usize, occupied: u64, directions: &[(i32, i32); 4]) -> u64 {
    let file = (sq % 8) as i32;
    let rank = (sq / 8) as i32;
    let mut attacks = 0u64;

    for &(df, dr) in directions {
        let mut f = file + df;
        let mut r = rank + dr;
        while (0..8).contains(&f) && (0..8).contains(&r) {
            let target = 1u64 << (r * 8 + f);
            attacks |= target;
            if target & occupied != 0 {
                break;
            }
            f += df;
            r += dr;
        }
    }

    attacks
}

/// Squares that can block a slider on `sq`, excluding the last square of each ray
fn relevant_rays(sq: usize, directions: &[(i32, i32); 4]) -> u64 {
    let file = (sq % 8) as i32;
    let rank = (sq / 8) as i32;
    let mut mask = 0u64;

    for &(df, dr) in directions {
        let mut f = file + df;
        let mut r = rank + dr;
        while (0..8).contains(&(f + df)) && (0..8).contains(&(r + dr)) {
            mask |= 1u64 << (r * 8 + f);
            f += df;
            r += dr;
        }
    }

    mask
}

/// Get rook attacks from a square given occupied squares
pub fn rook_attacks_slow(sq: usize, occupied: u64) -> u64 {
    walk_rays(sq, occupied, &ROOK_DIRECTIONS)
}

/// Get bishop attacks from a square given occupied squares
pub fn bishop_attacks_slow(sq: usize, occupied: u64) -> u64 {
    walk_rays(sq, occupied, &BISHOP_DIRECTIONS)
}

pub fn rook_relevant_mask(sq: usize) -> u64 {
    relevant_rays(sq, &ROOK_DIRECTIONS)
}

pub fn bishop_relevant_mask(sq: usize) -> u64 {
    relevant_rays(sq, &BISHOP_DIRECTIONS)
}

// ============================================================================
// BITBOARD UTILITIES
// ============================================================================

/// Extract and clear the least significant bit, returning its index
#[inline]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let idx = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    idx
}

/// Create a bitboard with a single bit set at the given square
#[inline]
pub const fn square_bb(sq: usize) -> u64 {
    1u64 << sq
}

/// Get the file (0-7) of a square
#[inline]
pub const fn file_of(sq: usize) -> usize {
    sq & 7
}

/// Visit every subset of `mask`, starting with the empty set (carry-rippler)
pub fn for_each_subset(mask: u64, mut f: impl FnMut(u64)) {
    let mut subset = 0u64;
    loop {
        f(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
}
