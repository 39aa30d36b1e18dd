//! PackChess - Attack Tables
//!
//! Precomputed attack sets, built once by `AttackTables::new` and read-only
//! afterwards:
//! - knight and king attacks per square
//! - pawn attacks per color and square
//! - rook and bishop attacks through magic bitboards
//!
//! A magic lookup masks the occupancy down to the squares that can block the
//! slider, multiplies by the square's magic number and keeps the top bits as
//! an index into a dense table of attack sets. The multipliers were found
//! offline and ship as constants below.

use tracing::debug;

use crate::bitboard::{
    bishop_attacks_slow, bishop_relevant_mask, for_each_subset, king_attacks_from,
    knight_attacks_from, pawn_attacks_bb, rook_attacks_slow, rook_relevant_mask, square_bb,
};
use crate::error::{ChessError, ChessResult};
use crate::types::{Color, WHITE};

#[rustfmt::skip]
const ROOK_MAGICS: [u64; 64] = [
    0x0480084000812010, 0x0040001000C12000, 0x0200104A00824020, 0x8880100028002580,
    0x2080140008000280, 0x0100010006080400, 0x01004A0000810004, 0x008002A841000080,
    0x0021800140002081, 0x000C401001402000, 0x0852004020108200, 0x00560020400A0011,
    0x8008800401800802, 0x1209000A04010028, 0x2043001600090004, 0x0404800080104900,
    0x1080004002A00040, 0x0050004000482000, 0x000088802000D000, 0x0101808010000806,
    0x08A2020020440890, 0x0001010002040008, 0x1500840002080190, 0x0010020004008041,
    0x008004414000E000, 0x0020200080804000, 0x0020200080801000, 0x0208080080100080,
    0x8040440080800800, 0x00280400801A0080, 0x0010051400481026, 0x1580800C80024500,
    0x008000400AC02001, 0x0001008202004264, 0x090011C305002000, 0x0000880084801000,
    0x0200040080804800, 0x0002001102000C08, 0x0C0910480C000201, 0x0000800840800300,
    0x0080248840088000, 0x2018200050084000, 0x2800408200120020, 0x400010C20022000A,
    0x0A51010408010010, 0x0402001008C20044, 0x0801040200010100, 0x0400018244120001,
    0x8195018000402900, 0x2840804001002100, 0x0000801000200080, 0x1001300108008080,
    0x8025240080080080, 0x0209000208440100, 0x0021002482000100, 0x01A10000C601A100,
    0x0000508001A0C101, 0x4022542081004005, 0x02042042000A8052, 0x4000A06900045001,
    0x010200100C200802, 0x0003000802240005, 0x0080021008008104, 0x00028A4110840062,
];

#[rustfmt::skip]
const BISHOP_MAGICS: [u64; 64] = [
    0x0002101001004084, 0x0053B801C1020382, 0x0488109902080808, 0x01140416800004C0,
    0x000404A012000180, 0x4001046004000401, 0x000404040C040010, 0x2021450198200200,
    0x800220A00400C080, 0x0040100102408200, 0x0800080821022010, 0x0000040C28800002,
    0x20001404A0200200, 0x0304CC2404406212, 0x3825020202024002, 0x4160420220922810,
    0x0609011020180080, 0x0020020838808080, 0x0610000214001020, 0x0182000402120124,
    0x06160284010C0422, 0x0000200200842009, 0x0902000401010800, 0x0801601504110C08,
    0x00600C520A100440, 0x12501081042C1091, 0x1008020001040500, 0x8810040020440008,
    0x1002040082008605, 0x008041800100A001, 0x8020810101981802, 0x2401104101040890,
    0x0004044041A0A208, 0x08008C3021200A80, 0x2404020880A10400, 0x0404028180080200,
    0x10050104000E0120, 0x0210021021121001, 0x0406240100004844, 0x00C10504A2210400,
    0x0200843008104110, 0x2000B41008040200, 0x0000202130080800, 0x52502E2018002100,
    0x0107084208200400, 0x0020200141C0A081, 0x6060010200900200, 0x8801040109C20A02,
    0x802C1403880A0000, 0x0C80209828284000, 0x200002004A088209, 0x0808880221882010,
    0x2104801006020001, 0x080020201218808A, 0x28C942080A040880, 0x1020040082084044,
    0x004102480C041234, 0x00410F08C8040500, 0xA001000046180402, 0x4000041A08841C00,
    0x1040006044050400, 0x0000080461440102, 0x6250A02004408192, 0x014C0802C4008201,
];

/// Magic lookup for one slider type
pub struct MagicTable {
    magic: [u64; 64],
    mask: [u64; 64],
    shift: [u32; 64],
    offset: [usize; 64],
    attacks: Vec<u64>,
}

impl MagicTable {
    fn build(
        piece: &'static str,
        magics: &[u64; 64],
        relevant_mask: fn(usize) -> u64,
        slow_attacks: fn(usize, u64) -> u64,
    ) -> ChessResult<Self> {
        let mut mask = [0u64; 64];
        let mut shift = [0u32; 64];
        let mut offset = [0usize; 64];
        let mut total = 0usize;

        for sq in 0..64 {
            mask[sq] = relevant_mask(sq);
            let bits = mask[sq].count_ones();
            shift[sq] = 64 - bits;
            offset[sq] = total;
            total += 1usize << bits;
        }

        let mut attacks = vec![0u64; total];
        let mut filled = vec![false; total];

        for sq in 0..64 {
            let mut collision = None;
            let slots = 1usize << (64 - shift[sq]);
            for_each_subset(mask[sq], |blockers| {
                if collision.is_some() {
                    return;
                }
                let local = (blockers.wrapping_mul(magics[sq]) >> shift[sq]) as usize;
                debug_assert!(local < slots);
                let index = offset[sq] + local;
                let attack = slow_attacks(sq, blockers);
                if filled[index] && attacks[index] != attack {
                    collision = Some(index);
                    return;
                }
                filled[index] = true;
                attacks[index] = attack;
            });
            if let Some(index) = collision {
                return Err(ChessError::MagicCollision { piece, square: sq, index });
            }
        }

        Ok(MagicTable {
            magic: *magics,
            mask,
            shift,
            offset,
            attacks,
        })
    }

    /// Attack set from `sq` given the full-board occupancy
    #[inline]
    pub fn attacks(&self, sq: usize, occupied: u64) -> u64 {
        let blockers = occupied & self.mask[sq];
        let index = self.offset[sq] + (blockers.wrapping_mul(self.magic[sq]) >> self.shift[sq]) as usize;
        self.attacks[index]
    }

    /// Relevant-occupancy mask for `sq` (board edges excluded)
    #[inline]
    pub fn mask(&self, sq: usize) -> u64 {
        self.mask[sq]
    }

    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

/// Every attack table the generators and the check test need
pub struct AttackTables {
    knight: [u64; 64],
    king: [u64; 64],
    pawn: [[u64; 64]; 2],
    rook: MagicTable,
    bishop: MagicTable,
}

impl AttackTables {
    pub fn new() -> ChessResult<Self> {
        let mut knight = [0u64; 64];
        let mut king = [0u64; 64];
        let mut pawn = [[0u64; 64]; 2];

        for sq in 0..64 {
            knight[sq] = knight_attacks_from(sq);
            king[sq] = king_attacks_from(sq);
            pawn[0][sq] = pawn_attacks_bb(square_bb(sq), true);
            pawn[1][sq] = pawn_attacks_bb(square_bb(sq), false);
        }

        let rook = MagicTable::build("rook", &ROOK_MAGICS, rook_relevant_mask, rook_attacks_slow)?;
        let bishop = MagicTable::build("bishop", &BISHOP_MAGICS, bishop_relevant_mask, bishop_attacks_slow)?;

        debug!(
            rook_entries = rook.len(),
            bishop_entries = bishop.len(),
            "attack tables built"
        );

        Ok(AttackTables { knight, king, pawn, rook, bishop })
    }

    #[inline]
    pub fn knight_attacks(&self, sq: usize) -> u64 {
        self.knight[sq]
    }

    #[inline]
    pub fn king_attacks(&self, sq: usize) -> u64 {
        self.king[sq]
    }

    /// Squares a pawn of `color` on `sq` attacks
    #[inline]
    pub fn pawn_attacks(&self, sq: usize, color: Color) -> u64 {
        self.pawn[if color == WHITE { 0 } else { 1 }][sq]
    }

    #[inline]
    pub fn rook_attacks(&self, sq: usize, occupied: u64) -> u64 {
        self.rook.attacks(sq, occupied)
    }

    #[inline]
    pub fn bishop_attacks(&self, sq: usize, occupied: u64) -> u64 {
        self.bishop.attacks(sq, occupied)
    }

    #[inline]
    pub fn queen_attacks(&self, sq: usize, occupied: u64) -> u64 {
        self.rook.attacks(sq, occupied) | self.bishop.attacks(sq, occupied)
    }

    pub fn rook_table(&self) -> &MagicTable {
        &self.rook
    }

    pub fn bishop_table(&self) -> &MagicTable {
        &self.bishop
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
