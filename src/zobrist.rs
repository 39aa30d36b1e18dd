//! PackChess - Zobrist Keys
//!
//! Random keys for hashing positions, drawn once from a fixed seed so that
//! hashes are reproducible between runs.

use rand::prelude::*;

use crate::bitboard::pop_lsb;
use crate::position::Position;
use crate::types::{Color, BLACK};

const ZOBRIST_SEED: u64 = 12345;

pub struct ZobristKeys {
    /// Indexed by piece mask index, then square
    piece_keys: [[u64; 64]; 12],
    side_key: u64,
    /// Indexed by the four castling-lost bits
    castling_keys: [u64; 16],
    ep_keys: [u64; 8],
}

impl ZobristKeys {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

        let mut piece_keys = [[0u64; 64]; 12];
        for keys in piece_keys.iter_mut() {
            for key in keys.iter_mut() {
                *key = rng.gen();
            }
        }

        let side_key = rng.gen();

        let mut castling_keys = [0u64; 16];
        for key in castling_keys.iter_mut() {
            *key = rng.gen();
        }

        let mut ep_keys = [0u64; 8];
        for key in ep_keys.iter_mut() {
            *key = rng.gen();
        }

        ZobristKeys { piece_keys, side_key, castling_keys, ep_keys }
    }

    #[inline]
    pub fn side_key(&self) -> u64 {
        self.side_key
    }

    /// Hash of `position` with `color` to move
    pub fn hash(&self, position: &Position, color: Color) -> u64 {
        let mut h = 0u64;

        for (index, &mask) in position.piece_masks().iter().enumerate() {
            let mut bb = mask;
            while bb != 0 {
                h ^= self.piece_keys[index][pop_lsb(&mut bb)];
            }
        }

        if color == BLACK {
            h ^= self.side_key;
        }

        h ^= self.castling_keys[position.castling_bits()];

        if let Some(file) = position.en_passant_file() {
            h ^= self.ep_keys[file];
        }

        h
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        ZobristKeys::new()
    }
}
