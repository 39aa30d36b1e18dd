//! PackChess - Transposition Table
//!
//! A power-of-two array of slots, each made of two parallel words:
//!
//! verification word
//!   bits 32-63  upper 32 bits of the Zobrist hash
//!   bit  31     slot occupied
//!   bits 0-7    depth
//!
//! payload word
//!   bits 0-15   compact best move (source 6, destination 6, destination piece 4)
//!   bits 16-17  score type
//!   bits 18-25  depth
//!   bits 32-63  score
//!
//! A write always overwrites its bucket. A read only hits when the stored
//! upper hash bits match the probe's.

use tracing::debug;

use crate::action::Action;
use crate::error::{ChessError, ChessResult};
use crate::position::Position;
use crate::types::Color;
use crate::zobrist::ZobristKeys;

pub const MIN_MAGNITUDE: u32 = 1;
pub const MAX_MAGNITUDE: u32 = 30;

const UPPER_MASK: u64 = 0xFFFF_FFFF_0000_0000;
const OCCUPIED_BIT: u64 = 1 << 31;
const DEPTH_MASK: u64 = 0xFF;

const SCORE_TYPE_SHIFT: u32 = 16;
const PAYLOAD_DEPTH_SHIFT: u32 = 18;
const SCORE_SHIFT: u32 = 32;

/// How the stored score bounds the true score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreType {
    Exact = 0,
    /// The true score is at least the stored one (a beta cutoff)
    LowerBound = 1,
    /// The true score is at most the stored one (no move raised alpha)
    UpperBound = 2,
}

impl ScoreType {
    fn from_bits(bits: u64) -> Self {
        match bits & 3 {
            0 => ScoreType::Exact,
            1 => ScoreType::LowerBound,
            _ => ScoreType::UpperBound,
        }
    }
}

/// A 16-bit move hint: enough to recognise a move among the legal moves of
/// the position it was stored for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactMove(u16);

impl CompactMove {
    pub fn from_action(action: Action) -> Self {
        CompactMove(
            (action.source_square() as u16)
                | (action.dest_square() as u16) << 6
                | (action.dest_piece() as u16) << 12,
        )
    }

    #[inline]
    pub fn source_square(self) -> usize {
        (self.0 & 0x3F) as usize
    }

    #[inline]
    pub fn dest_square(self) -> usize {
        ((self.0 >> 6) & 0x3F) as usize
    }

    #[inline]
    pub fn dest_piece(self) -> u8 {
        (self.0 >> 12) as u8
    }

    pub fn matches(self, action: Action) -> bool {
        self == CompactMove::from_action(action)
    }

    /// The action among `moves` this hint refers to
    pub fn find_in(self, moves: &[Action]) -> Option<Action> {
        moves.iter().copied().find(|&mv| self.matches(mv))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub best_move: Option<CompactMove>,
    pub score: i32,
    pub score_type: ScoreType,
    pub depth: u8,
}

pub struct TranspositionTable {
    keys: ZobristKeys,
    verification: Vec<u64>,
    payload: Vec<u64>,
    mask: u64,
    pub hits: u64,
    pub writes: u64,
}

impl TranspositionTable {
    /// Allocate `2^magnitude` slots
    pub fn new(magnitude: u32) -> ChessResult<Self> {
        if !(MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&magnitude) {
            return Err(ChessError::InvalidConfig {
                message: format!(
                    "transposition table magnitude {magnitude} outside {MIN_MAGNITUDE}..={MAX_MAGNITUDE}"
                ),
            });
        }

        let size = 1usize << magnitude;
        debug!(slots = size, "transposition table allocated");

        Ok(TranspositionTable {
            keys: ZobristKeys::new(),
            verification: vec![0; size],
            payload: vec![0; size],
            mask: (size - 1) as u64,
            hits: 0,
            writes: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verification.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verification.is_empty()
    }

    #[inline]
    pub fn hash(&self, position: &Position, color: Color) -> u64 {
        self.keys.hash(position, color)
    }

    /// Store a search result, replacing whatever the bucket held
    pub fn record(
        &mut self,
        position: &Position,
        color: Color,
        action: Action,
        score: i32,
        score_type: ScoreType,
        depth: u8,
    ) {
        let hash = self.hash(position, color);
        let index = (hash & self.mask) as usize;

        let compact = if action.is_none() {
            0
        } else {
            CompactMove::from_action(action).0 as u64
        };

        self.verification[index] = (hash & UPPER_MASK) | OCCUPIED_BIT | depth as u64;
        self.payload[index] = compact
            | (score_type as u64) << SCORE_TYPE_SHIFT
            | (depth as u64) << PAYLOAD_DEPTH_SHIFT
            | (score as u32 as u64) << SCORE_SHIFT;
        self.writes += 1;
    }

    /// Look up `position` with `color` to move; `None` on a miss
    pub fn get_entry(&mut self, position: &Position, color: Color) -> Option<TtEntry> {
        let hash = self.hash(position, color);
        let index = (hash & self.mask) as usize;

        let check = self.verification[index];
        if check & OCCUPIED_BIT == 0 || check & UPPER_MASK != hash & UPPER_MASK {
            return None;
        }
        self.hits += 1;

        let word = self.payload[index];
        let compact = (word & 0xFFFF) as u16;
        Some(TtEntry {
            best_move: if compact == 0 { None } else { Some(CompactMove(compact)) },
            score: (word >> SCORE_SHIFT) as u32 as i32,
            score_type: ScoreType::from_bits(word >> SCORE_TYPE_SHIFT),
            depth: (check & DEPTH_MASK) as u8,
        })
    }

    pub fn clear(&mut self) {
        self.verification.fill(0);
        self.payload.fill(0);
        self.hits = 0;
        self.writes = 0;
    }

    /// Occupied slots per mille, sampled over the first thousand buckets
    pub fn hashfull(&self) -> usize {
        let sample = self.len().min(1000);
        let used = self.verification[..sample]
            .iter()
            .filter(|&&word| word & OCCUPIED_BIT != 0)
            .count();
        used * 1000 / sample
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
