//! Error types for PackChess
//!
//! Only construction and self-checks return errors. Corruption discovered on
//! the hot path is a bug and panics instead.

use thiserror::Error;

/// Errors reported by table construction, configuration and position self-checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Total occupancy disagrees with the union or the XOR of the piece masks
    #[error("occupancy mismatch: stored {stored:#018x}, union {union:#018x}, xor {xor:#018x}")]
    OccupancyMismatch { stored: u64, union: u64, xor: u64 },

    /// Two piece masks claim the same square
    #[error("square {square} is claimed by more than one piece mask")]
    OverlappingPieces { square: usize },

    /// A per-color occupancy word disagrees with that color's piece masks
    #[error("color {color} occupancy mismatch: stored {stored:#018x}, expected {expected:#018x}")]
    ColorMismatch { color: u8, stored: u64, expected: u64 },

    /// Two blocker sets of one square hashed to the same slot with different attacks
    #[error("{piece} magic collision on square {square} at index {index}")]
    MagicCollision { piece: &'static str, square: usize, index: usize },

    /// A configuration value outside its accepted range
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for PackChess operations
pub type ChessResult<T> = Result<T, ChessError>;
