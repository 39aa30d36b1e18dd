//! PackChess - Packed Bitboard Chess Engine
//!
//! A chess rules-and-search library:
//! - Packed 17-word positions and a 64-bit action codec
//! - Magic-bitboard attack tables
//! - Pseudo-legal generation, castling and a generate-then-filter legality check
//! - Check, checkmate and draw classification with game history
//! - MVV-LVA and history/killer move ordering
//! - Transposition table with Zobrist hashing
//! - Negamax alpha-beta search with quiescence

pub mod types;
pub mod bitboard;
pub mod action;
pub mod error;
pub mod position;
pub mod attacks;
pub mod movegen;
pub mod castling;
pub mod status;
pub mod legal;
pub mod game;
pub mod ordering;
pub mod zobrist;
pub mod tt;
pub mod eval;
pub mod config;
pub mod search;
pub mod perft;

pub use action::Action;
pub use attacks::AttackTables;
pub use config::EngineConfig;
pub use error::{ChessError, ChessResult};
pub use eval::{Evaluator, MaterialEvaluator};
pub use game::Game;
pub use movegen::MoveGenerator;
pub use ordering::HistoryTable;
pub use perft::{divide, perft};
pub use position::{CastleSide, Position};
pub use search::SearchEngine;
pub use tt::{ScoreType, TranspositionTable, TtEntry};
pub use types::{Color, BLACK, WHITE};
