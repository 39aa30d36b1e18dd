//! PackChess - Move Generator Module
//!
//! Pseudo-legal move generation per piece type. Generated actions respect how
//! each piece moves but may leave the mover's own king in check; the legality
//! filter in `legal.rs` removes those.
//!
//! Every generator appends to a caller-provided list. With `captures_only`
//! set, only actions carrying a captured piece are produced.

use crate::action::Action;
use crate::attacks::AttackTables;
use crate::bitboard::{pop_lsb, square_bb, RANK_1, RANK_2, RANK_7, RANK_8};
use crate::error::ChessResult;
use crate::position::Position;
use crate::types::*;

/// Promotion choices, most valuable first
const PROMOTION_TYPES: [u8; 4] = [QUEEN, ROOK, BISHOP, KNIGHT];

/// Move generator for chess positions. Owns the precomputed attack tables.
pub struct MoveGenerator {
    tables: AttackTables,
}

impl MoveGenerator {
    /// Build the attack tables and wrap them in a generator
    pub fn new() -> ChessResult<Self> {
        Ok(MoveGenerator { tables: AttackTables::new()? })
    }

    pub fn with_tables(tables: AttackTables) -> Self {
        MoveGenerator { tables }
    }

    #[inline]
    pub fn tables(&self) -> &AttackTables {
        &self.tables
    }

    /// Generate all pseudo-legal moves, castling included
    pub fn pseudo_legal_moves(&self, pos: &Position, color: Color) -> Vec<Action> {
        let mut moves = Vec::with_capacity(64);
        self.generate_rook_moves(pos, color, &mut moves, false);
        self.generate_bishop_moves(pos, color, &mut moves, false);
        self.generate_knight_moves(pos, color, &mut moves, false);
        self.generate_queen_moves(pos, color, &mut moves, false);
        self.generate_king_moves(pos, color, &mut moves, false);
        self.generate_pawn_moves(pos, color, &mut moves, false);
        self.generate_castling_moves(pos, color, &mut moves);
        moves
    }

    /// Generate all pseudo-legal captures (castling never captures)
    pub fn pseudo_legal_captures(&self, pos: &Position, color: Color) -> Vec<Action> {
        let mut moves = Vec::with_capacity(16);
        self.generate_rook_moves(pos, color, &mut moves, true);
        self.generate_bishop_moves(pos, color, &mut moves, true);
        self.generate_knight_moves(pos, color, &mut moves, true);
        self.generate_queen_moves(pos, color, &mut moves, true);
        self.generate_king_moves(pos, color, &mut moves, true);
        self.generate_pawn_moves(pos, color, &mut moves, true);
        moves
    }

    /// Turn a target set into actions: captures where the opponent stands, quiet moves elsewhere
    fn push_targets(
        &self,
        pos: &Position,
        code: u8,
        from: usize,
        attacks: u64,
        moves: &mut Vec<Action>,
        captures_only: bool,
    ) {
        let color = get_piece_color(code);
        let enemies = pos.color_mask(opponent(color));
        let mut targets = attacks & !pos.color_mask(color);
        if captures_only {
            targets &= enemies;
        }

        while targets != 0 {
            let to = pop_lsb(&mut targets);
            if enemies & square_bb(to) != 0 {
                moves.push(Action::capture(code, from, to, pos.occupant(to)));
            } else {
                moves.push(Action::quiet(code, from, to));
            }
        }
    }

    /// Generate pawn pushes, double pushes, captures, en passant and promotions
    pub fn generate_pawn_moves(&self, pos: &Position, color: Color, moves: &mut Vec<Action>, captures_only: bool) {
        let code = piece_code(PAWN, color);
        let is_white = color == WHITE;
        let empty = !pos.occupied();
        let enemies = pos.color_mask(opponent(color));

        let forward: i32 = if is_white { 8 } else { -8 };
        let start_rank = if is_white { RANK_2 } else { RANK_7 };
        let promo_rank = if is_white { RANK_8 } else { RANK_1 };

        let en_passant = pos.en_passant_file().map(|file| {
            let target = if is_white { 40 + file } else { 16 + file };
            let victim_sq = (target as i32 - forward) as usize;
            (target, victim_sq)
        });

        let mut pawns = pos.pieces(PAWN, color);
        while pawns != 0 {
            let from = pop_lsb(&mut pawns);
            let one = from as i32 + forward;
            if !(0..64).contains(&one) {
                continue;
            }
            let one = one as usize;

            // Single and double push
            if !captures_only && empty & square_bb(one) != 0 {
                if promo_rank & square_bb(one) != 0 {
                    for promo in PROMOTION_TYPES {
                        moves.push(Action::promotion(code, from, one, piece_code(promo, color), NO_PIECE));
                    }
                } else {
                    moves.push(Action::quiet(code, from, one));

                    if start_rank & square_bb(from) != 0 {
                        let two = (one as i32 + forward) as usize;
                        if empty & square_bb(two) != 0 {
                            moves.push(Action::double_push(code, from, two));
                        }
                    }
                }
            }

            // Diagonal captures
            let attacks = self.tables.pawn_attacks(from, color);
            let mut targets = attacks & enemies;
            while targets != 0 {
                let to = pop_lsb(&mut targets);
                let victim = pos.occupant(to);
                if promo_rank & square_bb(to) != 0 {
                    for promo in PROMOTION_TYPES {
                        moves.push(Action::promotion(code, from, to, piece_code(promo, color), victim));
                    }
                } else {
                    moves.push(Action::capture(code, from, to, victim));
                }
            }

            // En passant
            if let Some((target, victim_sq)) = en_passant {
                let enemy_pawn = piece_code(PAWN, opponent(color));
                if attacks & square_bb(target) != 0
                    && empty & square_bb(target) != 0
                    && pos.pieces(PAWN, opponent(color)) & square_bb(victim_sq) != 0
                {
                    moves.push(Action::en_passant(code, from, target, enemy_pawn, victim_sq));
                }
            }
        }
    }

    /// Generate knight moves
    pub fn generate_knight_moves(&self, pos: &Position, color: Color, moves: &mut Vec<Action>, captures_only: bool) {
        let code = piece_code(KNIGHT, color);
        let mut knights = pos.pieces(KNIGHT, color);
        while knights != 0 {
            let from = pop_lsb(&mut knights);
            self.push_targets(pos, code, from, self.tables.knight_attacks(from), moves, captures_only);
        }
    }

    /// Generate ordinary king steps (castling lives in `castling.rs`)
    pub fn generate_king_moves(&self, pos: &Position, color: Color, moves: &mut Vec<Action>, captures_only: bool) {
        let code = piece_code(KING, color);
        let mut kings = pos.pieces(KING, color);
        while kings != 0 {
            let from = pop_lsb(&mut kings);
            self.push_targets(pos, code, from, self.tables.king_attacks(from), moves, captures_only);
        }
    }

    pub fn generate_bishop_moves(&self, pos: &Position, color: Color, moves: &mut Vec<Action>, captures_only: bool) {
        let code = piece_code(BISHOP, color);
        let occupied = pos.occupied();
        let mut bishops = pos.pieces(BISHOP, color);
        while bishops != 0 {
            let from = pop_lsb(&mut bishops);
            self.push_targets(pos, code, from, self.tables.bishop_attacks(from, occupied), moves, captures_only);
        }
    }

    pub fn generate_rook_moves(&self, pos: &Position, color: Color, moves: &mut Vec<Action>, captures_only: bool) {
        let code = piece_code(ROOK, color);
        let occupied = pos.occupied();
        let mut rooks = pos.pieces(ROOK, color);
        while rooks != 0 {
            let from = pop_lsb(&mut rooks);
            self.push_targets(pos, code, from, self.tables.rook_attacks(from, occupied), moves, captures_only);
        }
    }

    pub fn generate_queen_moves(&self, pos: &Position, color: Color, moves: &mut Vec<Action>, captures_only: bool) {
        let code = piece_code(QUEEN, color);
        let occupied = pos.occupied();
        let mut queens = pos.pieces(QUEEN, color);
        while queens != 0 {
            let from = pop_lsb(&mut queens);
            self.push_targets(pos, code, from, self.tables.queen_attacks(from, occupied), moves, captures_only);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
