//! PackChess - Search Engine Module
//!
//! Negamax with alpha-beta pruning and a capture-only quiescence extension.
//! Scores are always from the point of view of the side to move at the
//! node. The engine owns everything it mutates: transposition table,
//! history/killer table and node counter.

use tracing::debug;

use crate::action::Action;
use crate::config::EngineConfig;
use crate::error::ChessResult;
use crate::eval::{Evaluator, MaterialEvaluator};
use crate::movegen::MoveGenerator;
use crate::ordering::{sort_captures, HistoryTable, MAX_PLY};
use crate::position::{Position, FIFTY_MOVE_PLIES};
use crate::tt::{ScoreType, TranspositionTable};
use crate::types::{opponent, Color};

pub const INFINITY: i32 = 100_000;
/// Score of being mated at the root; mates further away score closer to zero
pub const MATE_SCORE: i32 = 50_000;
/// Scores at least this far from zero are mates within `MAX_PLY`
const MATE_BOUND: i32 = MATE_SCORE - MAX_PLY as i32;

pub struct SearchEngine<E: Evaluator = MaterialEvaluator> {
    generator: MoveGenerator,
    tt: TranspositionTable,
    history: HistoryTable,
    evaluator: E,
    config: EngineConfig,
    pub nodes_searched: u64,
}

impl SearchEngine<MaterialEvaluator> {
    pub fn with_defaults() -> ChessResult<Self> {
        SearchEngine::new(EngineConfig::default(), MaterialEvaluator)
    }
}

impl<E: Evaluator> SearchEngine<E> {
    pub fn new(config: EngineConfig, evaluator: E) -> ChessResult<Self> {
        config.validate()?;

        let history = if config.use_killers {
            HistoryTable::new()
        } else {
            HistoryTable::new().without_killers()
        };

        Ok(SearchEngine {
            generator: MoveGenerator::new()?,
            tt: TranspositionTable::new(config.tt_magnitude)?,
            history,
            evaluator,
            config,
            nodes_searched: 0,
        })
    }

    pub fn generator(&self) -> &MoveGenerator {
        &self.generator
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryTable {
        &self.history
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Forget everything learned so far (new game)
    pub fn clear(&mut self) {
        self.tt.clear();
        self.history.clear();
        self.nodes_searched = 0;
    }

    /// Negamax score of `position` for `color` searched `depth` plies deep
    pub fn evaluate_position(&mut self, color: Color, position: &Position, depth: u32, alpha: i32, beta: i32) -> i32 {
        self.negamax(color, position, depth, alpha, beta, 0)
    }

    /// Quiescence score of `position` for `color`
    pub fn evaluate_quiescence(&mut self, color: Color, position: &Position, alpha: i32, beta: i32) -> i32 {
        self.quiescence(color, position, alpha, beta, 0)
    }

    /// Best legal action for `color`, or `None` when there is none
    pub fn choose_best_move(&mut self, color: Color, position: &Position, depth: u32) -> Option<Action> {
        self.search_root(color, position, depth).map(|(action, _)| action)
    }

    /// Best legal action for `color` together with its score
    pub fn search_root(&mut self, color: Color, position: &Position, depth: u32) -> Option<(Action, i32)> {
        self.nodes_searched = 0;

        let mut moves = self.generator.legal_moves(position, color);
        if moves.is_empty() {
            debug!(depth, "no legal move at the root");
            return None;
        }

        let hash_move = self.probe_hash_move(position, color, &moves);
        self.history.order_moves(color, 0, &mut moves, hash_move);

        let child_depth = depth.saturating_sub(1);
        let mut best: Option<(Action, i32)> = None;
        let mut alpha = -INFINITY;

        for mv in moves {
            let child = position.apply(mv);
            self.history.record_played_move(color, mv);
            let score = -self.negamax(opponent(color), &child, child_depth, -INFINITY, -alpha, 1);

            if best.is_none() || score > alpha {
                alpha = score;
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            if self.config.use_tt && !near_fifty_move_draw(position, depth) {
                self.tt.record(position, color, mv, score, ScoreType::Exact, tt_depth(depth));
            }
            debug!(
                depth,
                score,
                nodes = self.nodes_searched,
                best = %mv,
                "root search finished"
            );
        }

        best
    }

    fn probe_hash_move(&mut self, position: &Position, color: Color, moves: &[Action]) -> Option<Action> {
        if !self.config.use_tt {
            return None;
        }
        self.tt
            .get_entry(position, color)
            .and_then(|entry| entry.best_move)
            .and_then(|hint| hint.find_in(moves))
    }

    fn negamax(&mut self, color: Color, position: &Position, depth: u32, mut alpha: i32, beta: i32, ply: usize) -> i32 {
        self.nodes_searched += 1;

        if ply >= self.config.max_ply {
            return self.evaluator.evaluate(position, color);
        }

        let mut moves = self.generator.legal_moves(position, color);

        // Checkmate / stalemate
        if moves.is_empty() {
            return if self.generator.is_in_check(color, position) {
                -(MATE_SCORE - ply as i32)
            } else {
                0
            };
        }

        // The key ignores the clock, so the draw must be seen before the table
        if position.is_fifty_move_draw() {
            return 0;
        }

        let original_alpha = alpha;
        let use_tt = self.config.use_tt && !near_fifty_move_draw(position, depth);
        let mut hash_hint = None;

        if use_tt {
            if let Some(entry) = self.tt.get_entry(position, color) {
                if ply > 0 && entry.depth as u32 >= depth {
                    let score = score_from_tt(entry.score, ply);
                    match entry.score_type {
                        ScoreType::Exact => return score,
                        ScoreType::LowerBound if score >= beta => return beta,
                        ScoreType::UpperBound if score <= alpha => return alpha,
                        _ => {}
                    }
                }
                hash_hint = entry.best_move;
            }
        }

        if depth == 0 {
            return self.quiescence(color, position, alpha, beta, ply);
        }

        let hash_move = hash_hint.and_then(|hint| hint.find_in(&moves));
        self.history.order_moves(color, ply, &mut moves, hash_move);

        let mut best_move = Action::NONE;
        let mut best_score = -INFINITY;

        for mv in moves {
            let child = position.apply(mv);
            self.history.record_played_move(color, mv);
            let score = -self.negamax(opponent(color), &child, depth - 1, -beta, -alpha, ply + 1);

            if score > best_score {
                best_score = score;
                best_move = mv;
            }

            if score >= beta {
                self.history.record_cut_off_move(color, ply, mv);
                if use_tt {
                    self.tt.record(position, color, mv, score_to_tt(beta, ply), ScoreType::LowerBound, tt_depth(depth));
                }
                return beta;
            }

            if score > alpha {
                alpha = score;
            }
        }

        if use_tt {
            let score_type = if alpha > original_alpha {
                ScoreType::Exact
            } else {
                ScoreType::UpperBound
            };
            self.tt.record(position, color, best_move, score_to_tt(alpha, ply), score_type, tt_depth(depth));
        }

        alpha
    }

    fn quiescence(&mut self, color: Color, position: &Position, mut alpha: i32, beta: i32, ply: usize) -> i32 {
        self.nodes_searched += 1;

        let stand_pat = self.evaluator.evaluate(position, color);
        if ply >= self.config.max_ply {
            return stand_pat;
        }

        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut captures = self.generator.legal_captures(position, color);
        sort_captures(&mut captures);

        for mv in captures {
            let score = -self.quiescence(opponent(color), &position.apply(mv), -beta, -alpha, ply + 1);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

/// A subtree this deep may cross the fifty-move boundary, which the key cannot see
#[inline]
fn near_fifty_move_draw(position: &Position, depth: u32) -> bool {
    position.half_move_clock() + depth >= FIFTY_MOVE_PLIES
}

/// Mate scores are stored relative to the node, not the root
#[inline]
fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_BOUND {
        score + ply as i32
    } else if score <= -MATE_BOUND {
        score - ply as i32
    } else {
        score
    }
}

#[inline]
fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_BOUND {
        score - ply as i32
    } else if score <= -MATE_BOUND {
        score + ply as i32
    } else {
        score
    }
}

#[inline]
fn tt_depth(depth: u32) -> u8 {
    depth.min(u8::MAX as u32) as u8
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
