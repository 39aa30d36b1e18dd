//! PackChess - Move Ordering
//!
//! Two orderings feed the search:
//! - `sort_captures`: most valuable victim, least valuable attacker. The
//!   score is packed into the priority tag of each action word so that a
//!   plain descending sort of the words is a sort by score.
//! - `HistoryTable::order_moves`: captures in a band above every quiet move,
//!   quiet moves by history (cutoffs minus plays) and killer slots.
//!
//! Both use an insertion sort; move lists are short and often near-sorted.

use crate::action::Action;
use crate::types::{get_piece_type, Color};

/// MVV-LVA piece values, indexed by piece type
pub const MVV_LVA_VALUES: [i64; 7] = [0, 1, 3, 3, 5, 9, 10];

/// Keeps `victim - attacker` non-negative inside the priority tag
const MVV_LVA_BIAS: i64 = 16;

/// Plies with killer slots
pub const MAX_PLY: usize = 128;

const HISTORY_SIZE: usize = 64 * 64 * 2;
const MAX_CUTOFF_EXPONENT: usize = 24;

/// Any capture outranks any quiet move
const CAPTURE_BAND: i64 = 1 << 50;
const PRIMARY_KILLER_BONUS: i64 = 1 << 42;
const SECONDARY_KILLER_BONUS: i64 = 1 << 41;

/// Victim value minus attacker value; zero for quiet moves
#[inline]
pub fn mvv_lva(action: Action) -> i64 {
    if !action.is_capture() {
        return 0;
    }
    MVV_LVA_VALUES[get_piece_type(action.captured_piece()) as usize]
        - MVV_LVA_VALUES[get_piece_type(action.source_piece()) as usize]
}

/// Stable in-place insertion sort; `before(a, b)` means `a` belongs ahead of `b`
fn insertion_sort_by<T: Copy>(items: &mut [T], before: impl Fn(&T, &T) -> bool) {
    for i in 1..items.len() {
        let item = items[i];
        let mut j = i;
        while j > 0 && before(&item, &items[j - 1]) {
            items[j] = items[j - 1];
            j -= 1;
        }
        items[j] = item;
    }
}

/// Sort captures best-first by MVV-LVA. Tags are stripped again afterwards.
pub fn sort_captures(moves: &mut [Action]) {
    for mv in moves.iter_mut() {
        let priority = (mvv_lva(*mv) + MVV_LVA_BIAS).max(0) as u64;
        *mv = mv.with_priority(priority);
    }

    insertion_sort_by(moves, |a, b| a.bits() > b.bits());

    for mv in moves.iter_mut() {
        *mv = mv.strip_priority();
    }
}

#[inline]
fn history_index(color: Color, action: Action) -> usize {
    (action.source_square() * 64 + action.dest_square()) * 2 + color as usize
}

/// History counters and killer slots, shared by all nodes of a search
#[derive(Clone)]
pub struct HistoryTable {
    played: Vec<i64>,
    cutoff: Vec<i64>,
    /// Per ply: primary then secondary killer
    killers: Vec<[Action; 2]>,
    killers_enabled: bool,
}

impl HistoryTable {
    pub fn new() -> Self {
        HistoryTable {
            played: vec![0; HISTORY_SIZE],
            cutoff: vec![0; HISTORY_SIZE],
            killers: vec![[Action::NONE; 2]; MAX_PLY],
            killers_enabled: true,
        }
    }

    /// Same table, but killer slots never add to a move's score
    pub fn without_killers(mut self) -> Self {
        self.killers_enabled = false;
        self
    }

    /// Count one search of `action` by `color`
    pub fn record_played_move(&mut self, color: Color, action: Action) {
        let idx = history_index(color, action);
        self.played[idx] = self.played[idx].saturating_add(1);
    }

    /// Credit `action` with a cutoff at `ply` and rotate the ply's killers
    pub fn record_cut_off_move(&mut self, color: Color, ply: usize, action: Action) {
        let action = action.strip_priority();
        let idx = history_index(color, action);
        let weight = 1i64 << ply.min(MAX_CUTOFF_EXPONENT);
        self.cutoff[idx] = self.cutoff[idx].saturating_add(weight);

        if let Some(slots) = self.killers.get_mut(ply) {
            if slots[0] != action {
                slots[1] = slots[0];
                slots[0] = action;
            }
        }
    }

    /// Primary and secondary killer at `ply`
    pub fn killers(&self, ply: usize) -> [Action; 2] {
        self.killers.get(ply).copied().unwrap_or([Action::NONE; 2])
    }

    pub fn played_count(&self, color: Color, action: Action) -> i64 {
        self.played[history_index(color, action)]
    }

    pub fn cutoff_count(&self, color: Color, action: Action) -> i64 {
        self.cutoff[history_index(color, action)]
    }

    /// Ordering score of `action` for `color` at `ply`; higher is searched first
    pub fn score(&self, color: Color, ply: usize, action: Action) -> i64 {
        if action.is_capture() {
            return CAPTURE_BAND + mvv_lva(action);
        }

        let idx = history_index(color, action);
        let mut score = self.cutoff[idx] - self.played[idx];

        if self.killers_enabled {
            let [primary, secondary] = self.killers(ply);
            if action == primary {
                score += PRIMARY_KILLER_BONUS;
            } else if action == secondary {
                score += SECONDARY_KILLER_BONUS;
            }
        }

        score
    }

    /// Sort `moves` best-first. `hash_move`, when present in the list, goes first.
    pub fn order_moves(&self, color: Color, ply: usize, moves: &mut [Action], hash_move: Option<Action>) {
        let mut scored: Vec<(i64, Action)> = moves
            .iter()
            .map(|&mv| {
                let score = if Some(mv) == hash_move {
                    i64::MAX
                } else {
                    self.score(color, ply, mv)
                };
                (score, mv)
            })
            .collect();

        insertion_sort_by(&mut scored, |a, b| a.0 > b.0);

        for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
            *slot = mv;
        }
    }

    pub fn clear(&mut self) {
        self.played.fill(0);
        self.cutoff.fill(0);
        self.killers.fill([Action::NONE; 2]);
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        HistoryTable::new()
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
