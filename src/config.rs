//! PackChess - Engine Configuration
//!
//! Tunables for `SearchEngine`. Defaults match a 2^20-slot transposition
//! table and a 64-ply recursion bound.

use crate::error::{ChessError, ChessResult};
use crate::ordering::MAX_PLY;
use crate::tt::{MAX_MAGNITUDE, MIN_MAGNITUDE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// log2 of the transposition table slot count
    pub tt_magnitude: u32,
    /// Hard bound on recursion depth, counted in plies from the root
    pub max_ply: usize,
    pub use_tt: bool,
    pub use_killers: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tt_magnitude: 20,
            max_ply: 64,
            use_tt: true,
            use_killers: true,
        }
    }
}

impl EngineConfig {
    pub fn with_tt_magnitude(mut self, magnitude: u32) -> Self {
        self.tt_magnitude = magnitude;
        self
    }

    pub fn with_max_ply(mut self, max_ply: usize) -> Self {
        self.max_ply = max_ply;
        self
    }

    pub fn with_tt(mut self, enabled: bool) -> Self {
        self.use_tt = enabled;
        self
    }

    pub fn with_killers(mut self, enabled: bool) -> Self {
        self.use_killers = enabled;
        self
    }

    pub fn validate(&self) -> ChessResult<()> {
        if !(MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&self.tt_magnitude) {
            return Err(ChessError::InvalidConfig {
                message: format!(
                    "tt_magnitude {} outside {MIN_MAGNITUDE}..={MAX_MAGNITUDE}",
                    self.tt_magnitude
                ),
            });
        }
        if self.max_ply == 0 || self.max_ply > MAX_PLY {
            return Err(ChessError::InvalidConfig {
                message: format!("max_ply {} outside 1..={MAX_PLY}", self.max_ply),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let too_big = EngineConfig::default().with_tt_magnitude(31);
        assert!(matches!(too_big.validate(), Err(ChessError::InvalidConfig { .. })));

        assert!(EngineConfig::default().with_tt_magnitude(0).validate().is_err());
        assert!(EngineConfig::default().with_max_ply(0).validate().is_err());
        assert!(EngineConfig::default().with_max_ply(MAX_PLY + 1).validate().is_err());
        assert!(EngineConfig::default().with_max_ply(MAX_PLY).validate().is_ok());
    }
}
