//! Hypergeometric Keno probabilities.
//!
//! The house draws `drawn_balls` from a pool of `total_balls`; the player
//! marks `marked` spots. The chance of catching exactly `caught` of them is
//!
//! ```text
//! C(marked, caught) * P(drawn, caught) * P(total - drawn, marked - caught)
//! ------------------------------------------------------------------------
//!                         P(total, marked)
//! ```
//!
//! where `P(n, k)` is the partial factorial `n * (n - 1) * ... (k terms)`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::combinatorics::{combinations, partial_factorial, MAX_EXACT_FACTORIAL};
use super::error::KenoError;

/// Ball counts and spot limit for one Keno variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Size of the ball pool (80 in standard Keno).
    pub total_balls: u32,
    /// Balls the house draws each game (20 in standard Keno).
    pub drawn_balls: u32,
    /// Most spots a player may mark (20 in standard Keno).
    pub max_spots: u32,
}

impl GameRules {
    /// Standard casino Keno: 20 of 80 balls drawn, up to 20 spots.
    pub const STANDARD: Self = Self {
        total_balls: 80,
        drawn_balls: 20,
        max_spots: 20,
    };

    /// Builds and validates a rule set.
    ///
    /// # Errors
    /// Returns [`KenoError::InvalidRules`] unless `drawn_balls <= total_balls`,
    /// `1 <= max_spots <= total_balls` and `max_spots <= 20`.
    pub fn new(total_balls: u32, drawn_balls: u32, max_spots: u32) -> Result<Self, KenoError> {
        let rules = Self {
            total_balls,
            drawn_balls,
            max_spots,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// Checks the rule invariants.
    ///
    /// # Errors
    /// See [`GameRules::new`].
    pub fn validate(&self) -> Result<(), KenoError> {
        if self.max_spots == 0 {
            return Err(KenoError::InvalidRules(
                "max_spots must be at least 1".to_string(),
            ));
        }
        if self.drawn_balls > self.total_balls {
            return Err(KenoError::InvalidRules(format!(
                "drawn_balls ({}) exceeds total_balls ({})",
                self.drawn_balls, self.total_balls
            )));
        }
        if self.max_spots > self.total_balls {
            return Err(KenoError::InvalidRules(format!(
                "max_spots ({}) exceeds total_balls ({})",
                self.max_spots, self.total_balls
            )));
        }
        if self.max_spots > MAX_EXACT_FACTORIAL {
            return Err(KenoError::InvalidRules(format!(
                "max_spots ({}) exceeds the exact factorial limit of {MAX_EXACT_FACTORIAL}",
                self.max_spots
            )));
        }
        Ok(())
    }

    /// Balls left in the pool after the draw.
    pub const fn undrawn_balls(&self) -> u32 {
        self.total_balls.saturating_sub(self.drawn_balls)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Probability of catching exactly `caught` balls with `marked` spots.
///
/// Returns 0.0 when `caught > marked`.
///
/// # Panics
/// Panics if `marked > 20` (exact combination limit).
/// [`ProbabilityMatrix::compute`] validates its rules first and never makes
/// such a call.
pub fn keno_probability(rules: &GameRules, marked: u32, caught: u32) -> f64 {
    if caught > marked {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let ways = combinations(marked, caught) as f64;
    let hits = partial_factorial(rules.drawn_balls, caught);
    let misses = partial_factorial(rules.undrawn_balls(), marked - caught);
    let picks = partial_factorial(rules.total_balls, marked);

    ways * hits * misses / picks
}

/// [`keno_probability`] under the standard 80-ball / 20-draw rules.
pub fn standard_keno_probability(marked: u32, caught: u32) -> f64 {
    keno_probability(&GameRules::STANDARD, marked, caught)
}

/// Catch probabilities for every (spots marked, balls caught) pair.
///
/// Row `i` holds `i + 1` spots marked; column `j` holds `j` balls caught.
/// Cells with `j > i + 1` are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMatrix {
    rules: GameRules,
    cells: Vec<Vec<f64>>,
}

impl ProbabilityMatrix {
    /// Populates the full `max_spots x (max_spots + 1)` grid.
    ///
    /// # Errors
    /// Returns [`KenoError::InvalidRules`] if `rules` fail
    /// [`GameRules::validate`].
    pub fn compute(rules: &GameRules) -> Result<Self, KenoError> {
        rules.validate()?;

        let rows = rules.max_spots as usize;
        let columns = rows + 1;
        let mut cells = vec![vec![0.0; columns]; rows];

        for marked in 1..=rules.max_spots {
            let row = &mut cells[marked as usize - 1];
            for caught in 0..=rules.max_spots {
                if caught <= marked {
                    let p = keno_probability(rules, marked, caught);
                    trace!(marked, caught, probability = p, "catch probability");
                    row[caught as usize] = p;
                }
            }
            debug!(marked, row_sum = row.iter().sum::<f64>(), "row populated");
        }

        Ok(Self {
            rules: *rules,
            cells,
        })
    }

    /// The rules this matrix was computed for.
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Number of rows (one per spots-marked count).
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (catch counts `0..=max_spots`).
    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Catch distribution for `marked` spots, or `None` out of range.
    pub fn row(&self, marked: usize) -> Option<&[f64]> {
        marked
            .checked_sub(1)
            .and_then(|i| self.cells.get(i))
            .map(Vec::as_slice)
    }

    /// Probability of `caught` balls with `marked` spots; 0.0 out of range.
    pub fn get(&self, marked: usize, caught: usize) -> f64 {
        self.row(marked)
            .and_then(|row| row.get(caught))
            .copied()
            .unwrap_or(0.0)
    }

    /// Total probability mass of a row. Should be 1.0 for every valid row.
    pub fn row_sum(&self, marked: usize) -> f64 {
        self.row(marked).map_or(0.0, |row| row.iter().sum())
    }

    /// Raw grid, indexed `[marked - 1][caught]`.
    pub fn cells(&self) -> &[Vec<f64>] {
        &self.cells
    }
}
