//! Maze generation parameters.

use mazer_core::{GridError, Location};

/// Obstruction density used by [`MazeConfig::new`].
pub const DEFAULT_SPARSENESS: f64 = 0.15;

/// Parameters for generating a maze.
///
/// The start and goal default to opposite corners.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    /// Probability that any given cell is blocked, in `[0, 1]`.
    pub sparseness: f64,
    pub start: Location,
    pub goal: Location,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl MazeConfig {
    /// A `rows × columns` maze from the top-left to the bottom-right corner.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            sparseness: DEFAULT_SPARSENESS,
            start: Location::ORIGIN,
            goal: Location::new(rows.saturating_sub(1), columns.saturating_sub(1)),
        }
    }

    /// Set the obstruction density (builder).
    pub fn with_sparseness(mut self, sparseness: f64) -> Self {
        self.sparseness = sparseness;
        self
    }

    /// Set the start location (builder).
    pub fn with_start(mut self, start: Location) -> Self {
        self.start = start;
        self
    }

    /// Set the goal location (builder).
    pub fn with_goal(mut self, goal: Location) -> Self {
        self.goal = goal;
        self
    }

    /// Check the obstruction density.
    ///
    /// Dimensions and endpoints are checked by the grid itself when it is
    /// built.
    pub fn validate(&self) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&self.sparseness) {
            return Err(GridError::InvalidSparseness(self.sparseness));
        }
        Ok(())
    }
}
