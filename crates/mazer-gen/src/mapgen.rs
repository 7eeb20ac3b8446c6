//! Random obstruction sampling.
//!
//! Every cell is blocked independently with probability `sparseness`. This is
//! not a perfect-maze algorithm: nothing guarantees that the goal can be
//! reached from the start.

use mazer_core::{CellState, Grid, GridError};
use rand::{Rng, RngExt};

use crate::config::MazeConfig;

/// Maze generator driven by an injected random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze.
    ///
    /// Cells are sampled in row-major order, one uniform `f64` draw each; a
    /// cell is blocked when its draw is below `config.sparseness`. The start
    /// and goal are stamped last.
    pub fn generate(&mut self, config: &MazeConfig) -> Result<Grid, GridError> {
        config.validate()?;
        let sparseness = config.sparseness;
        let rng = &mut self.rng;
        let grid = Grid::with_obstructions(
            config.rows,
            config.columns,
            config.start,
            config.goal,
            |_| {
                let r: f64 = rng.random();
                r < sparseness
            },
        )?;
        log::debug!(
            "generated {}x{} maze, sparseness {}, {} blocked",
            grid.rows(),
            grid.columns(),
            sparseness,
            grid.count(CellState::Blocked)
        );
        Ok(grid)
    }
}

/// Generate a single maze with `rng`. See [`MazeGen::generate`].
pub fn generate<R: Rng>(config: &MazeConfig, rng: R) -> Result<Grid, GridError> {
    MazeGen::new(rng).generate(config)
}
