//! Maze solvers for mazer grids.
//!
//! - **BFS** shortest-path search ([`Solver::solve`], [`Solver::bfs_path`])
//! - **DFS** search with backtracking ([`Solver::dfs_path`]), an alternative
//!   [`Strategy`] that finds *a* path rather than a shortest one
//!
//! All searches run through [`Solver`], which owns and reuses its internal
//! caches so that repeated solves incur no allocations after warm-up. A
//! search never fails: an unreachable goal is reported as
//! [`Solution::NoSolution`].
//!
//! ```
//! use mazer_core::{Grid, Location};
//! use mazer_paths::{Solution, solve};
//!
//! let grid = Grid::new(5, 30, Location::new(0, 0), Location::new(4, 29)).unwrap();
//! match solve(&grid) {
//!     Solution::Found(path) => println!("{}", grid.render(Some(path.locations()))),
//!     Solution::NoSolution => println!("No solution"),
//! }
//! ```

mod bfs;
mod dfs;
mod distance;
mod solution;
mod solver;
mod traits;

pub use distance::manhattan;
pub use solution::{ParseStrategyError, Path, Solution, Strategy};
pub use solver::{Solver, solve};
pub use traits::Pather;
