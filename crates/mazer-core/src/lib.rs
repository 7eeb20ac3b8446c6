//! **mazer-core**: grid-based maze core types.
//!
//! This crate provides the foundational types shared by the *mazer*
//! crates: cell coordinates and directions, the closed set of cell states,
//! and the [`Grid`] that holds a maze together with its start and goal.
//!
//! It has no notion of randomness or searching; see `mazer-gen` for
//! obstruction sampling and `mazer-paths` for solvers.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use error::{Endpoint, GridError};
pub use geom::{Direction, Location};
pub use grid::Grid;
