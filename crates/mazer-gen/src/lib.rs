//! Random maze generation for mazer: obstruction sampling over a
//! [`Grid`](mazer_core::Grid) with an injectable random source.

pub mod config;
pub mod mapgen;

pub use config::{DEFAULT_SPARSENESS, MazeConfig};
pub use mapgen::{MazeGen, generate};
