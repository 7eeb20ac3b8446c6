//! Search results: [`Path`], [`Solution`], and the [`Strategy`] that
//! produced them.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use mazer_core::{Direction, Grid, Location};

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A non-empty sequence of locations from a start to a goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Location>", into = "Vec<Location>")
)]
pub struct Path(Vec<Location>);

impl Path {
    /// Wrap a sequence of locations. Returns `None` if it is empty.
    pub fn from_locations(locations: Vec<Location>) -> Option<Self> {
        (!locations.is_empty()).then_some(Self(locations))
    }

    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.0
    }

    #[inline]
    pub fn into_locations(self) -> Vec<Location> {
        self.0
    }

    /// Number of moves, one less than the number of locations.
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    /// First location.
    #[inline]
    pub fn start(&self) -> Location {
        self.0[0]
    }

    /// Last location.
    #[inline]
    pub fn goal(&self) -> Location {
        self.0[self.0.len() - 1]
    }

    /// The move taken at each step. Pairs that are not adjacent are skipped.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.windows(2).filter_map(|w| w[0].direction_to(w[1]))
    }

    /// Whether this path solves `grid`: it runs from the grid's start to its
    /// goal, every location is in bounds and open, and consecutive locations
    /// are 4-adjacent.
    pub fn is_valid_for(&self, grid: &Grid) -> bool {
        self.start() == grid.start()
            && self.goal() == grid.goal()
            && self
                .0
                .iter()
                .all(|&l| grid.contains(l) && !grid.is_blocked(l))
            && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl Deref for Path {
    type Target = [Location];

    #[inline]
    fn deref(&self) -> &[Location] {
        &self.0
    }
}

impl AsRef<[Location]> for Path {
    #[inline]
    fn as_ref(&self) -> &[Location] {
        &self.0
    }
}

impl TryFrom<Vec<Location>> for Path {
    type Error = &'static str;

    fn try_from(locations: Vec<Location>) -> Result<Self, Self::Error> {
        Self::from_locations(locations).ok_or("path: must contain at least one location")
    }
}

impl From<Path> for Vec<Location> {
    fn from(p: Path) -> Self {
        p.0
    }
}

// ---------------------------------------------------------------------------
// Solution
// ---------------------------------------------------------------------------

/// Outcome of solving a maze. Both variants are ordinary results.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solution {
    Found(Path),
    NoSolution,
}

impl Solution {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Solution::Found(p) => Some(p),
            Solution::NoSolution => None,
        }
    }

    #[inline]
    pub fn into_path(self) -> Option<Path> {
        match self {
            Solution::Found(p) => Some(p),
            Solution::NoSolution => None,
        }
    }
}

impl From<Option<Vec<Location>>> for Solution {
    fn from(locations: Option<Vec<Location>>) -> Self {
        match locations.and_then(Path::from_locations) {
            Some(p) => Solution::Found(p),
            None => Solution::NoSolution,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Found(p) => {
                let n = p.steps();
                write!(f, "path of {n} step{}", if n == 1 { "" } else { "s" })
            }
            Solution::NoSolution => f.write_str("No solution"),
        }
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Search order used by [`Solver::solve_with`](crate::Solver::solve_with).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Shortest path (fewest moves).
    #[default]
    BreadthFirst,
    /// Any path, found with backtracking. Not necessarily the shortest.
    DepthFirst,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => f.write_str("bfs"),
            Strategy::DepthFirst => f.write_str("dfs"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Returned when a string names no known [`Strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy \u{201c}{}\u{201d} (expected bfs or dfs)", self.0)
    }
}

impl std::error::Error for ParseStrategyError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, column: usize) -> Location {
        Location::new(row, column)
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(Path::from_locations(Vec::new()).is_none());
        assert_eq!(Solution::from(Some(Vec::new())), Solution::NoSolution);
        assert_eq!(Solution::from(None), Solution::NoSolution);
    }

    #[test]
    fn path_accessors() {
        let p = Path::from_locations(vec![loc(0, 0), loc(1, 0), loc(1, 1)]).unwrap();
        assert_eq!(p.steps(), 2);
        assert_eq!(p.start(), loc(0, 0));
        assert_eq!(p.goal(), loc(1, 1));
        assert_eq!(p.len(), 3);
        assert_eq!(
            p.directions().collect::<Vec<_>>(),
            vec![Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn validity_checks() {
        let g = Grid::parse("S.\nXG").unwrap();
        let ok = Path::from_locations(vec![loc(0, 0), loc(0, 1), loc(1, 1)]).unwrap();
        assert!(ok.is_valid_for(&g));

        let through_wall = Path::from_locations(vec![loc(0, 0), loc(1, 0), loc(1, 1)]).unwrap();
        assert!(!through_wall.is_valid_for(&g));

        let jump = Path::from_locations(vec![loc(0, 0), loc(1, 1)]).unwrap();
        assert!(!jump.is_valid_for(&g));

        let short = Path::from_locations(vec![loc(0, 0), loc(0, 1)]).unwrap();
        assert!(!short.is_valid_for(&g));
    }

    #[test]
    fn solution_accessors_and_display() {
        let s = Solution::from(Some(vec![loc(0, 0), loc(0, 1)]));
        assert!(s.is_found());
        assert_eq!(s.path().map(|p| p.steps()), Some(1));
        assert_eq!(s.to_string(), "path of 1 step");
        let longer = Solution::from(Some(vec![loc(0, 0), loc(0, 1), loc(1, 1)]));
        assert_eq!(longer.to_string(), "path of 2 steps");
        assert_eq!(Solution::NoSolution.to_string(), "No solution");
        assert!(Solution::NoSolution.into_path().is_none());
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("Depth-First".parse::<Strategy>(), Ok(Strategy::DepthFirst));
        assert!("astar".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::BreadthFirst);
    }
}
