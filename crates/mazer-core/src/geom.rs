//! Geometry primitives: [`Location`] and [`Direction`].
//!
//! Rows grow downward and columns grow to the right, so "down" increases the
//! row and "right" increases the column.

use std::fmt;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A `(row, column)` cell coordinate.
///
/// Locations compare and hash by value and order row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The adjacent location in direction `dir`.
    ///
    /// Returns `None` when stepping above row 0, left of column 0, or past
    /// `usize::MAX`. Grid bounds are not checked here.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Down => self.row.checked_add(1).map(|r| Self::new(r, self.column)),
            Direction::Up => self.row.checked_sub(1).map(|r| Self::new(r, self.column)),
            Direction::Right => self.column.checked_add(1).map(|c| Self::new(self.row, c)),
            Direction::Left => self.column.checked_sub(1).map(|c| Self::new(self.row, c)),
        }
    }

    /// Whether `other` shares an edge with `self`.
    #[inline]
    pub fn is_adjacent(self, other: Location) -> bool {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column) == 1
    }

    /// The direction leading from `self` to an adjacent `other`, if any.
    pub fn direction_to(self, other: Location) -> Option<Direction> {
        Direction::SEARCH_ORDER
            .into_iter()
            .find(|&d| self.step(d) == Some(other))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Location {
    #[inline]
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<Location> for (usize, usize) {
    #[inline]
    fn from(l: Location) -> Self {
        (l.row, l.column)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four axis-aligned moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Order in which neighbors are enumerated.
    ///
    /// Search strategies inherit their tie-breaking from this order, so
    /// changing it changes which of several equal-length paths is returned.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Left => "left",
        };
        f.write_str(s)
    }
}
