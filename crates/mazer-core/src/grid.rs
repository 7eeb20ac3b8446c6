//! The [`Grid`] type: a matrix of [`CellState`]s with a start and
//! a goal.
//!
//! Cells are stored row-major in a single `Vec`. After construction the
//! matrix only changes through [`Grid::stamp_path`].

use std::fmt;

use crate::cell::CellState;
use crate::error::{Endpoint, GridError};
use crate::geom::{Direction, Location};

/// A rectangular maze of `rows × columns` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
    start: Location,
    goal: Location,
}

impl Grid {
    /// Create an open grid (no obstructions) with start and goal stamped.
    pub fn new(
        rows: usize,
        columns: usize,
        start: Location,
        goal: Location,
    ) -> Result<Self, GridError> {
        Self::with_obstructions(rows, columns, start, goal, |_| false)
    }

    /// Create a grid whose cells are blocked wherever `blocked` returns
    /// `true`.
    ///
    /// `blocked` is called exactly once per cell, in row-major order. Start
    /// and goal are stamped afterwards and so are never blocked.
    pub fn with_obstructions(
        rows: usize,
        columns: usize,
        start: Location,
        goal: Location,
        mut blocked: impl FnMut(Location) -> bool,
    ) -> Result<Self, GridError> {
        check_dims(rows, columns)?;
        check_endpoint(Endpoint::Start, start, rows, columns)?;
        check_endpoint(Endpoint::Goal, goal, rows, columns)?;

        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(if blocked(Location::new(row, column)) {
                    CellState::Blocked
                } else {
                    CellState::Empty
                });
            }
        }

        let mut grid = Self {
            rows,
            columns,
            cells,
            start,
            goal,
        };
        grid.stamp_endpoints();
        Ok(grid)
    }

    /// Build a grid from its rendered text form.
    ///
    /// One line per row, one glyph per column (see
    /// [`CellState::from_glyph`]). All lines must have the same width and
    /// exactly one `S` and one `G` must appear.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut columns = 0;
        let mut rows = 0;
        let mut start = None;
        let mut goal = None;

        for (row, line) in text.lines().enumerate() {
            let mut width = 0;
            for (column, ch) in line.chars().enumerate() {
                let location = Location::new(row, column);
                let state =
                    CellState::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, location })?;
                match state {
                    CellState::Start => {
                        if start.replace(location).is_some() {
                            return Err(GridError::DuplicateEndpoint(Endpoint::Start));
                        }
                    }
                    CellState::Goal => {
                        if goal.replace(location).is_some() {
                            return Err(GridError::DuplicateEndpoint(Endpoint::Goal));
                        }
                    }
                    _ => {}
                }
                cells.push(state);
                width += 1;
            }
            if row == 0 {
                if width == 0 {
                    return Err(GridError::ZeroDimension {
                        rows: text.lines().count(),
                        columns: 0,
                    });
                }
                columns = width;
            } else if width != columns {
                return Err(GridError::InconsistentWidth {
                    line: row,
                    expected: columns,
                    found: width,
                });
            }
            rows += 1;
        }

        check_dims(rows, columns)?;
        let start = start.ok_or(GridError::MissingEndpoint(Endpoint::Start))?;
        let goal = goal.ok_or(GridError::MissingEndpoint(Endpoint::Goal))?;
        Ok(Self {
            rows,
            columns,
            cells,
            start,
            goal,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn start(&self) -> Location {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Location {
        self.goal
    }

    /// Whether `loc` is inside the grid.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.row < self.rows && loc.column < self.columns
    }

    #[inline]
    fn index(&self, loc: Location) -> Option<usize> {
        self.contains(loc)
            .then(|| loc.row * self.columns + loc.column)
    }

    /// The state of the cell at `loc`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, loc: Location) -> Option<CellState> {
        self.index(loc).map(|i| self.cells[i])
    }

    /// Whether `loc` is in bounds and blocked.
    #[inline]
    pub fn is_blocked(&self, loc: Location) -> bool {
        self.at(loc) == Some(CellState::Blocked)
    }

    /// Count how many cells are in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate over `(Location, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, CellState)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Location::new(i / columns, i % columns), c))
    }

    /// Open neighbors of `loc`, in [`Direction::SEARCH_ORDER`].
    ///
    /// A blocked or out-of-bounds `loc` has no neighbors.
    pub fn neighbors(&self, loc: Location) -> Vec<Location> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(loc, &mut buf);
        buf
    }

    /// Append the open neighbors of `loc` to `buf`. See
    /// [`neighbors`](Self::neighbors).
    pub fn neighbors_into(&self, loc: Location, buf: &mut Vec<Location>) {
        match self.at(loc) {
            Some(state) if state.is_passable() => {}
            _ => return,
        }
        for dir in Direction::SEARCH_ORDER {
            let Some(n) = loc.step(dir) else {
                continue;
            };
            if matches!(self.at(n), Some(state) if state.is_passable()) {
                buf.push(n);
            }
        }
    }

    /// Mark every in-bounds location of `path` as [`CellState::Path`], then
    /// restore the start and goal cells.
    pub fn stamp_path(&mut self, path: &[Location]) {
        for &loc in path {
            if let Some(i) = self.index(loc) {
                self.cells[i] = CellState::Path;
            }
        }
        self.stamp_endpoints();
    }

    /// Render the grid as text, one line per row.
    ///
    /// Locations in `overlay` are drawn with the path glyph, except the start
    /// and goal which keep their own glyphs. The grid itself is unchanged.
    pub fn render(&self, overlay: Option<&[Location]>) -> String {
        let mut glyphs: Vec<char> = self.cells.iter().map(|c| c.glyph()).collect();
        if let Some(path) = overlay {
            for &loc in path {
                if let Some(i) = self.index(loc) {
                    glyphs[i] = CellState::Path.glyph();
                }
            }
            for (loc, state) in [(self.start, CellState::Start), (self.goal, CellState::Goal)] {
                if let Some(i) = self.index(loc) {
                    glyphs[i] = state.glyph();
                }
            }
        }

        let mut out = String::with_capacity(self.rows * (self.columns + 1));
        for (r, row) in glyphs.chunks(self.columns).enumerate() {
            if r > 0 {
                out.push('\n');
            }
            out.extend(row);
        }
        out
    }

    fn stamp_endpoints(&mut self) {
        // Goal last: a grid whose start and goal coincide shows the goal.
        for (loc, state) in [(self.start, CellState::Start), (self.goal, CellState::Goal)] {
            if let Some(i) = self.index(loc) {
                self.cells[i] = state;
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

fn check_dims(rows: usize, columns: usize) -> Result<(), GridError> {
    if rows == 0 || columns == 0 {
        return Err(GridError::ZeroDimension { rows, columns });
    }
    match rows.checked_mul(columns) {
        Some(area) if area <= isize::MAX as usize => Ok(()),
        _ => Err(GridError::TooLarge { rows, columns }),
    }
}

fn check_endpoint(
    endpoint: Endpoint,
    location: Location,
    rows: usize,
    columns: usize,
) -> Result<(), GridError> {
    if location.row >= rows || location.column >= columns {
        return Err(GridError::OutOfBounds {
            endpoint,
            location,
            rows,
            columns,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

/// Unchecked mirror of [`Grid`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
    start: Location,
    goal: Location,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        check_dims(raw.rows, raw.columns).map_err(|e| e.to_string())?;
        check_endpoint(Endpoint::Start, raw.start, raw.rows, raw.columns)
            .map_err(|e| e.to_string())?;
        check_endpoint(Endpoint::Goal, raw.goal, raw.rows, raw.columns)
            .map_err(|e| e.to_string())?;
        // check_dims guarantees the product fits.
        let area = raw.rows * raw.columns;
        if raw.cells.len() != area {
            return Err(format!(
                "grid: expected {area} cells, found {}",
                raw.cells.len()
            ));
        }
        let mut grid = Grid {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
            start: raw.start,
            goal: raw.goal,
        };
        grid.stamp_endpoints();
        Ok(grid)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("S.X\n.X.\n..G").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn rejects_mismatched_cell_count() {
        let json = r#"{"rows":2,"columns":2,"cells":["Empty"],
            "start":{"row":0,"column":0},"goal":{"row":1,"column":1}}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        let json = r#"{"rows":9223372036854775808,"columns":2,"cells":[],
            "start":{"row":0,"column":0},"goal":{"row":0,"column":1}}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
    }
}
