//! Errors raised when a grid cannot be built.

use std::fmt;

use crate::geom::Location;

/// Which of the two distinguished cells an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that can occur when constructing or parsing a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Rows or columns is zero.
    ZeroDimension { rows: usize, columns: usize },
    /// `rows × columns` does not fit in memory.
    TooLarge { rows: usize, columns: usize },
    /// Start or goal lies outside the grid.
    OutOfBounds {
        endpoint: Endpoint,
        location: Location,
        rows: usize,
        columns: usize,
    },
    /// Obstruction density outside `[0, 1]` (or NaN).
    InvalidSparseness(f64),
    /// A text line has a different width than the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a cell glyph.
    InvalidGlyph { ch: char, location: Location },
    /// Parsed text has no start or goal cell.
    MissingEndpoint(Endpoint),
    /// Parsed text has more than one start or goal cell.
    DuplicateEndpoint(Endpoint),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { rows, columns } => {
                write!(f, "grid: dimensions must be positive, got {rows}x{columns}")
            }
            Self::TooLarge { rows, columns } => {
                write!(f, "grid: dimensions {rows}x{columns} are too large")
            }
            Self::OutOfBounds {
                endpoint,
                location,
                rows,
                columns,
            } => write!(
                f,
                "grid: {endpoint} {location} is outside a {rows}x{columns} grid"
            ),
            Self::InvalidSparseness(s) => {
                write!(f, "grid: sparseness must lie in [0, 1], got {s}")
            }
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidGlyph { ch, location } => {
                write!(f, "grid: invalid glyph \u{201c}{ch}\u{201d} at {location}")
            }
            Self::MissingEndpoint(e) => write!(f, "grid: no {e} cell"),
            Self::DuplicateEndpoint(e) => write!(f, "grid: more than one {e} cell"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = GridError::ZeroDimension {
            rows: 0,
            columns: 4,
        };
        assert_eq!(e.to_string(), "grid: dimensions must be positive, got 0x4");

        let e = GridError::OutOfBounds {
            endpoint: Endpoint::Goal,
            location: Location::new(5, 1),
            rows: 5,
            columns: 5,
        };
        assert_eq!(e.to_string(), "grid: goal (5, 1) is outside a 5x5 grid");

        assert_eq!(
            GridError::MissingEndpoint(Endpoint::Start).to_string(),
            "grid: no start cell"
        );
    }
}
