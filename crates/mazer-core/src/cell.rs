//! The [`CellState`] type, the role a single grid cell plays.

/// What a grid cell holds.
///
/// Only [`Blocked`](CellState::Blocked) cells are impassable; every other
/// state can be walked through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open, untouched.
    #[default]
    Empty,
    /// Impassable, sampled at construction.
    Blocked,
    Start,
    Goal,
    /// Part of a found solution, stamped after solving.
    Path,
}

impl CellState {
    /// The character used when rendering this state.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Blocked => 'X',
            CellState::Start => 'S',
            CellState::Goal => 'G',
            CellState::Path => '#',
        }
    }

    /// Inverse of [`glyph`](Self::glyph). `'.'` is also read as Empty.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' | '.' => Some(CellState::Empty),
            'X' => Some(CellState::Blocked),
            'S' => Some(CellState::Start),
            'G' => Some(CellState::Goal),
            '#' => Some(CellState::Path),
            _ => None,
        }
    }

    /// Whether a search may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellState::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CellState; 5] = [
        CellState::Empty,
        CellState::Blocked,
        CellState::Start,
        CellState::Goal,
        CellState::Path,
    ];

    #[test]
    fn glyphs_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn from_glyph_inverts_glyph() {
        for s in ALL {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('.'), Some(CellState::Empty));
        assert_eq!(CellState::from_glyph('?'), None);
    }

    #[test]
    fn only_blocked_is_impassable() {
        for s in ALL {
            assert_eq!(s.is_passable(), s != CellState::Blocked);
        }
    }
}
