use mazer_core::{Grid, Location};

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `loc` into `buf`. The caller clears `buf` before
    /// calling.
    ///
    /// The order in which neighbors are appended decides which of several
    /// equally good paths a search returns, so it must be stable.
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>);
}

impl Pather for Grid {
    #[inline]
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>) {
        self.neighbors_into(loc, buf);
    }
}
