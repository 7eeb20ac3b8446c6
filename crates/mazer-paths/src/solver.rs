use std::collections::VecDeque;

use mazer_core::{Grid, Location};

use crate::solution::{Solution, Strategy};

/// Parent index of the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal search bookkeeping
// ---------------------------------------------------------------------------

/// Per-location search record. A node is visited in the current search iff
/// its `generation` equals the solver's.
#[derive(Clone, Copy)]
pub(crate) struct Node {
    pub(crate) parent: usize,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: NO_PARENT,
            generation: 0,
        }
    }
}

/// Depth-first stack entry: a location and the position of the next
/// neighbor to try from it.
#[derive(Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) idx: usize,
    pub(crate) next: usize,
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Maze solver over a `rows × columns` area.
///
/// `Solver` owns all search caches (visited marks, back-pointers, the
/// frontier queue, the depth-first stack) so that repeated solves on grids of
/// the same or smaller size do not allocate.
pub struct Solver {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stack: Vec<Frame>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Location>,
    pub(crate) expanded: usize,
}

impl Default for Solver {
    /// A solver with no area; it sizes itself on the first [`solve`](Solver::solve).
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Solver {
    /// Create a solver for a `rows × columns` area.
    ///
    /// # Panics
    ///
    /// Panics if the area does not fit in memory.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            nodes: vec![Node::default(); rows.saturating_mul(columns)],
            generation: 0,
            queue: VecDeque::new(),
            stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
            expanded: 0,
        }
    }

    /// Replace the search area.
    ///
    /// If the new area fits within the existing capacity, caches are kept
    /// and stale entries are invalidated by bumping the generation.
    /// Otherwise caches are reallocated.
    ///
    /// # Panics
    ///
    /// Panics if the area does not fit in memory.
    pub fn set_dims(&mut self, rows: usize, columns: usize) {
        let new_len = rows.saturating_mul(columns);
        self.rows = rows;
        self.columns = columns;

        if new_len <= self.nodes.len() {
            self.bump_generation();
            return;
        }

        log::trace!("solver: growing caches to {rows}x{columns}");
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
        self.queue.clear();
        self.stack.clear();
    }

    /// The `(rows, columns)` area searched.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of locations expanded by the last search: dequeued by
    /// breadth-first search, pushed by depth-first search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Find a shortest path from the grid's start to its goal.
    ///
    /// Ties between equal-length paths are broken by neighbor order, so the
    /// same grid always yields the same path.
    pub fn solve(&mut self, grid: &Grid) -> Solution {
        self.solve_with(grid, Strategy::BreadthFirst)
    }

    /// Solve `grid` with the given strategy.
    pub fn solve_with(&mut self, grid: &Grid, strategy: Strategy) -> Solution {
        if self.dims() != (grid.rows(), grid.columns()) {
            self.set_dims(grid.rows(), grid.columns());
        }
        let (start, goal) = (grid.start(), grid.goal());
        let locations = match strategy {
            Strategy::BreadthFirst => self.bfs_path(grid, start, goal),
            Strategy::DepthFirst => self.dfs_path(grid, start, goal),
        };
        let solution = Solution::from(locations);
        match &solution {
            Solution::Found(path) => log::debug!(
                "{strategy}: {start} -> {goal} in {} steps, {} expanded",
                path.steps(),
                self.expanded
            ),
            Solution::NoSolution => log::debug!(
                "{strategy}: no path {start} -> {goal}, {} expanded",
                self.expanded
            ),
        }
        solution
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Location` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, loc: Location) -> Option<usize> {
        if loc.row >= self.rows || loc.column >= self.columns {
            return None;
        }
        Some(loc.row * self.columns + loc.column)
    }

    /// Convert a flat index back to a `Location`.
    #[inline]
    pub(crate) fn location(&self, idx: usize) -> Location {
        Location::new(idx / self.columns, idx % self.columns)
    }

    // -----------------------------------------------------------------------
    // Visited bookkeeping
    // -----------------------------------------------------------------------

    /// Start a new search generation, lazily invalidating every node.
    pub(crate) fn bump_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old marks could collide with new ones.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.generation
    }

    #[inline]
    pub(crate) fn is_visited(&self, idx: usize, generation: u32) -> bool {
        self.nodes[idx].generation == generation
    }

    #[inline]
    pub(crate) fn visit(&mut self, idx: usize, parent: usize, generation: u32) {
        self.nodes[idx] = Node { parent, generation };
    }

    /// Walk back-pointers from `goal_idx` to the root.
    pub(crate) fn reconstruct(&self, goal_idx: usize) -> Vec<Location> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.location(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

/// Solve `grid` with a fresh [`Solver`]. See [`Solver::solve`].
pub fn solve(grid: &Grid) -> Solution {
    Solver::new(grid.rows(), grid.columns()).solve(grid)
}
