//! Depth-first search with backtracking.

use mazer_core::Location;

use crate::Solver;
use crate::solver::{Frame, NO_PARENT};
use crate::traits::Pather;

impl Solver {
    /// Find a path from `from` to `to` using depth-first search.
    ///
    /// The search always advances to the first unvisited neighbor of the
    /// location on top of the stack and backtracks when there is none. When
    /// `to` reaches the top of the stack, the stack is the path. The result is
    /// a valid path but not necessarily a shortest one.
    ///
    /// Returns `None` if either endpoint is outside the solver's area or `to`
    /// cannot be reached.
    pub fn dfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Location,
        to: Location,
    ) -> Option<Vec<Location>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        let cur_gen = self.bump_generation();
        let mut stack = std::mem::take(&mut self.stack);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        stack.clear();

        self.visit(start_idx, NO_PARENT, cur_gen);
        stack.push(Frame {
            idx: start_idx,
            next: 0,
        });
        self.expanded = 1;

        let found = loop {
            let Some(top) = stack.last_mut() else {
                break false;
            };
            if top.idx == goal_idx {
                break true;
            }

            // The grid is not mutated during a search, so the neighbor list
            // of a location is the same every time it is recomputed here.
            nbuf.clear();
            pather.neighbors(self.location(top.idx), &mut nbuf);

            let mut child = None;
            while top.next < nbuf.len() {
                let np = nbuf[top.next];
                top.next += 1;
                if let Some(ni) = self.idx(np) {
                    if !self.is_visited(ni, cur_gen) {
                        child = Some(ni);
                        break;
                    }
                }
            }

            match child {
                Some(ni) => {
                    self.visit(ni, top.idx, cur_gen);
                    stack.push(Frame { idx: ni, next: 0 });
                    self.expanded += 1;
                }
                // Dead end.
                None => {
                    stack.pop();
                }
            }
        };

        let path = found.then(|| stack.iter().map(|f| self.location(f.idx)).collect());
        self.stack = stack;
        self.nbuf = nbuf;
        path
    }
}

#[cfg(test)]
mod tests {
    use mazer_core::{Grid, Location};
    use mazer_gen::MazeConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::{Solution, Solver, Strategy};

    fn loc(row: usize, column: usize) -> Location {
        Location::new(row, column)
    }

    fn dfs(grid: &Grid) -> Solution {
        Solver::default().solve_with(grid, Strategy::DepthFirst)
    }

    #[test]
    fn follows_neighbor_order_without_shortcuts() {
        let g = Grid::new(3, 3, loc(0, 0), loc(2, 2)).unwrap();
        let path = dfs(&g).into_path().unwrap();
        assert_eq!(
            path.locations(),
            &[
                loc(0, 0),
                loc(1, 0),
                loc(2, 0),
                loc(2, 1),
                loc(1, 1),
                loc(0, 1),
                loc(0, 2),
                loc(1, 2),
                loc(2, 2),
            ]
        );
        assert!(path.is_valid_for(&g));
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        let g = Grid::parse("S.G\n.XX\n..X").unwrap();
        let mut solver = Solver::default();
        let path = solver
            .solve_with(&g, Strategy::DepthFirst)
            .into_path()
            .unwrap();
        assert_eq!(path.locations(), &[loc(0, 0), loc(0, 1), loc(0, 2)]);
        // (1,0), (2,0) and (2,1) were explored and abandoned.
        assert_eq!(solver.expanded(), 6);
    }

    #[test]
    fn single_cell_start_is_goal() {
        let g = Grid::new(1, 1, loc(0, 0), loc(0, 0)).unwrap();
        assert_eq!(dfs(&g).into_path().unwrap().locations(), &[loc(0, 0)]);
    }

    #[test]
    fn unreachable_goal() {
        let g = Grid::parse("S.X.\n..X.\nXXX.\n...G").unwrap();
        assert_eq!(dfs(&g), Solution::NoSolution);
    }

    #[test]
    fn agrees_with_bfs_on_solvability() {
        let mut solver = Solver::default();
        for seed in 0..50 {
            let cfg = MazeConfig::new(12, 18).with_sparseness(0.35);
            let g = mazer_gen::generate(&cfg, StdRng::seed_from_u64(seed)).unwrap();
            let bfs = solver.solve_with(&g, Strategy::BreadthFirst);
            let dfs = solver.solve_with(&g, Strategy::DepthFirst);
            assert_eq!(bfs.is_found(), dfs.is_found(), "seed {seed}");
            if let (Some(short), Some(any)) = (bfs.path(), dfs.path()) {
                assert!(any.is_valid_for(&g), "seed {seed}");
                assert!(short.steps() <= any.steps(), "seed {seed}");
            }
        }
    }
}
