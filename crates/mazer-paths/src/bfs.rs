use mazer_core::Location;

use crate::Solver;
use crate::solver::NO_PARENT;
use crate::traits::Pather;

impl Solver {
    /// Compute a shortest path from `from` to `to` using breadth-first
    /// search.
    ///
    /// Each location is marked visited when first discovered and remembers
    /// the location it was discovered from; the path is rebuilt from those
    /// back-pointers once `to` is dequeued. Returns the full path (including
    /// both endpoints) or `None` if either endpoint is outside the solver's
    /// area or `to` cannot be reached.
    pub fn bfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Location,
        to: Location,
    ) -> Option<Vec<Location>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        let cur_gen = self.bump_generation();
        self.expanded = 0;
        self.queue.clear();

        self.visit(start_idx, NO_PARENT, cur_gen);
        self.queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(ci) = self.queue.pop_front() else {
                break false;
            };
            self.expanded += 1;

            if ci == goal_idx {
                break true;
            }

            nbuf.clear();
            pather.neighbors(self.location(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.is_visited(ni, cur_gen) {
                    continue;
                }
                self.visit(ni, ci, cur_gen);
                self.queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;

        found.then(|| self.reconstruct(goal_idx))
    }
}

#[cfg(test)]
mod tests {
    use mazer_core::{Direction, Grid, Location};
    use mazer_gen::MazeConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::{Solution, Solver, manhattan, solve};

    fn loc(row: usize, column: usize) -> Location {
        Location::new(row, column)
    }

    #[test]
    fn open_grid_path_matches_manhattan_distance() {
        for (rows, columns, start, goal) in [
            (4, 4, loc(0, 0), loc(3, 3)),
            (6, 3, loc(5, 2), loc(0, 0)),
            (1, 9, loc(0, 8), loc(0, 1)),
            (7, 7, loc(3, 3), loc(6, 0)),
        ] {
            let g = Grid::new(rows, columns, start, goal).unwrap();
            let path = solve(&g).into_path().unwrap();
            assert_eq!(path.steps(), manhattan(start, goal));
            assert!(path.is_valid_for(&g));
        }
    }

    #[test]
    fn five_by_thirty_open_maze() {
        let g = Grid::new(5, 30, loc(0, 0), loc(4, 29)).unwrap();
        let path = solve(&g).into_path().unwrap();
        assert_eq!(path.len(), 34);
        assert!(path.is_valid_for(&g));
        assert!(
            path.directions()
                .all(|d| d == Direction::Down || d == Direction::Right)
        );
        // Down is tried first, so the left column is followed to the bottom
        // before turning right.
        assert_eq!(&path[..5], &[loc(0, 0), loc(1, 0), loc(2, 0), loc(3, 0), loc(4, 0)]);
        assert!(path[4..].iter().all(|l| l.row == 4));
    }

    #[test]
    fn single_cell_start_is_goal() {
        let g = Grid::new(1, 1, loc(0, 0), loc(0, 0)).unwrap();
        let path = solve(&g).into_path().unwrap();
        assert_eq!(path.locations(), &[loc(0, 0)]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn ties_break_down_before_right() {
        let g = Grid::new(2, 2, loc(0, 0), loc(1, 1)).unwrap();
        let path = solve(&g).into_path().unwrap();
        assert_eq!(path.locations(), &[loc(0, 0), loc(1, 0), loc(1, 1)]);
    }

    #[test]
    fn boxed_in_start_has_no_solution() {
        let g = Grid::parse("SX \nX  \n  G").unwrap();
        assert!(g.neighbors(g.start()).is_empty());
        assert_eq!(solve(&g), Solution::NoSolution);
    }

    #[test]
    fn fully_blocked_except_endpoints() {
        let g = Grid::parse("SXXX\nXXXX\nXXXG").unwrap();
        assert_eq!(solve(&g), Solution::NoSolution);
    }

    #[test]
    fn walls_force_a_detour() {
        let g = Grid::parse("S.X..\n..X.X\nX...G").unwrap();
        let mut solver = Solver::default();
        let path = solver.solve(&g).into_path().unwrap();
        assert_eq!(
            path.locations(),
            &[
                loc(0, 0),
                loc(1, 0),
                loc(1, 1),
                loc(2, 1),
                loc(2, 2),
                loc(2, 3),
                loc(2, 4),
            ]
        );
        assert!(path.is_valid_for(&g));
    }

    #[test]
    fn solve_does_not_mutate_grid() {
        let g = Grid::parse("S..\n.X.\n..G").unwrap();
        let before = g.clone();
        let _ = solve(&g);
        assert_eq!(g, before);
    }

    #[test]
    fn deterministic_for_same_grid() {
        let cfg = MazeConfig::new(25, 40).with_sparseness(0.25);
        let g = mazer_gen::generate(&cfg, StdRng::seed_from_u64(99)).unwrap();
        let mut solver = Solver::default();
        let a = solver.solve(&g);
        let b = solver.solve(&g);
        let c = solve(&g);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn random_mazes_yield_valid_shortest_paths() {
        let mut solver = Solver::default();
        for seed in 0..50 {
            let cfg = MazeConfig::new(15, 20).with_sparseness(0.3);
            let g = mazer_gen::generate(&cfg, StdRng::seed_from_u64(seed)).unwrap();
            if let Solution::Found(path) = solver.solve(&g) {
                assert!(path.is_valid_for(&g), "seed {seed}");
                assert!(path.steps() >= manhattan(g.start(), g.goal()));
                let mut sorted = path.to_vec();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), path.len(), "path revisits a cell");
            }
        }
    }

    #[test]
    fn reused_solver_handles_size_changes() {
        let mut solver = Solver::new(10, 10);
        let big = Grid::new(10, 10, loc(0, 0), loc(9, 9)).unwrap();
        let small = Grid::new(2, 3, loc(1, 2), loc(0, 0)).unwrap();
        assert_eq!(solver.solve(&big).path().map(|p| p.steps()), Some(18));
        assert_eq!(solver.solve(&small).path().map(|p| p.steps()), Some(3));
        assert_eq!(solver.solve(&big).path().map(|p| p.steps()), Some(18));
    }

    #[test]
    fn endpoints_outside_area() {
        let g = Grid::new(3, 3, loc(0, 0), loc(2, 2)).unwrap();
        let mut solver = Solver::new(3, 3);
        assert_eq!(solver.bfs_path(&g, loc(0, 0), loc(3, 3)), None);
        assert_eq!(solver.bfs_path(&g, loc(5, 0), loc(2, 2)), None);
    }

    #[test]
    fn expanded_counts_dequeued_locations() {
        let g = Grid::new(5, 30, loc(0, 0), loc(4, 29)).unwrap();
        let mut solver = Solver::default();
        let _ = solver.solve(&g);
        // The goal is the farthest cell, so every cell is dequeued.
        assert_eq!(solver.expanded(), 150);
    }
}
