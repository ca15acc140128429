use crate::{solver::GridSolver, Coord, Grid, Route};

/// A* on a [Grid]. The heuristic is the Manhattan distance on a 4-grid and
/// the octile distance once diagonal moves are allowed, both scaled to the
/// move costs [C](crate::C) and [D](crate::D) so that returned routes are
/// optimal.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    pub allow_diagonal_move: bool,
}

impl Pathfinder {
    pub fn new() -> Pathfinder {
        Pathfinder::default()
    }

    pub fn with_diagonal(allow_diagonal_move: bool) -> Pathfinder {
        Pathfinder {
            allow_diagonal_move,
        }
    }

    pub fn set_allow_diagonal(&mut self, allow: bool) {
        self.allow_diagonal_move = allow;
    }

    /// See [GridSolver::find_path].
    pub fn find_path(&self, grid: &Grid, start: Coord, goal: Coord) -> Route {
        GridSolver::find_path(self, grid, start, goal)
    }
}

impl GridSolver for Pathfinder {
    fn allow_diagonal(&self) -> bool {
        self.allow_diagonal_move
    }

    fn heuristic(&self, p1: &Coord, p2: &Coord) -> i32 {
        if self.allow_diagonal_move {
            p1.octile_distance(p2)
        } else {
            p1.manhattan_distance(p2) * crate::C
        }
    }
}
