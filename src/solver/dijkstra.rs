use crate::{solver::GridSolver, Coord};

/// Uninformed search with the same movement rules as
/// [Pathfinder](crate::Pathfinder). Useful as a reference for route costs.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub allow_diagonal_move: bool,
}

impl DijkstraSolver {
    pub fn new(allow_diagonal_move: bool) -> DijkstraSolver {
        DijkstraSolver {
            allow_diagonal_move,
        }
    }
}

impl GridSolver for DijkstraSolver {
    fn allow_diagonal(&self) -> bool {
        self.allow_diagonal_move
    }

    fn heuristic(&self, _: &Coord, _: &Coord) -> i32 {
        0
    }
}
