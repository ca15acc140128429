use itertools::Itertools;
use log::{info, warn};
use smallvec::SmallVec;

use crate::astar::astar;
use crate::coord::{CARDINAL_DIRECTIONS, DIAGONAL_DIRECTIONS};
use crate::{Coord, Grid, Route, C, D, N_SMALLVEC_SIZE};

pub mod astar;
pub mod dijkstra;

/// Converts the integer cost to an approximate floating point equivalent where cardinal directions have cost 1.0.
pub fn convert_cost_to_unit_cost_float(cost: i32) -> f64 {
    (cost as f64) / (C as f64)
}

/// A single-goal search strategy on a [Grid]. Implementors choose the
/// heuristic; movement rules and route bookkeeping are shared.
pub trait GridSolver {
    /// Whether diagonal moves are generated.
    fn allow_diagonal(&self) -> bool;

    /// Estimate of the remaining cost from `p1` to `p2`. Must not overestimate.
    fn heuristic(&self, p1: &Coord, p2: &Coord) -> i32;

    /// Uses C as cost for cardinal (straight) moves and D for diagonal moves.
    fn cost(&self, p1: &Coord, p2: &Coord) -> i32 {
        if p1.is_diagonal_step(p2) {
            D
        } else {
            C
        }
    }

    /// Whether a single step from `from` to `to` is legal. Diagonal steps
    /// require both cells flanking the move to be walkable so that corners of
    /// blocked cells cannot be cut.
    fn is_valid_move(&self, grid: &Grid, from: &Coord, to: &Coord) -> bool {
        if !from.is_adjacent(to) || !grid.is_walkable(*to) {
            return false;
        }
        if from.is_diagonal_step(to) {
            self.allow_diagonal()
                && grid.is_walkable(Coord::new(to.x, from.y))
                && grid.is_walkable(Coord::new(from.x, to.y))
        } else {
            true
        }
    }

    /// The walkable neighbours of `node` with the cost of stepping to them.
    fn successors(&self, grid: &Grid, node: &Coord) -> SmallVec<[(Coord, i32); N_SMALLVEC_SIZE]> {
        let mut succ = SmallVec::new();
        for dir in CARDINAL_DIRECTIONS {
            let n = *node + dir;
            if grid.is_walkable(n) {
                succ.push((n, C));
            }
        }
        if self.allow_diagonal() {
            for dir in DIAGONAL_DIRECTIONS {
                let n = *node + dir;
                if self.is_valid_move(grid, node, &n) {
                    succ.push((n, D));
                }
            }
        }
        succ
    }

    /// Computes a route from `start` to `goal`, both included. The route is
    /// empty if either endpoint lies outside of the grid, if either endpoint
    /// is blocked (unless they coincide) or if the goal cannot be reached.
    fn find_path(&self, grid: &Grid, start: Coord, goal: Coord) -> Route {
        if !grid.in_bounds(start) || !grid.in_bounds(goal) {
            info!("{} or {} lies outside of the grid", start, goal);
            return Route::new();
        }
        if start == goal {
            return vec![start];
        }
        if !grid.is_walkable(start) || !grid.is_walkable(goal) {
            info!("{} or {} is blocked", start, goal);
            return Route::new();
        }
        // Check if start and goal are on the same connected component.
        if grid.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Route::new();
        }
        match astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        ) {
            Some((route, _cost)) => route,
            None => {
                if !grid.components_dirty() {
                    warn!(
                        "{} could not be pathed to from {} even though they share a component",
                        goal, start
                    );
                }
                Route::new()
            }
        }
    }

    /// Sum of the step costs along a route.
    fn route_cost(&self, route: &[Coord]) -> i32 {
        route
            .iter()
            .tuple_windows()
            .map(|(a, b)| self.cost(a, b))
            .sum()
    }

    fn route_cost_float(&self, route: &[Coord]) -> f64 {
        convert_cost_to_unit_cost_float(self.route_cost(route))
    }

    /// Whether `route` is a connected sequence of legal moves from `start` to
    /// `goal`.
    fn is_valid_route(&self, grid: &Grid, route: &[Coord], start: Coord, goal: Coord) -> bool {
        route.first() == Some(&start)
            && route.last() == Some(&goal)
            && route
                .iter()
                .tuple_windows()
                .all(|(a, b)| self.is_valid_move(grid, a, b))
    }
}
