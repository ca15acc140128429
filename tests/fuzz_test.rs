/// Fuzzes the pathfinding system on many random grids: routes must exist exactly when the goal is
/// reachable, consist of legal moves, and be as cheap as the cheapest route found by exhaustive
/// relaxation. Both movement settings are tested.
use grid_navigation::{CellType, Coord, DijkstraSolver, Grid, GridSolver, Pathfinder};
use rand::prelude::*;
use std::collections::HashMap;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(w, h);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            let cell_type = if rng.gen_bool(0.35) {
                CellType::Obstacle
            } else {
                CellType::Walkable
            };
            grid.set_cell_type(Coord::new(x, y), cell_type).unwrap();
        }
    }
    grid
}

fn random_grid_point(grid: &Grid, rng: &mut StdRng) -> Coord {
    Coord::new(
        rng.gen_range(0..grid.width()) as i32,
        rng.gen_range(0..grid.height()) as i32,
    )
}

fn visualize_grid(grid: &Grid, start: &Coord, end: &Coord) {
    println!("Start: {start}; End: {end}");
    print!("{grid}");
}

/// Cheapest cost from start to goal obtained by relaxing every legal move until nothing changes.
fn brute_force_cost(grid: &Grid, start: Coord, goal: Coord, diagonal: bool) -> Option<i32> {
    let mut dist: HashMap<Coord, i32> = HashMap::new();
    dist.insert(start, 0);
    let mut changed = true;
    while changed {
        changed = false;
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let Some(&d) = dist.get(&Coord::new(x, y)) else {
                    continue;
                };
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        let to = Coord::new(x + dx, y + dy);
                        if (dx == 0 && dy == 0) || !grid.is_walkable(to) {
                            continue;
                        }
                        let step = if dx != 0 && dy != 0 {
                            if !diagonal
                                || !grid.is_walkable(Coord::new(x + dx, y))
                                || !grid.is_walkable(Coord::new(x, y + dy))
                            {
                                continue;
                            }
                            14
                        } else {
                            10
                        };
                        if dist.get(&to).map_or(true, |&old| d + step < old) {
                            dist.insert(to, d + step);
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    dist.get(&goal).copied()
}

#[test]
fn fuzz_optimal() {
    const N_GRIDS: usize = 3000;
    let mut rng = StdRng::seed_from_u64(0);
    for diagonal in [false, true] {
        let pathfinder = Pathfinder::with_diagonal(diagonal);
        for _ in 0..N_GRIDS {
            let w = rng.gen_range(1..=6);
            let h = rng.gen_range(1..=6);
            let mut grid = random_grid(w, h, &mut rng);
            let start = random_grid_point(&grid, &mut rng);
            let end = random_grid_point(&grid, &mut rng);
            grid.set_cell_type(start, CellType::Walkable).unwrap();
            grid.set_cell_type(end, CellType::Walkable).unwrap();
            // Half of the searches run with stale components
            if rng.gen_bool(0.5) {
                grid.update();
            }

            let route = pathfinder.find_path(&grid, start, end);
            let expected = brute_force_cost(&grid, start, end, diagonal);
            if route.is_empty() != expected.is_none() {
                visualize_grid(&grid, &start, &end);
            }
            match expected {
                Some(cost) => {
                    assert!(pathfinder.is_valid_route(&grid, &route, start, end));
                    assert_eq!(pathfinder.route_cost(&route), cost);
                }
                None => assert!(route.is_empty()),
            }
            assert_eq!(grid.reachable(start, end), expected.is_some());
        }
    }
}

#[test]
fn fuzz_dijkstra_agreement() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for diagonal in [false, true] {
        let astar = Pathfinder::with_diagonal(diagonal);
        let dijkstra = DijkstraSolver::new(diagonal);
        let start = Coord::new(0, 0);
        let end = Coord::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_GRIDS {
            let mut grid = random_grid(N, N, &mut rng);
            grid.set_start(start).unwrap();
            grid.set_end(end).unwrap();
            grid.update();
            let reachable = grid.reachable(start, end);
            let astar_route = astar.find_path(&grid, start, end);
            let dijkstra_route = dijkstra.find_path(&grid, start, end);
            if astar_route.is_empty() == reachable {
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(astar_route.is_empty(), !reachable);
            assert_eq!(dijkstra_route.is_empty(), !reachable);
            if reachable {
                assert_eq!(
                    astar.route_cost(&astar_route),
                    dijkstra.route_cost(&dijkstra_route)
                );
            }
        }
    }
}

#[test]
fn same_cell_everywhere() {
    let mut rng = StdRng::seed_from_u64(2);
    let grid = random_grid(6, 6, &mut rng);
    for diagonal in [false, true] {
        let pathfinder = Pathfinder::with_diagonal(diagonal);
        for (p, _) in grid.cells() {
            assert_eq!(pathfinder.find_path(&grid, p, p), vec![p]);
        }
    }
}
