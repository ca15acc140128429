use grid_navigation::{Coord, Grid, GridSolver, Pathfinder};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let grid: Grid = "S..\n.#.\n..E".parse().expect("valid map");
    println!("{}", grid);
    let pathfinder = Pathfinder::new();
    let start = Coord::new(0, 0);
    let end = Coord::new(2, 2);
    let path = pathfinder.find_path(&grid, start, end);
    println!("Path (cost {}):", pathfinder.route_cost_float(&path));
    for p in path {
        println!("{}", p);
    }
}
