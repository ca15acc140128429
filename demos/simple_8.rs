use grid_navigation::{CellType, Coord, Grid, GridSolver, Pathfinder};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S    |
// | #   |
// |  #  |
// |   # |
// |    E|
//  _____
// Nodes have an 8-neighborhood, but diagonal moves may not cut past an obstacle.

fn main() {
    env_logger::init();
    let mut grid = Grid::new(5, 5);
    grid.set_start(Coord::new(0, 0)).expect("in bounds");
    grid.set_end(Coord::new(4, 4)).expect("in bounds");
    for i in 1..4 {
        grid.set_cell_type(Coord::new(i, i), CellType::Obstacle).expect("in bounds");
    }
    grid.update();
    println!("{}", grid);
    let pathfinder = Pathfinder::with_diagonal(true);
    let path = pathfinder.find_path(&grid, Coord::new(0, 0), Coord::new(4, 4));
    println!("Path (cost {}):", pathfinder.route_cost_float(&path));
    for p in path {
        println!("{}", p);
    }
}
