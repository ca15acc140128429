//! # grid_navigation
//!
//! Shortest paths on a uniform-cost grid with blocked cells, and an agent that
//! walks the resulting route at a fixed cadence. Paths are computed with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), optionally
//! allowing diagonal moves that never cut past the corner of a blocked cell.
//! Cardinal moves cost [C] and diagonal moves cost [D]. Connected components of
//! the grid are maintained so that searches between disconnected cells return
//! without flood-filling the grid.
//!
//! The [Navigator] ties a [Grid], a [Pathfinder] and an [Agent] together and
//! exposes the editing commands a front-end needs.
pub mod agent;
pub mod astar;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod navigator;
pub mod solver;

pub use agent::{Agent, AgentState};
pub use config::NavigatorConfig;
pub use coord::Coord;
pub use error::GridError;
pub use grid::{CellType, Grid};
pub use navigator::{Navigator, PlacementMode};
pub use solver::{astar::Pathfinder, dijkstra::DijkstraSolver, GridSolver};

/// Cost of a cardinal (straight) move.
pub const C: i32 = 10;
/// Cost of a diagonal move, approximating `C * sqrt(2)`.
pub const D: i32 = 14;
pub const N_SMALLVEC_SIZE: usize = 8;

/// Ordered sequence of cells from start to goal, both included. Empty when no
/// route exists.
pub type Route = Vec<Coord>;
