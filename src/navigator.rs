use core::fmt;

use log::debug;

use crate::{Agent, CellType, Coord, Grid, GridError, NavigatorConfig, Pathfinder, Route};

/// What a primary action on a cell does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlacementMode {
    #[default]
    Obstacle,
    Start,
    End,
    Navigate,
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PlacementMode::Obstacle => "Obstacle",
            PlacementMode::Start => "Start",
            PlacementMode::End => "End",
            PlacementMode::Navigate => "Navigate",
        };
        f.write_str(name)
    }
}

/// Owns a [Grid], a [Pathfinder] and an [Agent] and keeps the three in sync
/// while the grid is being edited. Every edit that can change the route
/// between the Start and End cells triggers a new search, and every
/// successful search hands its route to the agent.
#[derive(Clone, Debug)]
pub struct Navigator {
    grid: Grid,
    pathfinder: Pathfinder,
    agent: Agent,
    mode: PlacementMode,
    route: Route,
}

impl Navigator {
    /// Creates a grid of the configured size with the Start cell in the top
    /// left corner and the End cell in the bottom right one, and computes
    /// the initial route.
    pub fn new(config: &NavigatorConfig) -> Result<Navigator, GridError> {
        let mut grid = Grid::new(config.width, config.height);
        grid.set_start(Coord::new(0, 0))?;
        grid.set_end(Coord::new(config.width as i32 - 1, config.height as i32 - 1))?;
        let mut navigator = Navigator {
            grid,
            pathfinder: Pathfinder::with_diagonal(config.allow_diagonal),
            agent: Agent::new(config.step_interval),
            mode: PlacementMode::default(),
            route: Route::new(),
        };
        navigator.recalculate_path();
        Ok(navigator)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pathfinder(&self) -> &Pathfinder {
        &self.pathfinder
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// The most recently computed route.
    pub fn route(&self) -> &[Coord] {
        &self.route
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PlacementMode) {
        self.mode = mode;
    }

    pub fn set_step_interval(&mut self, seconds: f32) {
        self.agent.set_step_interval(seconds);
    }

    /// Applies the current [PlacementMode] to `pos`.
    pub fn primary_action(&mut self, pos: Coord) -> Result<(), GridError> {
        let cell_type = self.grid.cell_type(pos)?;
        debug!("{} action on {}", self.mode, pos);
        match self.mode {
            PlacementMode::Obstacle => {
                if cell_type == CellType::Walkable {
                    self.grid.set_cell_type(pos, CellType::Obstacle)?;
                    self.recalculate_path();
                }
            }
            PlacementMode::Start => {
                self.grid.set_start(pos)?;
                self.recalculate_path();
            }
            PlacementMode::End => {
                self.grid.set_end(pos)?;
                self.recalculate_path();
            }
            PlacementMode::Navigate => {
                if cell_type.is_walkable() {
                    self.navigate_to(pos);
                }
            }
        }
        Ok(())
    }

    /// Removes an obstacle from `pos`.
    pub fn secondary_action(&mut self, pos: Coord) -> Result<(), GridError> {
        if self.grid.cell_type(pos)? == CellType::Obstacle {
            self.grid.set_cell_type(pos, CellType::Walkable)?;
            self.recalculate_path();
        }
        Ok(())
    }

    pub fn toggle_diagonal(&mut self) {
        let allow = !self.pathfinder.allow_diagonal_move;
        self.set_allow_diagonal(allow);
    }

    pub fn set_allow_diagonal(&mut self, allow: bool) {
        self.pathfinder.set_allow_diagonal(allow);
        self.recalculate_path();
    }

    /// Searches from the Start cell to the End cell.
    pub fn recalculate_path(&mut self) {
        self.grid.update();
        let (Some(start), Some(end)) = (self.grid.start_position(), self.grid.end_position())
        else {
            debug!("Start or end missing, clearing route");
            self.route.clear();
            self.agent.reset();
            return;
        };
        let route = self.pathfinder.find_path(&self.grid, start, end);
        self.assign_route(route);
    }

    /// Searches from the agent's current cell to `destination`.
    pub fn navigate_to(&mut self, destination: Coord) {
        self.grid.update();
        let origin = self.agent_origin();
        let route = self.pathfinder.find_path(&self.grid, origin, destination);
        self.assign_route(route);
    }

    fn assign_route(&mut self, route: Route) {
        debug!("Assigning route of {} cells", route.len());
        self.route = route;
        if self.route.is_empty() {
            self.agent.reset();
        } else {
            self.agent.set_path(self.route.clone());
        }
    }

    /// The agent's position, falling back to the Start cell and then to the
    /// top left corner.
    pub fn agent_origin(&self) -> Coord {
        self.agent
            .position()
            .or_else(|| self.grid.start_position())
            .unwrap_or_default()
    }

    pub fn update(&mut self, delta_time: f32) {
        self.agent.update(delta_time);
    }

    /// One-line summary of the editing state.
    pub fn status(&self) -> String {
        let diagonal = if self.pathfinder.allow_diagonal_move {
            "ON"
        } else {
            "OFF"
        };
        let path = if self.route.is_empty() {
            "No path".to_owned()
        } else {
            format!("Path: {} nodes", self.route.len())
        };
        format!("Mode: {} | Diagonal: {} | {}", self.mode, diagonal, path)
    }
}
