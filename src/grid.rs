use core::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, info};
use petgraph::unionfind::UnionFind;

use crate::coord::CARDINAL_DIRECTIONS;
use crate::{Coord, GridError};

/// Classification of a single grid cell. Start and End are traversable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellType {
    #[default]
    Walkable,
    Obstacle,
    Start,
    End,
}

impl CellType {
    pub fn is_walkable(self) -> bool {
        self != CellType::Obstacle
    }

    /// Character used for this cell type in text maps.
    pub fn symbol(self) -> char {
        match self {
            CellType::Walkable => '.',
            CellType::Obstacle => '#',
            CellType::Start => 'S',
            CellType::End => 'E',
        }
    }

    pub fn from_symbol(ch: char) -> Option<CellType> {
        match ch {
            '.' => Some(CellType::Walkable),
            '#' => Some(CellType::Obstacle),
            'S' => Some(CellType::Start),
            'E' => Some(CellType::End),
            _ => None,
        }
    }
}

/// A fixed-size grid of [CellType]s with at most one Start and one End cell.
///
/// The positions of the Start and End cells are cached so that they can be
/// queried without scanning. In addition, [Grid] maintains the connected
/// components of its walkable cells in a [UnionFind] structure, which lets a
/// search bail out early when the endpoints are known to be disconnected.
/// Components are joined incrementally when cells open up and flagged as dirty
/// when a cell is blocked, after which [update](Self::update) regenerates them.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
    start: Option<Coord>,
    end: Option<Coord>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Creates a grid with every cell walkable and no Start or End cell.
    pub fn new(width: usize, height: usize) -> Grid {
        let mut grid = Grid {
            width,
            height,
            cells: vec![CellType::Walkable; width * height],
            start: None,
            end: None,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    fn get_ix(&self, pos: Coord) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }

    fn checked_ix(&self, pos: Coord) -> Result<usize, GridError> {
        if self.in_bounds(pos) {
            Ok(self.get_ix(pos))
        } else {
            Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn cell_type(&self, pos: Coord) -> Result<CellType, GridError> {
        self.checked_ix(pos).map(|ix| self.cells[ix])
    }

    /// Assigns a type to a cell. Assigning Start or End demotes the previous
    /// Start or End cell to [CellType::Walkable] if it still holds that type,
    /// so placing a new marker never requires removing the old one first.
    /// Overwriting a marker cell with another type forgets that marker.
    pub fn set_cell_type(&mut self, pos: Coord, cell_type: CellType) -> Result<(), GridError> {
        let ix = self.checked_ix(pos)?;
        let previous = self.cells[ix];
        if previous != cell_type {
            if let Some(marker) = self.marker_mut(previous) {
                if *marker == Some(pos) {
                    *marker = None;
                }
            }
        }
        self.update_special_cell(cell_type, pos);
        self.cells[ix] = cell_type;

        if previous.is_walkable() && !cell_type.is_walkable() {
            // Blocking a cell may split a component in two
            self.components_dirty = true;
        } else if !previous.is_walkable() && cell_type.is_walkable() {
            for dir in CARDINAL_DIRECTIONS {
                let neighbour = pos + dir;
                if self.is_walkable(neighbour) {
                    let n_ix = self.get_ix(neighbour);
                    self.components.union(ix, n_ix);
                }
            }
        }
        Ok(())
    }

    fn marker_mut(&mut self, cell_type: CellType) -> Option<&mut Option<Coord>> {
        match cell_type {
            CellType::Start => Some(&mut self.start),
            CellType::End => Some(&mut self.end),
            _ => None,
        }
    }

    fn update_special_cell(&mut self, cell_type: CellType, pos: Coord) {
        let old = match self.marker_mut(cell_type) {
            Some(marker) => marker.replace(pos),
            None => return,
        };
        if let Some(old) = old.filter(|old| *old != pos) {
            let old_ix = self.get_ix(old);
            if self.cells[old_ix] == cell_type {
                self.cells[old_ix] = CellType::Walkable;
            }
        }
    }

    /// Out of bounds cells are never walkable.
    pub fn is_walkable(&self, pos: Coord) -> bool {
        self.in_bounds(pos) && self.cells[self.get_ix(pos)].is_walkable()
    }

    pub fn start_position(&self) -> Option<Coord> {
        self.start
    }

    pub fn end_position(&self) -> Option<Coord> {
        self.end
    }

    pub fn set_start(&mut self, pos: Coord) -> Result<(), GridError> {
        self.set_cell_type(pos, CellType::Start)
    }

    pub fn set_end(&mut self, pos: Coord) -> Result<(), GridError> {
        self.set_cell_type(pos, CellType::End)
    }

    /// Resets every cell to [CellType::Walkable] and forgets Start and End.
    pub fn clear(&mut self) {
        self.cells.fill(CellType::Walkable);
        self.start = None;
        self.end = None;
        self.generate_components();
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellType)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(ix, &cell_type)| {
            (
                Coord::new((ix % width) as i32, (ix / width) as i32),
                cell_type,
            )
        })
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn component(&self, pos: Coord) -> Option<usize> {
        self.checked_ix(pos)
            .ok()
            .map(|ix| self.components.find(ix))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable cells that
    /// share an edge. Diagonal moves are only legal when both flanking cells
    /// are walkable, so these components hold for 8-neighbour movement too.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Coord::new(x, y);
                if !self.is_walkable(point) {
                    continue;
                }
                let parent_ix = self.get_ix(point);
                for neighbour in [Coord::new(x + 1, y), Coord::new(x, y + 1)] {
                    if self.is_walkable(neighbour) {
                        let ix = self.get_ix(neighbour);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Checks whether a route between the two cells exists, regenerating the
    /// components first if needed. A cell inside the grid always reaches
    /// itself, even when blocked.
    pub fn reachable(&mut self, start: Coord, goal: Coord) -> bool {
        if start == goal {
            return self.in_bounds(start);
        }
        self.update();
        self.is_walkable(start)
            && self.is_walkable(goal)
            && self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
    }

    /// True only if the components are up to date and place the two cells in
    /// different components (or either lies outside of the grid).
    pub fn unreachable(&self, start: Coord, goal: Coord) -> bool {
        if self.components_dirty {
            return false;
        }
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            writeln!(f, "{}", row.iter().map(|c| c.symbol()).join(""))?;
        }
        Ok(())
    }
}

/// Parses a text map with one line per row, using the symbols of
/// [CellType::symbol]. Blank lines and surrounding whitespace are ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Grid, GridError> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>();
        let width = rows
            .first()
            .map(|row| row.chars().count())
            .ok_or(GridError::EmptyMap)?;
        let mut grid = Grid::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell_type = CellType::from_symbol(ch).ok_or(GridError::UnknownCell {
                    ch,
                    row: y,
                    column: x,
                })?;
                let duplicate = match cell_type {
                    CellType::Start => grid.start.is_some(),
                    CellType::End => grid.end.is_some(),
                    _ => false,
                };
                if duplicate {
                    return Err(GridError::DuplicateMarker(cell_type));
                }
                grid.set_cell_type(Coord::new(x as i32, y as i32), cell_type)?;
            }
        }
        grid.update();
        Ok(grid)
    }
}
