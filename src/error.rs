use thiserror::Error;

use crate::{grid::CellType, Coord};

/// Errors raised by [Grid](crate::Grid) accessors and the text map parser.
///
/// A search that finds no route is not an error; it yields an empty route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("{pos} is outside of the {width}x{height} grid")]
    OutOfBounds {
        pos: Coord,
        width: usize,
        height: usize,
    },
    #[error("grid map contains no cells")]
    EmptyMap,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell character {ch:?} at row {row}, column {column}")]
    UnknownCell { ch: char, row: usize, column: usize },
    #[error("grid map contains more than one {0:?} cell")]
    DuplicateMarker(CellType),
}
