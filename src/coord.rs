use core::fmt;
use std::ops::{Add, Sub};

use crate::{C, D};

/// A grid cell, addressed by signed integer coordinates so that offsets and
/// out-of-bounds neighbours can be represented directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Up, down, left, right.
pub const CARDINAL_DIRECTIONS: [Coord; 4] = [
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(-1, 0),
    Coord::new(1, 0),
];

pub const DIAGONAL_DIRECTIONS: [Coord; 4] = [
    Coord::new(-1, -1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(1, 1),
];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    pub fn manhattan_distance(&self, other: &Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Number of king moves between the two cells.
    pub fn move_distance(&self, other: &Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Octile distance in the integer cost scale: [C] per straight step and
    /// `D - 2C` added for every step that can be taken diagonally instead.
    pub fn octile_distance(&self, other: &Coord) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        C * (dx + dy) + (D - 2 * C) * dx.min(dy)
    }

    /// Whether `other` is one of the eight cells around this one.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.move_distance(other) == 1
    }

    pub fn is_diagonal_step(&self, other: &Coord) -> bool {
        (self.x - other.x).abs() == 1 && (self.y - other.y).abs() == 1
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Coord {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn arithmetic() {
        let a = Coord::new(3, -2);
        let b = Coord::new(-1, 5);
        assert_eq!(a + b, Coord::new(2, 3));
        assert_eq!(a - b, Coord::new(4, -7));
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn usable_as_set_key() {
        let mut set = FxHashSet::default();
        set.insert(Coord::new(1, 2));
        set.insert(Coord::from((1, 2)));
        set.insert(Coord::new(2, 1));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Coord::new(2, 1)));
    }

    #[test]
    fn distances() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 1);
        assert_eq!(a.manhattan_distance(&b), 4);
        assert_eq!(a.move_distance(&b), 3);
        // One diagonal step and two straight ones
        assert_eq!(a.octile_distance(&b), 14 + 2 * 10);
        assert_eq!(b.octile_distance(&a), a.octile_distance(&b));
        assert_eq!(a.octile_distance(&a), 0);
    }

    #[test]
    fn direction_tables() {
        let origin = Coord::default();
        assert!(CARDINAL_DIRECTIONS
            .iter()
            .all(|d| origin.manhattan_distance(d) == 1));
        assert!(DIAGONAL_DIRECTIONS
            .iter()
            .all(|d| origin.is_diagonal_step(d)));
    }
}
