use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;

/// A cell of the 2D integer lattice.
///
/// Equality and hashing are structural. The `y` axis grows "down", which only
/// matters for the names of [`Direction::Up`] and [`Direction::Down`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The starting cell of every walk.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one unit step away in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the four Manhattan neighbours in [`Direction::ALL`] order.
    pub fn neighbours(self) -> [Coord; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }

    /// L1 distance between two cells.
    pub fn manhattan(self, other: Coord) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// True if the cells differ by exactly one in exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single lattice move.
///
/// The declaration order is the enumeration order used by [`candidates`], and
/// [`Direction::index`] gives the stable action code of each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `y - 1`
    Up,
    /// `y + 1`
    Down,
    /// `x - 1`
    Left,
    /// `x + 1`
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)` of this move.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Action code in `0..4`.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// The move leading from `from` to the adjacent cell `to`, if any.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        Direction::ALL.into_iter().find(|&dir| from.step(dir) == to)
    }
}

/// Returns the neighbours of `coord` that are not in `visited`.
///
/// Neighbours are checked in the fixed order up, down, left, right. An empty
/// result means `coord` is a trap.
pub fn candidates(coord: Coord, visited: &HashSet<Coord>) -> SmallVec<[Coord; 4]> {
    coord
        .neighbours()
        .into_iter()
        .filter(|c| !visited.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_has_four_candidates() {
        let visited = HashSet::from([Coord::ORIGIN]);
        let found: HashSet<Coord> = candidates(Coord::ORIGIN, &visited).into_iter().collect();
        let expected = HashSet::from([
            Coord::new(0, -1),
            Coord::new(0, 1),
            Coord::new(-1, 0),
            Coord::new(1, 0),
        ]);
        assert_eq!(found, expected);
    }

    #[test]
    fn candidates_follow_up_down_left_right() {
        let visited = HashSet::from([Coord::ORIGIN]);
        let found = candidates(Coord::ORIGIN, &visited);
        assert_eq!(
            found.as_slice(),
            &[
                Coord::new(0, -1),
                Coord::new(0, 1),
                Coord::new(-1, 0),
                Coord::new(1, 0)
            ]
        );
    }

    #[test]
    fn visited_neighbours_are_skipped() {
        let here = Coord::new(3, 3);
        let visited = HashSet::from([here, here.step(Direction::Up), here.step(Direction::Left)]);
        let found = candidates(here, &visited);
        assert_eq!(
            found.as_slice(),
            &[here.step(Direction::Down), here.step(Direction::Right)]
        );
    }

    #[test]
    fn surrounded_cell_is_a_trap() {
        let here = Coord::new(-2, 5);
        let visited: HashSet<Coord> = here.neighbours().into_iter().collect();
        assert!(candidates(here, &visited).is_empty());
    }

    #[test]
    fn adjacency_requires_single_unit_step() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(2, 2)));
        assert!(!c.is_adjacent(Coord::new(1, 3)));
    }

    #[test]
    fn direction_codes_round_trip_and_invert_steps() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_index(dir.index()), Some(dir));
            assert_eq!(
                Direction::between(Coord::ORIGIN, Coord::ORIGIN.step(dir)),
                Some(dir)
            );
        }
        assert_eq!(Direction::from_index(4), None);
        assert_eq!(Direction::between(Coord::ORIGIN, Coord::new(1, 1)), None);
    }
}
