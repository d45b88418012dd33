//! Mutable state of a walk under construction.
//!
//! The builder owns both the coordinate sequence and the visited set, so a
//! restart is a plain reset of owned data.

use crate::coord::candidates;
use crate::{Coord, Walk};
use smallvec::SmallVec;
use std::collections::HashSet;

pub(crate) struct WalkBuilder {
    coords: Vec<Coord>,
    visited: HashSet<Coord>,
    /// Trapped attempts discarded so far.
    restarts: u64,
}

impl WalkBuilder {
    /// Start an attempt at the origin, reserving room for `target` coordinates.
    pub fn new(target: usize) -> Self {
        let mut coords = Vec::with_capacity(target);
        coords.push(Coord::ORIGIN);
        let mut visited = HashSet::with_capacity(target);
        visited.insert(Coord::ORIGIN);
        Self {
            coords,
            visited,
            restarts: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn head(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Unvisited neighbours of the current head.
    pub fn candidates(&self) -> SmallVec<[Coord; 4]> {
        candidates(self.head(), &self.visited)
    }

    /// Move the head to `next`, which must be an unvisited neighbour.
    pub fn advance(&mut self, next: Coord) {
        debug_assert!(self.head().is_adjacent(next));
        let fresh = self.visited.insert(next);
        debug_assert!(fresh, "advanced onto visited cell {next}");
        self.coords.push(next);
    }

    /// Discard all progress and return to the origin.
    pub fn reset(&mut self) {
        self.coords.truncate(1);
        self.visited.clear();
        self.visited.insert(Coord::ORIGIN);
        self.restarts += 1;
    }

    /// Repeat the head until the walk holds `target` coordinates.
    pub fn freeze(&mut self, target: usize) {
        let head = self.head();
        if self.coords.len() < target {
            self.coords.resize(target, head);
        }
    }

    pub fn finish(self) -> Walk {
        Walk::from_parts(self.coords, self.restarts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn new_builder_sits_at_origin() {
        let b = WalkBuilder::new(8);
        assert_eq!(b.len(), 1);
        assert_eq!(b.head(), Coord::ORIGIN);
        assert_eq!(b.candidates().len(), 4);
    }

    #[test]
    fn advance_marks_cell_visited() {
        let mut b = WalkBuilder::new(4);
        b.advance(Coord::ORIGIN.step(Direction::Right));
        assert_eq!(b.len(), 2);
        assert_eq!(b.head(), Coord::new(1, 0));
        // the origin is behind us now
        assert!(!b.candidates().contains(&Coord::ORIGIN));
        assert_eq!(b.candidates().len(), 3);
    }

    #[test]
    fn reset_forgets_progress_and_counts() {
        let mut b = WalkBuilder::new(4);
        b.advance(Coord::new(0, 1));
        b.advance(Coord::new(0, 2));
        b.reset();
        assert_eq!(b.len(), 1);
        assert_eq!(b.head(), Coord::ORIGIN);
        assert_eq!(b.candidates().len(), 4);

        let walk = b.finish();
        assert_eq!(walk.coords(), &[Coord::ORIGIN]);
        assert_eq!(walk.restarts(), 1);
    }

    #[test]
    fn freeze_pads_with_head() {
        let mut b = WalkBuilder::new(5);
        b.advance(Coord::new(-1, 0));
        b.freeze(5);
        let walk = b.finish();
        assert_eq!(walk.len(), 5);
        assert_eq!(walk.frozen_len(), 3);
        assert!(walk.coords()[1..].iter().all(|&c| c == Coord::new(-1, 0)));
    }
}
