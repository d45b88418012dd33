use crate::{Coord, Direction, RestartPolicy};
use serde::Serialize;
use std::collections::HashSet;

/// A finished walk on the square lattice.
///
/// The first coordinate is always [`Coord::ORIGIN`] and the walk holds at
/// least one coordinate. Walks built with [`RestartPolicy::Restart`] never
/// repeat a cell. Walks built with [`RestartPolicy::Stall`] may end in a
/// frozen run: the trap cell repeated until the requested length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    coords: Vec<Coord>,
    restarts: u64,
}

impl Walk {
    pub(crate) fn from_parts(coords: Vec<Coord>, restarts: u64) -> Self {
        debug_assert_eq!(coords.first(), Some(&Coord::ORIGIN));
        Self { coords, restarts }
    }

    /// Returns the coordinates, origin first.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }

    /// Number of coordinates, including the origin.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Number of steps past the origin: `len() - 1`.
    pub fn steps(&self) -> usize {
        self.coords.len() - 1
    }

    pub fn last(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Number of trapped attempts thrown away before this walk was finished.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Length of the trailing run of padded copies of the trap cell.
    pub fn frozen_len(&self) -> usize {
        self.coords
            .windows(2)
            .rev()
            .take_while(|w| w[0] == w[1])
            .count()
    }

    /// True if the walk got trapped and was padded.
    pub fn is_trapped(&self) -> bool {
        self.frozen_len() > 0
    }

    /// The genuinely advanced prefix, without the frozen run.
    pub fn advanced(&self) -> &[Coord] {
        &self.coords[..self.coords.len() - self.frozen_len()]
    }

    /// The moves taken along [`Walk::advanced`].
    pub fn directions(&self) -> Vec<Direction> {
        self.advanced()
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
            .collect()
    }

    /// Squared Euclidean distance from the origin to the last coordinate.
    pub fn end_to_end_sq(&self) -> i64 {
        let end = self.last();
        i64::from(end.x).pow(2) + i64::from(end.y).pow(2)
    }

    /// True if no coordinate appears twice.
    pub fn is_self_avoiding(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.coords.len());
        self.coords.iter().all(|c| seen.insert(*c))
    }

    /// True if the advanced prefix moves one unit step at a time.
    ///
    /// The frozen run, if any, is constant by construction of
    /// [`Walk::frozen_len`].
    pub fn is_connected(&self) -> bool {
        self.advanced().windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Checks the shape a walk built under `policy` must have.
    pub fn satisfies(&self, policy: RestartPolicy) -> bool {
        if self.coords.first() != Some(&Coord::ORIGIN) || !self.is_connected() {
            return false;
        }
        match policy {
            RestartPolicy::Restart => self.is_self_avoiding(),
            RestartPolicy::Stall => {
                let mut seen = HashSet::with_capacity(self.coords.len());
                self.advanced().iter().all(|c| seen.insert(*c))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Walk {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(points: &[(i32, i32)]) -> Walk {
        Walk::from_parts(points.iter().copied().map(Coord::from).collect(), 0)
    }

    #[test]
    fn single_origin_walk() {
        let w = walk(&[(0, 0)]);
        assert_eq!(w.len(), 1);
        assert_eq!(w.steps(), 0);
        assert_eq!(w.frozen_len(), 0);
        assert!(w.directions().is_empty());
        assert!(w.satisfies(RestartPolicy::Restart));
        assert!(w.satisfies(RestartPolicy::Stall));
    }

    #[test]
    fn frozen_run_is_counted_from_the_end() {
        let w = walk(&[(0, 0), (1, 0), (1, 1), (1, 1), (1, 1)]);
        assert_eq!(w.frozen_len(), 2);
        assert!(w.is_trapped());
        assert_eq!(w.advanced().len(), 3);
        assert_eq!(w.directions(), vec![Direction::Right, Direction::Down]);
        assert!(w.satisfies(RestartPolicy::Stall));
        assert!(!w.satisfies(RestartPolicy::Restart));
    }

    #[test]
    fn revisit_inside_the_walk_is_rejected() {
        let w = walk(&[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0), (0, -1)]);
        assert!(w.is_connected());
        assert!(!w.is_self_avoiding());
        assert!(!w.satisfies(RestartPolicy::Stall));
    }

    #[test]
    fn jump_breaks_connectivity() {
        let w = walk(&[(0, 0), (1, 0), (3, 0)]);
        assert!(!w.is_connected());
        assert!(!w.satisfies(RestartPolicy::Restart));
    }

    #[test]
    fn end_to_end_distance() {
        let w = walk(&[(0, 0), (-1, 0), (-1, -1), (-2, -1)]);
        assert_eq!(w.end_to_end_sq(), 5);
    }
}
