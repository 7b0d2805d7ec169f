use chase_core::{Grid, Point, Range};

use crate::distance::euclidean;
use crate::neighbors::successors;

/// Minimal pathfinding interface: grid extent and neighbour enumeration.
pub trait Pather {
    /// The rectangle searches are confined to.
    fn bounds(&self) -> Range;

    /// Append neighbours of `p` into `buf`. The caller clears `buf` before
    /// calling. Defaults to the 8-connected in-bounds neighbours.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(successors(self.bounds(), p));
    }
}

/// Pather with per-cell entry costs.
pub trait WeightedPather: Pather {
    /// Cost of moving into `p` from any direction, or `None` if `p` cannot
    /// be entered.
    fn entry_cost(&self, p: Point) -> Option<i32>;
}

/// Full A* pather.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `from` to `to`. Defaults to the
    /// straight-line distance.
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn entry_cost(&self, p: Point) -> Option<i32> {
        self.cost(p).filter(|&c| c >= 0)
    }
}

impl AstarPather for Grid {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_entry_cost_hides_blocked() {
        let g = Grid::parse(".#\n3.").unwrap();
        assert_eq!(g.entry_cost(Point::new(0, 0)), Some(1));
        assert_eq!(g.entry_cost(Point::new(1, 0)), None);
        assert_eq!(g.entry_cost(Point::new(0, 1)), Some(3));
        assert_eq!(g.entry_cost(Point::new(5, 5)), None);
    }

    #[test]
    fn grid_neighbors_include_blocked() {
        let g = Grid::parse(".#\n##").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn grid_estimate_is_euclidean() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(3, 4)), 5.0);
    }
}
