use chase_core::Point;

/// A path found by [`astar_path`](crate::astar_path): every cell from the
/// start to the goal, both inclusive, plus the accumulated entry cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    cost: f64,
}

impl Path {
    /// Build a path from cells ordered start to goal. `points` must not be
    /// empty.
    pub(crate) fn new(points: Vec<Point>, cost: f64) -> Self {
        debug_assert!(!points.is_empty());
        Self { points, cost }
    }

    /// The cells, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves.
    #[inline]
    pub fn edges(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Sum of the entry costs of every cell after the start.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The cell reached after at most `moves` moves along the path.
    #[inline]
    pub fn step(&self, moves: usize) -> Point {
        self.points[moves.min(self.edges())]
    }

    /// Iterate over the cells, start first.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consume the path, returning its cells.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Path {
        Path::new((0..5).map(|i| Point::new(i, i)).collect(), 4.0)
    }

    #[test]
    fn accessors() {
        let p = diagonal();
        assert_eq!(p.len(), 5);
        assert_eq!(p.edges(), 4);
        assert_eq!(p.start(), Point::new(0, 0));
        assert_eq!(p.goal(), Point::new(4, 4));
        assert_eq!(p.cost(), 4.0);
        assert!(!p.is_empty());
    }

    #[test]
    fn step_is_clamped() {
        let p = diagonal();
        assert_eq!(p.step(0), Point::new(0, 0));
        assert_eq!(p.step(2), Point::new(2, 2));
        assert_eq!(p.step(99), Point::new(4, 4));
    }

    #[test]
    fn single_cell() {
        let p = Path::new(vec![Point::new(3, 1)], 0.0);
        assert_eq!(p.edges(), 0);
        assert_eq!(p.step(1), Point::new(3, 1));
        assert_eq!(p.start(), p.goal());
    }
}
