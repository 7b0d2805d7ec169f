use chase_core::Point;

/// Euclidean (L2) distance between two points. This is the A* heuristic.
///
/// Entry costs are charged per cell regardless of direction, so on terrain
/// costing more than 1 this can overestimate the remaining cost.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two points: the fewest 8-connected
/// moves between them on open terrain.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_three_four_five() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(3, 4), Point::new(0, 0)), 5.0);
        assert_eq!(euclidean(Point::new(2, 2), Point::new(2, 2)), 0.0);
    }

    #[test]
    fn chebyshev_counts_diagonal_moves() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(4, 4)), 4);
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(3, 4)), 4);
        assert_eq!(chebyshev(Point::new(1, 5), Point::new(1, 5)), 0);
    }
}
