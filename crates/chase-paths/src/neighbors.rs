use chase_core::{Point, Range};

/// Offsets of the eight surrounding cells, in expansion order: the column
/// left of the cell top to bottom, then the cell's own column, then the
/// column to its right.
///
/// This order decides which of several equally good cells enters the
/// frontier first, so it is part of what makes paths deterministic.
pub const SUCCESSOR_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// The in-bounds 8-connected neighbours of `p`.
///
/// Purely topological: passability is left to the caller. Cells on edges and
/// corners simply yield fewer neighbours.
pub fn successors(bounds: Range, p: Point) -> impl Iterator<Item = Point> {
    SUCCESSOR_OFFSETS
        .into_iter()
        .map(move |d| p + d)
        .filter(move |&n| bounds.contains(n))
}
