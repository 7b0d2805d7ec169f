//! Agents and the evader's flee rule.

use chase_core::{Grid, Point};
use chase_paths::{euclidean, successors};

/// An agent on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub pos: Point,
    /// Moves allowed per turn.
    pub speed: u32,
    /// Remaining cells of the last planned path, current position first.
    /// Empty when no plan exists.
    pub path: Vec<Point>,
}

impl Agent {
    /// Create an agent with no plan.
    pub fn new(pos: Point, speed: u32) -> Self {
        Self {
            pos,
            speed,
            path: Vec::new(),
        }
    }
}

/// Where an evader at `from` ends up after fleeing `threat` for `speed`
/// single-cell moves.
///
/// Each move picks, among staying put and every passable neighbour not
/// occupied by the threat, the cell farthest (Euclidean) from the threat.
/// Ties keep the earlier candidate: staying first, then neighbours in
/// successor order. The evader stops early once no neighbour improves on
/// its current cell.
pub fn flee(grid: &Grid, from: Point, threat: Point, speed: u32) -> Point {
    let mut pos = from;
    for _ in 0..speed {
        let mut best = pos;
        let mut best_dist = euclidean(pos, threat);
        for n in successors(grid.bounds(), pos) {
            if n == threat || !grid.is_passable(n) {
                continue;
            }
            let d = euclidean(n, threat);
            if d > best_dist {
                best = n;
                best_dist = d;
            }
        }
        if best == pos {
            break;
        }
        pos = best;
    }
    pos
}
