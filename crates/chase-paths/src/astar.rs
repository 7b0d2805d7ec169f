use chase_core::{Grid, GridError, Point, Range};
use log::{debug, trace};

use crate::frontier::{Frontier, NO_PARENT, Node};
use crate::path::Path;
use crate::traits::AstarPather;

/// Compute a path from `from` to `to` using A*.
///
/// Returns `Ok(None)` when the goal cannot be reached, and
/// [`GridError::OutOfBounds`] when either endpoint lies outside the pather's
/// bounds. When `from == to` the path is just `[from]`.
///
/// The goal test happens while expanding successors: the search stops as soon
/// as the goal is generated, without waiting for it to reach the front of the
/// open set. The start cell's own entry cost is never charged.
///
/// All per-cell scores live in scratch owned by this call, so the pather is
/// only borrowed immutably and may serve several searches at once.
pub fn astar_path<P: AstarPather + ?Sized>(
    pather: &P,
    from: Point,
    to: Point,
) -> Result<Option<Path>, GridError> {
    let bounds = pather.bounds();
    let start_idx = index(bounds, from)?;
    let goal_idx = index(bounds, to)?;

    if start_idx == goal_idx {
        return Ok(Some(Path::new(vec![from], 0.0)));
    }

    let mut nodes = vec![Node::default(); bounds.len()];
    let mut open = Frontier::new();
    nodes[start_idx].f = pather.estimate(from, to);
    open.insert(start_idx, &mut nodes);

    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0usize;

    while let Some(qi) = open.pop(&mut nodes) {
        expanded += 1;
        let q = bounds.point_at(qi);
        let q_g = nodes[qi].g;
        trace!("astar: expand {q} g={q_g} f={}", nodes[qi].f);

        nbuf.clear();
        pather.neighbors(q, &mut nbuf);

        for &s in nbuf.iter() {
            let Some(si) = bounds.index_of(s) else {
                continue;
            };
            let Some(cost) = pather.entry_cost(s).filter(|&c| c >= 0) else {
                continue;
            };
            let g = q_g + f64::from(cost);

            if si == goal_idx {
                nodes[si].parent = qi;
                let path = reconstruct(&nodes, bounds, goal_idx, g);
                debug!(
                    "astar: {from} -> {to}: {} moves, cost {g}, {expanded} expanded",
                    path.edges()
                );
                return Ok(Some(path));
            }

            let f = g + pather.estimate(s, to);
            let n = &mut nodes[si];
            if n.closed && f >= n.f {
                continue;
            }
            if !n.open {
                // New cell, or a closed one reached more cheaply.
                n.f = f;
                n.g = g;
                n.parent = qi;
                open.insert(si, &mut nodes);
            } else if f < n.f {
                // Queued cells are rescored where they stand.
                n.f = f;
                n.g = g;
                n.parent = qi;
            }
        }

        nodes[qi].closed = true;
    }

    debug!("astar: {from} -> {to}: no path, {expanded} expanded");
    Ok(None)
}

/// [`astar_path`] over a terrain [`Grid`].
#[inline]
pub fn search(grid: &Grid, from: Point, to: Point) -> Result<Option<Path>, GridError> {
    astar_path(grid, from, to)
}

fn index(bounds: Range, p: Point) -> Result<usize, GridError> {
    bounds
        .index_of(p)
        .ok_or(GridError::OutOfBounds { pos: p, bounds })
}

/// Walk predecessors back from the goal and reverse.
fn reconstruct(nodes: &[Node], bounds: Range, goal_idx: usize, cost: f64) -> Path {
    let mut points = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        assert!(
            points.len() < nodes.len(),
            "astar: predecessor cycle through {}",
            bounds.point_at(ci)
        );
        points.push(bounds.point_at(ci));
        ci = nodes[ci].parent;
    }
    points.reverse();
    Path::new(points, cost)
}
