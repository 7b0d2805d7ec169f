use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// Per-search node state
// ---------------------------------------------------------------------------

/// Sentinel parent index for "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Search-scoped state of one cell. Lives only as long as one search.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: NO_PARENT,
            open: false,
            closed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// The open set, kept as an ordered list of cell indices.
///
/// A cell is inserted just before the first queued cell whose current `f`
/// is strictly greater, so among equal `f` the earlier arrival stays ahead.
/// Lowering a queued cell's `f` edits its node only: the cell keeps its place
/// in the list, and [`Frontier::pop`] always takes the front.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    order: VecDeque<usize>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue `idx`, which must not be open, ranked by `nodes[idx].f`.
    pub(crate) fn insert(&mut self, idx: usize, nodes: &mut [Node]) {
        debug_assert!(!nodes[idx].open);
        nodes[idx].open = true;
        let f = nodes[idx].f;
        let at = self
            .order
            .iter()
            .position(|&o| f < nodes[o].f)
            .unwrap_or(self.order.len());
        self.order.insert(at, idx);
    }

    /// Remove and return the front cell, marking it no longer open.
    pub(crate) fn pop(&mut self, nodes: &mut [Node]) -> Option<usize> {
        let idx = self.order.pop_front()?;
        nodes[idx].open = false;
        Some(idx)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}
